// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build state document and the artifact listing derived from it.
//!
//! The server owns the shape of the state document; the client only relies
//! on the `artifacts` mapping and carries every other field through
//! untouched, in document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

crate::define_name! {
    /// Identifier of an artifact within one build.
    pub struct ArtifactId;
}

/// State document of a single build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildState {
    /// Artifact id to path segments, e.g. `["dir", "sub", "file.txt"]`.
    #[serde(default)]
    pub artifacts: IndexMap<ArtifactId, Vec<String>>,

    /// Remaining fields (status, tasks, ...), opaque to the client.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One artifact row as displayed in the build view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: ArtifactId,
    /// All path segments joined with `/`.
    pub fullname: String,
    /// Last path segment; `None` when the artifact has no segments.
    pub filename: Option<String>,
}

impl BuildState {
    /// Build the artifact rows in mapping order.
    ///
    /// `fullname` is taken from the complete segment list, then the last
    /// segment is popped off the stored list to become `filename`. The
    /// document therefore keeps the directory part only after this call.
    pub fn take_artifact_records(&mut self) -> Vec<ArtifactRecord> {
        self.artifacts
            .iter_mut()
            .map(|(id, segments)| {
                let fullname = segments.join("/");
                let filename = segments.pop();
                ArtifactRecord { id: id.clone(), fullname, filename }
            })
            .collect()
    }

    /// Look up a top-level field other than `artifacts`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
