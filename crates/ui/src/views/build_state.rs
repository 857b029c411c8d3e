// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use distci_adapters::ApiAdapter;
use distci_core::{ArtifactRecord, BuildState, JobId};
use serde::Serialize;

use crate::client::DistciClient;

/// Data behind the state view of one build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildStateScope {
    pub jobid: JobId,
    pub build: String,
    /// State document as received, minus the popped artifact file names
    pub state: Option<BuildState>,
    /// Artifact rows in the document's mapping order
    pub artifacts: Option<Vec<ArtifactRecord>>,
}

/// View-model showing one build's state and artifacts.
pub struct BuildStateView<A> {
    client: DistciClient<A>,
    scope: BuildStateScope,
}

impl<A: ApiAdapter> BuildStateView<A> {
    /// Create the view for `jobid`/`build` and load it once.
    pub async fn activate(client: DistciClient<A>, jobid: JobId, build: String) -> Self {
        let mut view = Self {
            client,
            scope: BuildStateScope { jobid, build, state: None, artifacts: None },
        };
        view.load().await;
        view
    }

    /// Fetch the build state and derive the artifact rows from it.
    ///
    /// Rows keep the mapping order of `state.artifacts`; they are not sorted.
    pub async fn load(&mut self) {
        let scope = &mut self.scope;
        match self.client.get_build(&scope.jobid, &scope.build).await {
            Ok(mut state) => {
                let artifacts = state.take_artifact_records();
                scope.state = Some(state);
                scope.artifacts = Some(artifacts);
            }
            Err(e) => tracing::debug!(
                job = %scope.jobid,
                build = %scope.build,
                error = %e,
                "build state not updated"
            ),
        }
    }

    pub fn scope(&self) -> &BuildStateScope {
        &self.scope
    }

    pub fn into_scope(self) -> BuildStateScope {
        self.scope
    }
}

#[cfg(test)]
#[path = "build_state_tests.rs"]
mod tests;
