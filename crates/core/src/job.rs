// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifiers and job configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

crate::define_name! {
    /// Identifier of a job, a named and recurring build definition.
    ///
    /// Opaque to the client: it is listed by the server and spliced back into
    /// request paths unchanged.
    pub struct JobId;
}

/// Sort job identifiers for display: ascending, lexicographic.
pub fn sort_jobs(jobs: &mut [JobId]) {
    jobs.sort();
}

/// A job's configuration document as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    pub job_id: JobId,
    #[serde(default)]
    pub config: Value,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
