// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request targets.

use distci_core::{ArtifactId, JobId, TaskId};

use crate::segment::encode_segment;

/// Path prefix the frontend serves the API under.
pub const API_ROOT: &str = "/distci";

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

distci_core::simple_display! {
    Method {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
    }
}

/// A single API call the client knows how to make.
///
/// Identifiers are held unencoded; [`Endpoint::path`] percent-encodes each
/// one so it always stays a single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListJobs,
    GetJob { job: JobId },
    /// Create or replace a job's configuration (request carries a body)
    SetJob { job: JobId },
    ListBuilds { job: JobId },
    TriggerBuild { job: JobId },
    GetBuild { job: JobId, build: String },
    GetConsole { job: JobId, build: String },
    GetArtifact { job: JobId, build: String, artifact: ArtifactId },
    ListTasks,
    GetTask { task: TaskId },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Self::TriggerBuild { .. } => Method::Post,
            Self::SetJob { .. } => Method::Put,
            _ => Method::Get,
        }
    }

    /// Absolute request path, including [`API_ROOT`].
    pub fn path(&self) -> String {
        match self {
            Self::ListJobs => format!("{API_ROOT}/jobs"),
            Self::GetJob { job } | Self::SetJob { job } => {
                format!("{API_ROOT}/jobs/{}", encode_segment(job))
            }
            Self::ListBuilds { job } | Self::TriggerBuild { job } => {
                format!("{API_ROOT}/jobs/{}/builds", encode_segment(job))
            }
            Self::GetBuild { job, build } => {
                format!("{API_ROOT}/jobs/{}/builds/{}", encode_segment(job), encode_segment(build))
            }
            Self::GetConsole { job, build } => format!(
                "{API_ROOT}/jobs/{}/builds/{}/console",
                encode_segment(job),
                encode_segment(build)
            ),
            Self::GetArtifact { job, build, artifact } => format!(
                "{API_ROOT}/jobs/{}/builds/{}/artifacts/{}",
                encode_segment(job),
                encode_segment(build),
                encode_segment(artifact)
            ),
            Self::ListTasks => format!("{API_ROOT}/tasks"),
            Self::GetTask { task } => format!("{API_ROOT}/tasks/{}", encode_segment(task)),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
