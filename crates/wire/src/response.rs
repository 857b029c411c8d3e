// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response bodies.

use distci_core::{BuildNumber, BuildState, JobId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /distci/jobs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsBody {
    pub jobs: Vec<JobId>,
}

/// Body of `GET /distci/jobs/{job}/builds`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildsBody {
    pub builds: Vec<BuildNumber>,
    /// Only present when the job has at least one build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_build_number: Option<BuildNumber>,
}

/// Body of `GET /distci/jobs/{job}/builds/{build}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<BuildNumber>,
    pub state: BuildState,
}

/// Body of `POST /distci/jobs/{job}/builds`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredBuild {
    pub job_id: JobId,
    pub build_number: BuildNumber,
    #[serde(default)]
    pub state: Value,
}

/// Body of `GET /distci/tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TasksBody {
    pub tasks: Vec<TaskId>,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
