// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! distci-core: domain types for the DistCI client

pub mod macros;

pub mod build_number;
pub mod id;
pub mod job;
pub mod state;
pub mod task;

pub use build_number::{sort_newest_first, BuildNumber};
pub use job::{sort_jobs, JobConfig, JobId};
pub use state::{ArtifactId, ArtifactRecord, BuildState};
pub use task::{Task, TaskId};
