// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View-models, one per routed view.
//!
//! Each view-model owns a client and a serializable scope. Operations await
//! their request and apply the reply to the scope on success; on failure the
//! scope is left untouched and the error is only traced.

mod build_state;
mod job_builds;
mod job_list;

pub use build_state::{BuildStateScope, BuildStateView};
pub use job_builds::{JobBuildsScope, JobBuildsView, TriggerOutcome};
pub use job_list::{JobListScope, JobListView};
