// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP API contract of the DistCI frontend.
//!
//! Every request the client makes is an [`Endpoint`]; successful replies are
//! JSON bodies decoded into the body types re-exported here.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod endpoint;
mod response;
mod segment;

pub use endpoint::{Endpoint, Method, API_ROOT};
pub use response::{BuildBody, BuildsBody, JobsBody, TasksBody, TriggeredBuild};
pub use segment::{decode_segment, encode_segment};
