// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Transport adapters for the DistCI HTTP API

pub mod api;

pub use api::{ApiAdapter, ApiError, HttpApiAdapter, HttpConfig};
#[cfg(any(test, feature = "test-support"))]
pub use api::{ApiCall, FakeApiAdapter};
