// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! distci-ui: routing and view-models for browsing a DistCI server.
//!
//! A [`RouteTable`] maps a path to one of three views. [`App::open`]
//! activates the view-model for that route, which fetches what it needs
//! through a [`DistciClient`] and exposes the result as a plain scope value
//! for whatever renders it.
//!
//! View-models never report request failures: a failed request leaves the
//! scope exactly as it was.

pub mod app;
pub mod client;
pub mod routes;
pub mod views;

pub use app::{ActiveView, App, Scope};
pub use client::DistciClient;
pub use routes::{Resolution, Route, RoutePattern, RouteTable, View};
pub use views::{
    BuildStateScope, BuildStateView, JobBuildsScope, JobBuildsView, JobListScope, JobListView,
    TriggerOutcome,
};
