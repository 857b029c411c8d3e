// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod artifact;
pub mod console;
pub mod job;
pub mod route;
pub mod task;
pub mod view;
pub(crate) mod view_display;
