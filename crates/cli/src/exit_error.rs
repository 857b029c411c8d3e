// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Command handlers return `ExitError` (inside `anyhow::Error`) instead of
//! exiting directly, so `main()` owns process termination.

use std::fmt;

use distci_adapters::ApiError;

/// Generic failure
pub const EXIT_FAILURE: i32 = 1;
/// The server answered 404 for the requested job, build or artifact
pub const EXIT_NOT_FOUND: i32 = 2;
/// No frontend could be reached
pub const EXIT_UNREACHABLE: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl From<ApiError> for ExitError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Status { status: 404, .. } => EXIT_NOT_FOUND,
            ApiError::Transport { .. } | ApiError::NoFrontend => EXIT_UNREACHABLE,
            _ => EXIT_FAILURE,
        };
        Self::new(code, err.to_string())
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
