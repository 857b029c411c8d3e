// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    not_found   = { ApiError::Status { endpoint: "GET /distci/jobs/x".into(), status: 404 }, EXIT_NOT_FOUND },
    conflict    = { ApiError::Status { endpoint: "GET /distci/jobs/x/builds/1".into(), status: 409 }, EXIT_FAILURE },
    refused     = { ApiError::Transport { endpoint: "GET /distci/jobs".into(), message: "refused".into() }, EXIT_UNREACHABLE },
    no_frontend = { ApiError::NoFrontend, EXIT_UNREACHABLE },
)]
fn api_error_maps_to_exit_code(err: ApiError, code: i32) {
    let message = err.to_string();
    let exit = ExitError::from(err);
    assert_eq!(exit.code, code);
    assert_eq!(exit.message, message);
}

#[test]
fn display_is_message() {
    let exit = ExitError::new(EXIT_FAILURE, "boom");
    assert_eq!(exit.to_string(), "boom");
}
