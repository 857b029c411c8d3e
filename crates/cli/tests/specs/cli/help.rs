// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn distci_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn distci_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("open")
        .stdout_has("jobs")
        .stdout_has("builds")
        .stdout_has("trigger")
        .stdout_has("artifact")
        .stdout_has("task");
}

#[test]
fn distci_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn distci_unknown_output_format_fails() {
    cli().args(&["jobs", "-o", "yaml"]).fails().stderr_has("yaml");
}
