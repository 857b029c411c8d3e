// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci route` specs

use crate::prelude::*;

#[test]
fn unknown_path_redirects_to_jobs() {
    cli()
        .args(&["route", "/unknown/path"])
        .passes()
        .stdout_eq("Redirect: /unknown/path -> /jobs\nView: job list\nPath: /jobs\n");
}

#[test]
fn build_path_resolves_with_params() {
    let run = cli().args(&["route", "/jobs/nightly/builds/12", "-o", "json"]).passes();

    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["route"]["jobid"], "nightly");
    assert_eq!(value["route"]["build"], "12");
    assert_eq!(value["view"], "build_state");
}

#[test]
fn route_needs_no_server() {
    cli().args(&["route", "/jobs", "--url", DEAD_URL]).passes().stdout_has("View: job list");
}
