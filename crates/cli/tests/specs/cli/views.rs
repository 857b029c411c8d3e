// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View command specs against a canned HTTP server

use crate::prelude::*;

#[test]
fn jobs_are_listed_sorted() {
    let server = FakeServer::start(1, vec![("GET /distci/jobs ", 200, r#"{"jobs":["b","a","c"]}"#)]);

    cli()
        .args(&["jobs", "--url", &server.url])
        .passes()
        .stdout_eq("JOB  VIEW\na    /jobs/a\nb    /jobs/b\nc    /jobs/c\n");

    assert_eq!(server.requests(), vec!["GET /distci/jobs HTTP/1.1"]);
}

#[test]
fn builds_are_listed_newest_first() {
    let server = FakeServer::start(
        1,
        vec![("GET /distci/jobs/nightly/builds ", 200, r#"{"builds":[3,1,2]}"#)],
    );

    let run = cli().args(&["builds", "nightly", "--url", &server.url, "-o", "json"]).passes();

    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["builds"], serde_json::json!([3, 2, 1]));
}

#[test]
fn trigger_posts_then_refreshes() {
    let server = FakeServer::start(
        3,
        vec![
            ("GET /distci/jobs/nightly/builds ", 200, r#"{"builds":[1]}"#),
            ("POST /distci/jobs/nightly/builds ", 201, r#"{"job_id":"nightly","build_number":2}"#),
        ],
    );

    cli()
        .args(&["trigger", "nightly", "--url", &server.url])
        .passes()
        .stdout_eq("Job: nightly\n\nBUILD  VIEW\n    1  /jobs/nightly/builds/1\n")
        .stderr_has("Success, build number 2");

    assert_eq!(
        server.requests(),
        vec![
            "GET /distci/jobs/nightly/builds HTTP/1.1",
            "POST /distci/jobs/nightly/builds HTTP/1.1",
            "GET /distci/jobs/nightly/builds HTTP/1.1",
        ]
    );
}

#[test]
fn build_shows_artifacts_in_document_order() {
    let server = FakeServer::start(
        1,
        vec![(
            "GET /distci/jobs/nightly/builds/4 ",
            200,
            r#"{"state":{"status":"complete","artifacts":{"b":["z","f2.txt"],"a":["x","y","f1.txt"]}}}"#,
        )],
    );

    cli()
        .args(&["build", "nightly", "4", "--url", &server.url])
        .passes()
        .stdout_eq(
            "Job: nightly\nBuild: 4\nstatus: complete\n\nID  FILE    PATH\nb   f2.txt  z/f2.txt\na   f1.txt  x/y/f1.txt\n",
        );
}

#[test]
fn unreachable_server_renders_empty_view() {
    cli().args(&["jobs", "--url", DEAD_URL]).passes().stdout_eq("No jobs\n");
}

#[test]
fn server_error_renders_empty_view() {
    let server = FakeServer::start(1, vec![("GET /distci/jobs/nightly/builds ", 500, "")]);

    cli()
        .args(&["open", "/jobs/nightly", "--url", &server.url])
        .passes()
        .stdout_eq("Job: nightly\nNo builds\n");
}

#[test]
fn console_against_unreachable_server_fails() {
    cli().args(&["console", "nightly", "1", "--url", DEAD_URL]).fails().code(3);
}

#[test]
fn missing_job_config_exits_not_found() {
    let server = FakeServer::start(1, vec![]);

    cli().args(&["job", "show", "nightly", "--url", &server.url]).fails().code(2).stderr_has("404");
}

#[test]
fn job_set_puts_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nightly.json");
    std::fs::write(&path, r#"{"tasks":[]}"#).unwrap();
    let server = FakeServer::start(
        1,
        vec![("PUT /distci/jobs/nightly ", 200, r#"{"job_id":"nightly","config":{"tasks":[]}}"#)],
    );

    cli()
        .args(&["job", "set", "nightly", path.to_str().unwrap(), "--url", &server.url])
        .passes()
        .stdout_eq("Job 'nightly' configuration saved\n");

    assert_eq!(server.requests(), vec!["PUT /distci/jobs/nightly HTTP/1.1"]);
}

#[test]
fn task_list_prints_ids() {
    let server =
        FakeServer::start(1, vec![("GET /distci/tasks ", 200, r#"{"tasks":["t-1","t-2"]}"#)]);

    cli().args(&["task", "list", "--url", &server.url]).passes().stdout_eq("TASK\nt-1\nt-2\n");
}

#[test]
fn reserved_characters_in_job_stay_in_one_segment() {
    let server = FakeServer::start(
        1,
        vec![("GET /distci/jobs/a%23b/builds ", 200, r#"{"builds":[]}"#)],
    );

    cli()
        .args(&["builds", "a#b", "--url", &server.url])
        .passes()
        .stdout_eq("Job: a#b\nNo builds\n");

    assert_eq!(server.requests(), vec!["GET /distci/jobs/a%23b/builds HTTP/1.1"]);
}

#[test]
fn url_comes_from_environment() {
    let server = FakeServer::start(1, vec![("GET /distci/jobs ", 200, r#"{"jobs":[]}"#)]);

    cli().env("DISTCI_URL", &server.url).args(&["jobs"]).passes().stdout_eq("No jobs\n");
}
