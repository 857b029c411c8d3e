// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ids(raw: &[&str]) -> Vec<JobId> {
    raw.iter().map(|s| JobId::from(*s)).collect()
}

#[yare::parameterized(
    shuffled      = { &["b", "a", "c"],                   &["a", "b", "c"] },
    already_order = { &["alpha", "beta"],                 &["alpha", "beta"] },
    prefix_first  = { &["build-10", "build", "build-2"], &["build", "build-10", "build-2"] },
    uppercase     = { &["zeta", "Alpha"],                 &["Alpha", "zeta"] },
    empty         = { &[],                                &[] },
)]
fn sort_jobs_ascending(input: &[&str], expected: &[&str]) {
    let mut jobs = ids(input);
    sort_jobs(&mut jobs);
    assert_eq!(jobs, ids(expected));
}

#[test]
fn job_config_keeps_opaque_config() {
    let config: JobConfig = serde_json::from_str(
        r#"{"job_id": "nightly", "config": {"tasks": [{"type": "git-checkout"}]}}"#,
    )
    .unwrap();

    assert_eq!(config.job_id, "nightly");
    assert_eq!(config.config["tasks"][0]["type"], "git-checkout");
}

#[test]
fn job_config_without_config_field() {
    let config: JobConfig = serde_json::from_str(r#"{"job_id": "empty"}"#).unwrap();
    assert!(config.config.is_null());
}
