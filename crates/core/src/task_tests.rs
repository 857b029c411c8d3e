// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn task_keeps_opaque_data() {
    let task: Task = serde_json::from_value(json!({
        "id": "3f2a",
        "data": {"status": "running", "assignee": "worker-1", "build_number": 4},
    }))
    .unwrap();

    assert_eq!(task.id, "3f2a");
    assert_eq!(task.status(), Some("running"));
    assert_eq!(task.data["assignee"], "worker-1");
}

#[yare::parameterized(
    missing_data   = { json!({"id": "t1"}) },
    missing_status = { json!({"id": "t1", "data": {"timestamp": 1}}) },
    numeric_status = { json!({"id": "t1", "data": {"status": 3}}) },
)]
fn task_without_string_status(raw: serde_json::Value) {
    let task: Task = serde_json::from_value(raw).unwrap();
    assert_eq!(task.status(), None);
}
