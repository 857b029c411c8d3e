// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker tasks as published by the task frontend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

crate::define_name! {
    /// Identifier the server assigns to a task when it is created.
    pub struct TaskId;
}

/// One task and its description document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Opaque to the client (status, assignee, job and build, ...)
    #[serde(default)]
    pub data: Value,
}

impl Task {
    /// The `status` field of the description, when it is a string.
    pub fn status(&self) -> Option<&str> {
        self.data.get("status").and_then(Value::as_str)
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
