// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of view scopes

use std::io::Write;

use anyhow::Result;
use distci_core::BuildNumber;
use distci_ui::{BuildStateScope, JobBuildsScope, JobListScope, Route, Scope};
use serde_json::Value;

use crate::color;
use crate::output::{format_or_json, truncate_value, OutputFormat};
use crate::table::{Column, Table};

/// Longest rendering of a non-scalar state field before it is cut
const MAX_FIELD_WIDTH: usize = 60;

const MAX_ID_WIDTH: usize = 40;

/// Render any scope. JSON output is the scope itself, tagged with its view.
pub fn render_scope(out: &mut dyn Write, format: OutputFormat, scope: &Scope) -> Result<()> {
    format_or_json(out, format, scope, |out| match scope {
        Scope::JobList(s) => format_job_list(out, s),
        Scope::JobBuilds(s) => format_job_builds(out, s),
        Scope::BuildState(s) => format_build_state(out, s),
    })
}

pub fn format_job_list(out: &mut dyn Write, scope: &JobListScope) {
    let jobs = scope.jobs.as_deref().unwrap_or(&[]);
    if jobs.is_empty() {
        let _ = writeln!(out, "No jobs");
        return;
    }
    let mut table = Table::new(vec![Column::left("JOB"), Column::muted("VIEW")]);
    for job in jobs {
        table.row(vec![job.to_string(), Route::JobBuilds { jobid: job.clone() }.path()]);
    }
    table.render(out);
}

pub fn format_job_builds(out: &mut dyn Write, scope: &JobBuildsScope) {
    let _ = writeln!(out, "{} {}", color::context("Job:"), scope.jobid);
    let builds: &[BuildNumber] = scope.builds.as_deref().unwrap_or(&[]);
    if builds.is_empty() {
        let _ = writeln!(out, "No builds");
        return;
    }
    let _ = writeln!(out);
    let mut table = Table::new(vec![Column::right("BUILD"), Column::muted("VIEW")]);
    for build in builds {
        let route =
            Route::BuildState { jobid: scope.jobid.clone(), build: build.to_string() };
        table.row(vec![build.to_string(), route.path()]);
    }
    table.render(out);
}

pub fn format_build_state(out: &mut dyn Write, scope: &BuildStateScope) {
    let _ = writeln!(out, "{} {}", color::context("Job:"), scope.jobid);
    let _ = writeln!(out, "{} {}", color::context("Build:"), scope.build);

    let Some(state) = &scope.state else {
        let _ = writeln!(out, "No build state");
        return;
    };

    for (key, value) in &state.fields {
        let label = format!("{key}:");
        let _ = writeln!(out, "{} {}", color::context(&label), field_text(value));
    }

    let _ = writeln!(out);
    let artifacts = scope.artifacts.as_deref().unwrap_or(&[]);
    if artifacts.is_empty() {
        let _ = writeln!(out, "No artifacts");
        return;
    }
    let mut table = Table::new(vec![
        Column::left("ID").with_max(MAX_ID_WIDTH),
        Column::left("FILE"),
        Column::muted("PATH"),
    ]);
    for record in artifacts {
        table.row(vec![
            record.id.to_string(),
            record.filename.clone().unwrap_or_else(|| "-".to_string()),
            record.fullname.clone(),
        ]);
    }
    table.render(out);
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => truncate_value(&value.to_string(), MAX_FIELD_WIDTH),
    }
}

#[cfg(test)]
#[path = "view_display_tests.rs"]
mod tests;
