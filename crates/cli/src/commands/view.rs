// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View commands: open a route and render its scope.
//!
//! These follow the view-model failure policy. A failed request renders
//! the empty view and the command still succeeds.

use std::io::Write;

use anyhow::Result;
use distci_adapters::ApiAdapter;
use distci_core::JobId;
use distci_ui::{App, JobBuildsView, Route, Scope, TriggerOutcome};

use super::view_display::render_scope;
use crate::output::OutputFormat;

/// `distci open <path>`
pub async fn open<A: ApiAdapter>(
    app: &App<A>,
    path: &str,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    let scope = app.open(path).await.into_scope();
    render_scope(out, format, &scope)
}

/// `distci jobs`, `distci builds <job>` and `distci build <job> <build>`
pub async fn show<A: ApiAdapter>(
    app: &App<A>,
    route: Route,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    let scope = app.activate(route).await.into_scope();
    render_scope(out, format, &scope)
}

/// `distci trigger <job>`
///
/// The trigger result goes to `status` (stderr) so `out` only carries the
/// refreshed list.
pub async fn trigger<A: ApiAdapter>(
    app: &App<A>,
    job: JobId,
    out: &mut dyn Write,
    status: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    let mut view = JobBuildsView::activate(app.client().clone(), job).await;
    let outcome = view.trigger().await;
    writeln!(status, "{}", trigger_message(outcome))?;
    render_scope(out, format, &Scope::JobBuilds(view.into_scope()))
}

fn trigger_message(outcome: TriggerOutcome) -> String {
    match outcome {
        TriggerOutcome::Accepted(Some(build)) => format!("Success, build number {build}"),
        TriggerOutcome::Accepted(None) => "Success".to_string(),
        TriggerOutcome::Failed => "Failed to trigger build".to_string(),
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
