// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci route`: show where a path leads without touching the network

use std::io::Write;

use anyhow::Result;
use distci_ui::{Resolution, RouteTable};
use serde::Serialize;

use crate::color;
use crate::output::{format_or_json, OutputFormat};

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirected_to: Option<String>,
    route: distci_ui::Route,
    view: distci_ui::View,
}

pub fn handle(
    routes: &RouteTable,
    path: &str,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    let redirected_to = match routes.resolve(path) {
        Resolution::Matched(_) => None,
        Resolution::Redirect(target) => Some(target),
    };
    let route = routes.navigate(path);
    let report = RouteReport { path, redirected_to, view: route.view(), route };

    format_or_json(out, format, &report, |out| {
        if let Some(target) = &report.redirected_to {
            let _ = writeln!(out, "{} {} -> {}", color::context("Redirect:"), path, target);
        }
        let _ = writeln!(out, "{} {}", color::context("View:"), report.view);
        let _ = writeln!(out, "{} {}", color::context("Path:"), report.route.path());
    })
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
