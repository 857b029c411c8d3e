// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route table: path patterns to views.

use std::collections::HashMap;

use distci_core::JobId;
use distci_wire::{decode_segment, encode_segment};
use serde::Serialize;

/// Path every unmatched route is sent to by [`RouteTable::distci`].
pub const DEFAULT_ROUTE: &str = "/jobs";

/// The views a route can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    JobList,
    JobBuilds,
    BuildState,
}

distci_core::simple_display! {
    View {
        JobList => "job list",
        JobBuilds => "job builds",
        BuildState => "build state",
    }
}

/// A resolved route with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Route {
    Jobs,
    JobBuilds { jobid: JobId },
    BuildState { jobid: JobId, build: String },
}

impl Route {
    pub fn view(&self) -> View {
        match self {
            Self::Jobs => View::JobList,
            Self::JobBuilds { .. } => View::JobBuilds,
            Self::BuildState { .. } => View::BuildState,
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            Self::Jobs => "/jobs".to_string(),
            Self::JobBuilds { jobid } => format!("/jobs/{}", encode_segment(jobid)),
            Self::BuildState { jobid, build } => {
                format!("/jobs/{}/builds/{}", encode_segment(jobid), encode_segment(build))
            }
        }
    }

    fn from_view(view: View, mut params: HashMap<String, String>) -> Option<Self> {
        match view {
            View::JobList => Some(Self::Jobs),
            View::JobBuilds => Some(Self::JobBuilds { jobid: JobId::new(params.remove("jobid")?) }),
            View::BuildState => Some(Self::BuildState {
                jobid: JobId::new(params.remove("jobid")?),
                build: params.remove("build")?,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A path pattern such as `/jobs/:jobid/builds/:build`.
///
/// Segments starting with `:` capture one non-empty path segment under
/// that name; all other segments must match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Self {
        let segments = split_path(pattern)
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Literal(seg.to_string()),
            })
            .collect();
        Self { raw: pattern.to_string(), segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match `path` against the pattern, returning the captured parameters
    /// percent-decoded.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.insert(name.clone(), decode_segment(part));
                }
                _ => return None,
            }
        }
        Some(params)
    }
}

/// Strip query/fragment and surrounding slashes, then split into segments.
fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    trimmed.split('/').filter(move |_| !trimmed.is_empty())
}

/// Outcome of looking a path up in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Route),
    Redirect(String),
}

/// Ordered list of `(pattern, view)` entries plus a redirect for everything else.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(RoutePattern, View)>,
    otherwise: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::distci()
    }
}

impl RouteTable {
    /// Empty table redirecting every path to `otherwise`.
    pub fn new(otherwise: impl Into<String>) -> Self {
        Self { entries: Vec::new(), otherwise: otherwise.into() }
    }

    /// The DistCI browsing routes.
    pub fn distci() -> Self {
        Self::new(DEFAULT_ROUTE)
            .when("/jobs", View::JobList)
            .when("/jobs/:jobid", View::JobBuilds)
            .when("/jobs/:jobid/builds/:build", View::BuildState)
    }

    /// Append a route. Earlier entries win when several match.
    pub fn when(mut self, pattern: &str, view: View) -> Self {
        self.entries.push((RoutePattern::new(pattern), view));
        self
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        self.entries
            .iter()
            .find_map(|(pattern, view)| Route::from_view(*view, pattern.matches(path)?))
            .map(Resolution::Matched)
            .unwrap_or_else(|| Resolution::Redirect(self.otherwise.clone()))
    }

    /// Resolve `path`, following the fallback redirect once.
    ///
    /// Always yields a route: if the redirect target does not match either,
    /// the job list is used.
    pub fn navigate(&self, path: &str) -> Route {
        match self.resolve(path) {
            Resolution::Matched(route) => route,
            Resolution::Redirect(target) => {
                tracing::debug!(from = path, to = %target, "redirecting unmatched route");
                match self.resolve(&target) {
                    Resolution::Matched(route) => route,
                    Resolution::Redirect(_) => Route::Jobs,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
