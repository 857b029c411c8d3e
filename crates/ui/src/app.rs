// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application entry point: path in, activated view out.

use distci_adapters::ApiAdapter;
use serde::Serialize;

use crate::client::DistciClient;
use crate::routes::{Route, RouteTable};
use crate::views::{
    BuildStateScope, BuildStateView, JobBuildsScope, JobBuildsView, JobListScope, JobListView,
};

/// Navigates paths through a route table and activates view-models.
pub struct App<A> {
    routes: RouteTable,
    client: DistciClient<A>,
}

/// The view-model activated for a route
pub enum ActiveView<A> {
    JobList(JobListView<A>),
    JobBuilds(JobBuildsView<A>),
    BuildState(BuildStateView<A>),
}

/// Scope of an [`ActiveView`], detached from its client for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Scope {
    JobList(JobListScope),
    JobBuilds(JobBuildsScope),
    BuildState(BuildStateScope),
}

impl<A: ApiAdapter> App<A> {
    pub fn new(routes: RouteTable, api: A) -> Self {
        Self { routes, client: DistciClient::new(api) }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn client(&self) -> &DistciClient<A> {
        &self.client
    }

    /// Navigate to `path` and activate the view-model of the resulting route.
    pub async fn open(&self, path: &str) -> ActiveView<A> {
        let route = self.routes.navigate(path);
        tracing::debug!(path, route = %route.path(), "opening view");
        self.activate(route).await
    }

    pub async fn activate(&self, route: Route) -> ActiveView<A> {
        let client = self.client.clone();
        match route {
            Route::Jobs => ActiveView::JobList(JobListView::activate(client).await),
            Route::JobBuilds { jobid } => {
                ActiveView::JobBuilds(JobBuildsView::activate(client, jobid).await)
            }
            Route::BuildState { jobid, build } => {
                ActiveView::BuildState(BuildStateView::activate(client, jobid, build).await)
            }
        }
    }
}

impl<A: ApiAdapter> ActiveView<A> {
    pub fn into_scope(self) -> Scope {
        match self {
            Self::JobList(view) => Scope::JobList(view.into_scope()),
            Self::JobBuilds(view) => Scope::JobBuilds(view.into_scope()),
            Self::BuildState(view) => Scope::BuildState(view.into_scope()),
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
