// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use distci_adapters::ApiAdapter;
use distci_core::{sort_newest_first, BuildNumber, JobId};
use serde::Serialize;

use crate::client::DistciClient;

/// Data behind the build list of one job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobBuildsScope {
    pub jobid: JobId,
    /// Newest first; `None` until an update succeeds
    pub builds: Option<Vec<BuildNumber>>,
}

/// Result of [`JobBuildsView::trigger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The server accepted the request. Carries the new build number when
    /// the reply named one.
    Accepted(Option<BuildNumber>),
    /// The request did not succeed; the list was not refreshed.
    Failed,
}

/// View-model listing the builds of one job, with a trigger action.
pub struct JobBuildsView<A> {
    client: DistciClient<A>,
    scope: JobBuildsScope,
}

impl<A: ApiAdapter> JobBuildsView<A> {
    /// Create the view for `jobid` and run [`update`](Self::update) once.
    pub async fn activate(client: DistciClient<A>, jobid: JobId) -> Self {
        let mut view = Self { client, scope: JobBuildsScope { jobid, builds: None } };
        view.update().await;
        view
    }

    /// Re-fetch the build list, newest first.
    pub async fn update(&mut self) {
        match self.client.list_builds(&self.scope.jobid).await {
            Ok(body) => {
                let mut builds = body.builds;
                sort_newest_first(&mut builds);
                self.scope.builds = Some(builds);
            }
            Err(e) => {
                tracing::debug!(job = %self.scope.jobid, error = %e, "build list not updated")
            }
        }
    }

    /// Trigger a new build, then refresh the list if the server accepted it.
    pub async fn trigger(&mut self) -> TriggerOutcome {
        match self.client.trigger_build(&self.scope.jobid).await {
            Ok(triggered) => {
                let number = triggered.map(|t| t.build_number);
                if let Some(n) = number {
                    tracing::info!(job = %self.scope.jobid, build = %n, "build triggered");
                }
                self.update().await;
                TriggerOutcome::Accepted(number)
            }
            Err(e) => {
                tracing::debug!(job = %self.scope.jobid, error = %e, "trigger not applied");
                TriggerOutcome::Failed
            }
        }
    }

    pub fn jobid(&self) -> &JobId {
        &self.scope.jobid
    }

    pub fn scope(&self) -> &JobBuildsScope {
        &self.scope
    }

    pub fn into_scope(self) -> JobBuildsScope {
        self.scope
    }
}

#[cfg(test)]
#[path = "job_builds_tests.rs"]
mod tests;
