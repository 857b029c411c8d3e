// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use distci_adapters::ApiAdapter;
use distci_core::{sort_jobs, JobId};
use serde::Serialize;

use crate::client::DistciClient;

/// Data behind the job list view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobListScope {
    /// `None` until a load succeeds
    pub jobs: Option<Vec<JobId>>,
}

/// View-model listing every job.
pub struct JobListView<A> {
    client: DistciClient<A>,
    scope: JobListScope,
}

impl<A: ApiAdapter> JobListView<A> {
    /// Create the view and load it once.
    pub async fn activate(client: DistciClient<A>) -> Self {
        let mut view = Self { client, scope: JobListScope::default() };
        view.load().await;
        view
    }

    /// Fetch the job list and store it sorted ascending.
    pub async fn load(&mut self) {
        match self.client.list_jobs().await {
            Ok(mut jobs) => {
                sort_jobs(&mut jobs);
                self.scope.jobs = Some(jobs);
            }
            Err(e) => tracing::debug!(error = %e, "job list not updated"),
        }
    }

    pub fn scope(&self) -> &JobListScope {
        &self.scope
    }

    pub fn into_scope(self) -> JobListScope {
        self.scope
    }
}

#[cfg(test)]
#[path = "job_list_tests.rs"]
mod tests;
