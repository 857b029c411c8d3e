// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed calls against the DistCI frontend.

use distci_adapters::{ApiAdapter, ApiError};
use distci_core::{ArtifactId, BuildState, JobConfig, JobId, Task, TaskId};
use distci_wire::{BuildBody, BuildsBody, Endpoint, JobsBody, TasksBody, TriggeredBuild};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Client for the DistCI API over any [`ApiAdapter`].
#[derive(Debug, Clone)]
pub struct DistciClient<A> {
    api: A,
}

impl<A: ApiAdapter> DistciClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.send_json(endpoint, None).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<Vec<u8>>,
    ) -> Result<T, ApiError> {
        let reply = self.api.send(&endpoint, body).await?;
        serde_json::from_slice(&reply).map_err(|e| ApiError::decode(&endpoint, e))
    }

    /// List job identifiers, in server order
    pub async fn list_jobs(&self) -> Result<Vec<JobId>, ApiError> {
        let body: JobsBody = self.get_json(Endpoint::ListJobs).await?;
        Ok(body.jobs)
    }

    /// Get a job's configuration
    pub async fn get_job(&self, job: &JobId) -> Result<JobConfig, ApiError> {
        self.get_json(Endpoint::GetJob { job: job.clone() }).await
    }

    /// Create or replace a job's configuration.
    ///
    /// `job_id` in the uploaded document is always set to `job`, since the
    /// server rejects documents naming a different job.
    pub async fn set_job(
        &self,
        job: &JobId,
        mut config: Map<String, Value>,
    ) -> Result<JobConfig, ApiError> {
        config.insert("job_id".to_string(), Value::from(job.as_str()));
        let body = Value::Object(config).to_string().into_bytes();
        self.send_json(Endpoint::SetJob { job: job.clone() }, Some(body)).await
    }

    /// List build numbers of a job, in server order
    pub async fn list_builds(&self, job: &JobId) -> Result<BuildsBody, ApiError> {
        self.get_json(Endpoint::ListBuilds { job: job.clone() }).await
    }

    /// Trigger a new build.
    ///
    /// Any 2xx reply counts as success. The reply body is decoded when it
    /// can be; an unreadable body yields `Ok(None)`.
    pub async fn trigger_build(&self, job: &JobId) -> Result<Option<TriggeredBuild>, ApiError> {
        let body = self.api.call(&Endpoint::TriggerBuild { job: job.clone() }).await?;
        Ok(serde_json::from_slice(&body).ok())
    }

    /// Get the state document of one build
    pub async fn get_build(&self, job: &JobId, build: &str) -> Result<BuildState, ApiError> {
        let body: BuildBody =
            self.get_json(Endpoint::GetBuild { job: job.clone(), build: build.to_string() }).await?;
        Ok(body.state)
    }

    /// Get the console log of one build
    pub async fn console_log(&self, job: &JobId, build: &str) -> Result<String, ApiError> {
        let endpoint = Endpoint::GetConsole { job: job.clone(), build: build.to_string() };
        let body = self.api.call(&endpoint).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Download one artifact's content
    pub async fn artifact(
        &self,
        job: &JobId,
        build: &str,
        artifact: &ArtifactId,
    ) -> Result<Vec<u8>, ApiError> {
        let endpoint = Endpoint::GetArtifact {
            job: job.clone(),
            build: build.to_string(),
            artifact: artifact.clone(),
        };
        self.api.call(&endpoint).await
    }

    /// List open task identifiers, in server order
    pub async fn list_tasks(&self) -> Result<Vec<TaskId>, ApiError> {
        let body: TasksBody = self.get_json(Endpoint::ListTasks).await?;
        Ok(body.tasks)
    }

    pub async fn get_task(&self, task: &TaskId) -> Result<Task, ApiError> {
        self.get_json(Endpoint::GetTask { task: task.clone() }).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
