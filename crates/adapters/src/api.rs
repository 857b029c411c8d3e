// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use distci_wire::{Endpoint, Method};
use thiserror::Error;

/// Errors from API calls. All of them mean "the request did not succeed".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no frontend URL configured")]
    NoFrontend,

    #[error("{endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} failed with HTTP code {status}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to decode reply to {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn decode(endpoint: &Endpoint, source: serde_json::Error) -> Self {
        Self::Decode { endpoint: endpoint.to_string(), source }
    }

    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Adapter for issuing requests against the DistCI frontend
#[async_trait]
pub trait ApiAdapter: Clone + Send + Sync + 'static {
    /// Perform a request without a body.
    async fn call(&self, endpoint: &Endpoint) -> Result<Vec<u8>, ApiError> {
        self.send(endpoint, None).await
    }

    /// Perform the request, with a JSON `body` when given, and return the
    /// raw body of a 2xx reply.
    async fn send(&self, endpoint: &Endpoint, body: Option<Vec<u8>>) -> Result<Vec<u8>, ApiError>;
}

/// Connection settings for [`HttpApiAdapter`]
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Base URLs of the frontends, e.g. `http://ci.example.com:8080`.
    pub frontends: Vec<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// HTTP adapter backed by reqwest.
///
/// Requests rotate across the configured frontends so that load spreads
/// over every server that shares the job store.
#[derive(Clone, Debug)]
pub struct HttpApiAdapter {
    client: reqwest::Client,
    frontends: Arc<[String]>,
    next: Arc<AtomicUsize>,
}

impl HttpApiAdapter {
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let frontends: Vec<String> = config
            .frontends
            .into_iter()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .collect();
        if frontends.is_empty() {
            return Err(ApiError::NoFrontend);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Transport {
            endpoint: "client setup".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { client, frontends: frontends.into(), next: Arc::new(AtomicUsize::new(0)) })
    }

    pub fn frontends(&self) -> &[String] {
        &self.frontends
    }

    fn next_frontend(&self) -> &str {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.frontends.len();
        &self.frontends[idx]
    }
}

#[async_trait]
impl ApiAdapter for HttpApiAdapter {
    async fn send(
        &self,
        endpoint: &Endpoint,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{}", self.next_frontend(), endpoint.path());
        tracing::debug!(%endpoint, %url, has_body = body.is_some(), "sending request");

        let method = endpoint.method();
        let request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        let request = match body {
            Some(body) => {
                request.header(reqwest::header::CONTENT_TYPE, "application/json").body(body)
            }
            None if method != Method::Get => request.header(reqwest::header::CONTENT_LENGTH, "0"),
            None => request,
        };

        let transport = |e: reqwest::Error| ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!(%endpoint, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ApiAdapter, ApiError};
    use async_trait::async_trait;
    use distci_wire::{Endpoint, Method};
    use parking_lot::Mutex;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Arc;

    /// Recorded request
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ApiCall {
        pub method: Method,
        pub path: String,
    }

    #[derive(Debug, Clone)]
    enum Reply {
        Body(Vec<u8>),
        Status(u16),
        Transport(String),
    }

    #[derive(Default)]
    struct FakeApiState {
        calls: Vec<ApiCall>,
        bodies: Vec<(ApiCall, Vec<u8>)>,
        replies: HashMap<String, VecDeque<Reply>>,
    }

    /// Fake API adapter for testing.
    ///
    /// Replies are scripted per endpoint and consumed in order; the last
    /// scripted reply keeps answering once the queue is down to one entry.
    /// Unscripted endpoints answer 404.
    #[derive(Clone, Default)]
    pub struct FakeApiAdapter {
        inner: Arc<Mutex<FakeApiState>>,
    }

    impl FakeApiAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        fn push(&self, endpoint: &Endpoint, reply: Reply) {
            self.inner.lock().replies.entry(endpoint.to_string()).or_default().push_back(reply);
        }

        /// Answer `endpoint` with a JSON body
        pub fn respond_json(&self, endpoint: &Endpoint, body: serde_json::Value) {
            self.push(endpoint, Reply::Body(body.to_string().into_bytes()));
        }

        /// Answer `endpoint` with a raw body
        pub fn respond_bytes(&self, endpoint: &Endpoint, body: impl Into<Vec<u8>>) {
            self.push(endpoint, Reply::Body(body.into()));
        }

        /// Answer `endpoint` with a non-2xx status
        pub fn fail_status(&self, endpoint: &Endpoint, status: u16) {
            self.push(endpoint, Reply::Status(status));
        }

        /// Fail `endpoint` as if the connection dropped
        pub fn fail_transport(&self, endpoint: &Endpoint) {
            self.push(endpoint, Reply::Transport("connection refused".to_string()));
        }

        /// Get all recorded requests, in issue order
        pub fn calls(&self) -> Vec<ApiCall> {
            self.inner.lock().calls.clone()
        }

        /// Get the request bodies sent so far, with the call that carried each
        pub fn bodies(&self) -> Vec<(ApiCall, Vec<u8>)> {
            self.inner.lock().bodies.clone()
        }

        pub fn clear_calls(&self) {
            let mut state = self.inner.lock();
            state.calls.clear();
            state.bodies.clear();
        }
    }

    #[async_trait]
    impl ApiAdapter for FakeApiAdapter {
        async fn send(
            &self,
            endpoint: &Endpoint,
            body: Option<Vec<u8>>,
        ) -> Result<Vec<u8>, ApiError> {
            let reply = {
                let mut state = self.inner.lock();
                let call = ApiCall { method: endpoint.method(), path: endpoint.path() };
                if let Some(body) = body {
                    state.bodies.push((call.clone(), body));
                }
                state.calls.push(call);
                match state.replies.get_mut(&endpoint.to_string()) {
                    Some(queue) if queue.len() > 1 => queue.pop_front(),
                    Some(queue) => queue.front().cloned(),
                    None => None,
                }
            };

            match reply {
                Some(Reply::Body(body)) => Ok(body),
                Some(Reply::Status(status)) => {
                    Err(ApiError::Status { endpoint: endpoint.to_string(), status })
                }
                Some(Reply::Transport(message)) => {
                    Err(ApiError::Transport { endpoint: endpoint.to_string(), message })
                }
                None => Err(ApiError::Status { endpoint: endpoint.to_string(), status: 404 }),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApiCall, FakeApiAdapter};

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
