// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::time::Duration;

use distci_adapters::HttpConfig;

/// Frontend used when neither `--url` nor `DISTCI_URL` is given
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Split a comma-separated frontend list, dropping blanks.
pub fn parse_frontends(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

/// Frontend base URLs: `--url` > `DISTCI_URL` > [`DEFAULT_URL`].
pub fn frontends(cli_url: Option<&str>) -> Vec<String> {
    let from_env = std::env::var("DISTCI_URL").ok();
    let raw = cli_url.or(from_env.as_deref()).unwrap_or(DEFAULT_URL);
    let parsed = parse_frontends(raw);
    if parsed.is_empty() {
        vec![DEFAULT_URL.to_string()]
    } else {
        parsed
    }
}

/// Request timeout from `DISTCI_TIMEOUT_MS`. Unset or invalid means no timeout.
pub fn timeout() -> Option<Duration> {
    std::env::var("DISTCI_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Tracing filter from `DISTCI_LOG`
pub fn log_filter() -> String {
    std::env::var("DISTCI_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| {
        DEFAULT_LOG_FILTER.to_string()
    })
}

pub fn http_config(cli_url: Option<&str>) -> HttpConfig {
    HttpConfig { frontends: frontends(cli_url), timeout: timeout() }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
