// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci console <job> <build>`

use std::io::Write;

use anyhow::Result;
use distci_adapters::ApiAdapter;
use distci_core::JobId;
use distci_ui::DistciClient;
use serde_json::json;

use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

pub async fn handle<A: ApiAdapter>(
    client: &DistciClient<A>,
    job: JobId,
    build: &str,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    let log = client.console_log(&job, build).await.map_err(ExitError::from)?;
    let data = json!({ "jobid": job, "build": build, "console": log });

    format_or_json(out, format, &data, |out| {
        let _ = out.write_all(log.as_bytes());
        if !log.is_empty() && !log.ends_with('\n') {
            let _ = writeln!(out);
        }
    })
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
