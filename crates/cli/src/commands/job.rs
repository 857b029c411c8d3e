// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci job show|set`: job configuration

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use distci_adapters::ApiAdapter;
use distci_core::{JobConfig, JobId};
use distci_ui::DistciClient;
use serde_json::Value;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Show a job's configuration
    Show {
        /// Job identifier
        job: String,
    },
    /// Create or replace a job's configuration from a JSON file
    Set {
        /// Job identifier (overrides any job_id in the file)
        job: String,
        /// JSON object with the job configuration
        config_file: PathBuf,
    },
}

pub async fn handle<A: ApiAdapter>(
    command: JobCommand,
    client: &DistciClient<A>,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    match command {
        JobCommand::Show { job } => {
            let job_config =
                client.get_job(&JobId::new(job)).await.map_err(ExitError::from)?;
            render_config(out, format, &job_config)
        }
        JobCommand::Set { job, config_file } => {
            let raw = std::fs::read_to_string(&config_file)
                .with_context(|| format!("failed to read {}", config_file.display()))?;
            let parsed: Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", config_file.display()))?;
            let Value::Object(config) = parsed else {
                bail!("{} must contain a JSON object", config_file.display());
            };

            let stored =
                client.set_job(&JobId::new(job), config).await.map_err(ExitError::from)?;
            format_or_json(out, format, &stored, |out| {
                let _ = writeln!(out, "Job '{}' configuration saved", stored.job_id);
            })
        }
    }
}

fn render_config(out: &mut dyn Write, format: OutputFormat, job_config: &JobConfig) -> Result<()> {
    let pretty = serde_json::to_string_pretty(&job_config.config)?;
    format_or_json(out, format, job_config, |out| {
        let _ = writeln!(out, "{} {}", color::context("Job:"), job_config.job_id);
        let _ = writeln!(out, "{}", color::header("Config:"));
        for line in pretty.lines() {
            let _ = writeln!(out, "  {line}");
        }
    })
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
