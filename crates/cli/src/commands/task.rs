// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci task list|get`: worker tasks

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use distci_adapters::ApiAdapter;
use distci_core::TaskId;
use distci_ui::DistciClient;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// List task identifiers
    List,
    /// Show one task's description
    Get {
        /// Task identifier
        task: String,
    },
}

pub async fn handle<A: ApiAdapter>(
    command: TaskCommand,
    client: &DistciClient<A>,
    out: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    match command {
        TaskCommand::List => {
            let tasks = client.list_tasks().await.map_err(ExitError::from)?;
            format_or_json(out, format, &tasks, |out| {
                if tasks.is_empty() {
                    let _ = writeln!(out, "No tasks");
                    return;
                }
                let mut table = Table::new(vec![Column::left("TASK")]);
                for task in &tasks {
                    table.row(vec![task.to_string()]);
                }
                table.render(out);
            })
        }
        TaskCommand::Get { task } => {
            let task = client.get_task(&TaskId::new(task)).await.map_err(ExitError::from)?;
            let pretty = serde_json::to_string_pretty(&task.data)?;
            format_or_json(out, format, &task, |out| {
                let _ = writeln!(out, "{} {}", color::context("Task:"), task.id);
                if let Some(status) = task.status() {
                    let _ = writeln!(out, "{} {}", color::context("Status:"), status);
                }
                for line in pretty.lines() {
                    let _ = writeln!(out, "  {line}");
                }
            })
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
