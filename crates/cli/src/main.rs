// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! distci: browse jobs, builds and artifacts on a DistCI server

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use distci_adapters::HttpApiAdapter;
use distci_core::{ArtifactId, JobId};
use distci_ui::{App, Route, RouteTable};
use tracing_subscriber::EnvFilter;

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "distci",
    version,
    about = "Browse jobs, builds and artifacts on a DistCI server",
    styles = color::styles()
)]
struct Cli {
    /// Frontend base URL, or a comma-separated list (overrides DISTCI_URL)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a path such as /jobs/nightly and render the view it routes to
    Open {
        /// Browser-style path
        path: String,
    },
    /// Show which view a path routes to (no network access)
    Route {
        /// Browser-style path
        path: String,
    },
    /// List jobs
    Jobs,
    /// List builds of a job, newest first
    Builds {
        /// Job identifier
        job: String,
    },
    /// Trigger a new build, then list the job's builds
    Trigger {
        /// Job identifier
        job: String,
    },
    /// Show a build's state and artifacts
    Build {
        /// Job identifier
        job: String,
        /// Build number
        build: String,
    },
    /// Show or replace a job's configuration
    Job(commands::job::JobArgs),
    /// Inspect worker tasks
    Task(commands::task::TaskArgs),
    /// Print a build's console log
    Console {
        /// Job identifier
        job: String,
        /// Build number
        build: String,
    },
    /// Download a build artifact
    Artifact {
        /// Job identifier
        job: String,
        /// Build number
        build: String,
        /// Artifact identifier
        artifact: String,
        /// Write to this file instead of stdout
        #[arg(short = 'O', long = "output-file", value_name = "FILE")]
        output_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        let code = err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or(EXIT_FAILURE);
        eprintln!("Error: {err:#}");
        std::process::exit(code);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let api = HttpApiAdapter::new(env::http_config(cli.url.as_deref())).map_err(ExitError::from)?;
    let app = App::new(RouteTable::distci(), api);
    let mut out = std::io::stdout();

    match command {
        Commands::Route { path } => commands::route::handle(app.routes(), &path, &mut out, format),
        Commands::Open { path } => commands::view::open(&app, &path, &mut out, format).await,
        Commands::Jobs => commands::view::show(&app, Route::Jobs, &mut out, format).await,
        Commands::Builds { job } => {
            let route = Route::JobBuilds { jobid: JobId::new(job) };
            commands::view::show(&app, route, &mut out, format).await
        }
        Commands::Trigger { job } => {
            let mut status = std::io::stderr();
            commands::view::trigger(&app, JobId::new(job), &mut out, &mut status, format).await
        }
        Commands::Build { job, build } => {
            let route = Route::BuildState { jobid: JobId::new(job), build };
            commands::view::show(&app, route, &mut out, format).await
        }
        Commands::Job(args) => {
            commands::job::handle(args.command, app.client(), &mut out, format).await
        }
        Commands::Task(args) => {
            commands::task::handle(args.command, app.client(), &mut out, format).await
        }
        Commands::Console { job, build } => {
            commands::console::handle(app.client(), JobId::new(job), &build, &mut out, format)
                .await
        }
        Commands::Artifact { job, build, artifact, output_file } => {
            commands::artifact::handle(
                app.client(),
                JobId::new(job),
                &build,
                ArtifactId::new(artifact),
                output_file.as_deref(),
                &mut out,
            )
            .await
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
