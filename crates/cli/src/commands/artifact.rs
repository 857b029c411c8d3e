// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `distci artifact <job> <build> <id> [-O file]`

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use distci_adapters::ApiAdapter;
use distci_core::{ArtifactId, JobId};
use distci_ui::DistciClient;

use crate::exit_error::ExitError;

/// Download an artifact to `output_file`, or to `out` when none is given.
pub async fn handle<A: ApiAdapter>(
    client: &DistciClient<A>,
    job: JobId,
    build: &str,
    artifact: ArtifactId,
    output_file: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let content = client.artifact(&job, build, &artifact).await.map_err(ExitError::from)?;

    match output_file {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(%job, build, %artifact, path = %path.display(), "artifact saved");
            eprintln!("Saved {} bytes to {}", content.len(), path.display());
        }
        None => out.write_all(&content)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
