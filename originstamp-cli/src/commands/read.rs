//! Read command implementation.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use originstamp_core::C2paTool;
use tracing::{debug, info};

/// Execute the read command.
///
/// Relays the detailed manifest report from `c2patool <file> --detailed`.
pub async fn execute(file: PathBuf) -> Result<()> {
    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }

    println!("Reading C2PA manifest from: {}", file.display());

    let tool = C2paTool::locate().context("c2patool is required for reading manifests")?;
    debug!(binary = %tool.binary().display(), "Using c2patool");

    let manifest = tool
        .read_manifest(&file)
        .await
        .with_context(|| format!("c2patool could not read {}", file.display()))?;

    info!(file = %file.display(), bytes = manifest.len(), "Manifest read");

    println!();
    println!("{}", "Manifest Details:".cyan().bold());
    println!("{manifest}");

    Ok(())
}
