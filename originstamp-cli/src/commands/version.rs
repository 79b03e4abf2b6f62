//! Version command implementation.

use anyhow::Result;
use colored::Colorize;
use originstamp_core::C2paTool;
use tracing::warn;

/// Execute the version command.
///
/// Reports the OriginStamp version and, when available, the installed
/// c2patool version. A missing or failing c2patool is reported on stderr
/// without failing the command.
pub async fn execute() -> Result<()> {
    println!("OriginStamp v{}", env!("CARGO_PKG_VERSION"));

    match query_tool_version().await {
        Ok(version) => println!("c2patool: {version}"),
        Err(err) => {
            warn!(error = %err, "Could not query c2patool version");
            eprintln!("{}", format!("c2patool: unavailable ({err})").yellow());
        }
    }

    Ok(())
}

async fn query_tool_version() -> originstamp_core::Result<String> {
    C2paTool::locate()?.version().await
}
