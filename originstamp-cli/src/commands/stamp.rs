//! Stamp command implementation.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use originstamp_core::{PaymentAssertion, PaymentData, StampManifestBuilder};
use tracing::info;

/// Execute the stamp command.
///
/// Builds the payment assertion, stages the manifest definition as a
/// temporary file, and reports what would be embedded. The embedding call
/// into c2patool itself is not wired up yet.
pub async fn execute(
    input: PathBuf,
    output: PathBuf,
    wallet: Option<String>,
    stripe: Option<String>,
    license: Option<String>,
) -> Result<()> {
    let data = PaymentData {
        wallet_address: wallet,
        stripe_link: stripe,
        license_url: license,
    };

    if data.is_empty() {
        bail!("At least one payment method is required (--wallet, --stripe, or --license)");
    }

    println!("Stamping file: {}", input.display());

    let assertion = PaymentAssertion::new(data)?;
    let assertion_json = assertion
        .to_json_pretty()
        .context("Failed to serialize payment assertion")?;

    let staged = StampManifestBuilder::new(assertion)
        .write_temp()
        .context("Failed to write manifest definition")?;

    info!(path = %staged.path().display(), "Staged manifest definition");

    println!();
    println!("{}", "Payment Assertion:".cyan().bold());
    println!("{assertion_json}");

    println!();
    println!(
        "{}",
        "Note: Embedding functionality is not implemented yet; no output was written.".yellow()
    );
    println!("   {} {}", "Output file:".dimmed(), output.display());
    println!(
        "   {} {}",
        "Manifest saved to:".dimmed(),
        staged.path().display()
    );

    // The staged manifest is removed when `staged` drops.
    Ok(())
}
