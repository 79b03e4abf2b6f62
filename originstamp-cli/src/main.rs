//! OriginStamp CLI - payment layer for the C2PA standard.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod exit_codes;

const EXIT_CODE_HELP: &str = "\
Exit codes:
  0   success
  1   general error
  64  usage error (no payment method supplied)
  66  input file not found
  69  c2patool unavailable or failed
  74  output could not be written";

#[derive(Parser)]
#[command(name = "originstamp")]
#[command(author, version, about = "Payment layer for the C2PA standard", long_about = None)]
#[command(arg_required_else_help = true, after_help = EXIT_CODE_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the C2PA manifest from a file
    Read {
        /// Path to the file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Stamp a file with payment metadata
    Stamp {
        /// Input file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Cryptocurrency wallet address
        #[arg(long, value_name = "ADDRESS")]
        wallet: Option<String>,

        /// Stripe payment link
        #[arg(long, value_name = "URL")]
        stripe: Option<String>,

        /// License URL
        #[arg(long, value_name = "URL")]
        license: Option<String>,
    },

    /// Show version information for OriginStamp and c2patool
    Version,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so relayed c2patool output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<()> = match cli.command {
        Commands::Read { file } => commands::read::execute(file).await,
        Commands::Stamp {
            input,
            output,
            wallet,
            stripe,
            license,
        } => commands::stamp::execute(input, output, wallet, stripe, license).await,
        Commands::Version => commands::version::execute().await,
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "Error:".red().bold());
        std::process::exit(exit_codes::classify(&err));
    }
}
