//! Command-line interface for demgen
//!
//! # Usage Examples
//!
//! ```bash
//! # Default configuration as a starting point
//! demgen init single > demand.yaml
//!
//! # One series, reproducible
//! demgen generate --config demand.yaml --seed 42 --format csv
//!
//! # A batch of sampled series, split across worker threads
//! demgen mass --config mass.yaml --item-count 1000 --workers 8 --format json -o batch.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, Subcommand};
use demgen::commands::{config, generate, mass};
use demgen::{DeriveMassArgs, GenerateArgs, InitArgs, MassArgs, SetOverrideArgs};

#[derive(Parser)]
#[command(name = "demgen")]
#[command(about = "Generate realistic synthetic demand time series")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one series from a single-series configuration
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate a batch of series from a mass configuration
    Mass {
        #[command(flatten)]
        args: MassArgs,
    },

    /// Write a default configuration
    Init {
        #[command(flatten)]
        args: InitArgs,
    },

    /// Derive a mass configuration centred on a single-series configuration
    DeriveMass {
        #[command(flatten)]
        args: DeriveMassArgs,
    },

    /// Record a manual edit for one date in a configuration file
    SetOverride {
        #[command(flatten)]
        args: SetOverrideArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing on stderr so exports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => generate::run_generate(args).await,
        Commands::Mass { args } => mass::run_mass(args).await,
        Commands::Init { args } => config::run_init(args).await,
        Commands::DeriveMass { args } => config::run_derive_mass(args).await,
        Commands::SetOverride { args } => config::run_set_override(args).await,
    }
}
