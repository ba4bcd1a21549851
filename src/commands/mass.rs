//! `demgen mass`: a batch of independently sampled series.

use anyhow::Context;
use chrono::Utc;
use clap::Args;
use demgen_core::MassGenConfig;
use demgen_export::{export_batch, open_output, ExportArgs, ExportError};
use demgen_generator::BatchGenerator;
use std::path::PathBuf;

/// Arguments for the mass command.
#[derive(Args, Clone, Debug)]
pub struct MassArgs {
    /// Path to the mass configuration file (YAML, or JSON by extension)
    #[arg(long, short = 'c', env = "DEMGEN_CONFIG")]
    pub config: PathBuf,

    /// Random seed (same seed, configuration and worker count = same batch)
    #[arg(long, env = "DEMGEN_SEED")]
    pub seed: Option<u64>,

    /// Number of worker threads
    #[arg(long, short = 'w', default_value = "1", env = "DEMGEN_WORKERS")]
    pub workers: usize,

    /// Number of items (overrides the configuration file)
    #[arg(long, short = 'n')]
    pub item_count: Option<u32>,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Run the mass command.
pub async fn run_mass(args: MassArgs) -> anyhow::Result<()> {
    let mut config = MassGenConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load mass configuration from {:?}", args.config))?;
    if let Some(item_count) = args.item_count {
        config.item_count = item_count;
    }

    let generator = BatchGenerator::new(config, args.seed);
    tracing::info!("Loaded mass configuration from {:?}", args.config);

    // Generation is CPU-bound; keep it off the async runtime threads
    let workers = args.workers;
    let (generator, items) = tokio::task::spawn_blocking(move || {
        let items = generator.generate_parallel(workers);
        (generator, items)
    })
    .await
    .context("Batch generation task failed")?;
    let items = items.context("Failed to generate batch")?;
    if items.is_empty() {
        return Err(ExportError::EmptyBatch.into());
    }

    let writer = open_output(args.export.output.as_deref())
        .with_context(|| format!("Failed to open output {:?}", args.export.output))?;
    let metrics = export_batch(
        generator.config(),
        &items,
        Utc::now(),
        args.export.format,
        writer,
    )
    .with_context(|| format!("Failed to write {} export", args.export.format))?;

    tracing::info!(
        "Wrote {} items ({} rows, {} bytes)",
        items.len(),
        metrics.rows_written,
        metrics.bytes_written
    );
    Ok(())
}
