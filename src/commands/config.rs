//! Configuration file commands: `init`, `derive-mass` and `set-override`.

use super::{is_json, write_text};
use anyhow::Context;
use chrono::Utc;
use clap::{Args, ValueEnum};
use demgen_core::{parse_iso_date, DemGenConfig, MassGenConfig};
use std::path::PathBuf;

/// Which configuration to scaffold.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKind {
    /// Single-series configuration
    Single,
    /// Mass-generation configuration
    Mass,
}

/// Arguments for the init command.
#[derive(Args, Clone, Debug)]
pub struct InitArgs {
    /// Configuration kind
    #[arg(value_enum)]
    pub kind: ConfigKind,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the derive-mass command.
#[derive(Args, Clone, Debug)]
pub struct DeriveMassArgs {
    /// Single-series configuration to derive from
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Number of items in the derived configuration
    #[arg(long, short = 'n', default_value = "10")]
    pub item_count: u32,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the set-override command.
#[derive(Args, Clone, Debug)]
pub struct SetOverrideArgs {
    /// Single-series configuration to edit in place
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Date of the edited point (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: String,

    /// Replacement value
    #[arg(long)]
    pub value: Option<f64>,

    /// Replacement note
    #[arg(long)]
    pub notes: Option<String>,

    /// Name recorded as the editor
    #[arg(long, default_value = "User", env = "DEMGEN_USER")]
    pub by: String,
}

/// Run the init command.
pub async fn run_init(args: InitArgs) -> anyhow::Result<()> {
    let yaml = match args.kind {
        ConfigKind::Single => DemGenConfig::default().to_yaml(),
        ConfigKind::Mass => MassGenConfig::default().to_yaml(),
    }
    .context("Failed to serialize default configuration")?;

    write_text(args.output.as_deref(), &yaml)?;
    tracing::info!("Wrote default {:?} configuration", args.kind);
    Ok(())
}

/// Run the derive-mass command.
pub async fn run_derive_mass(args: DeriveMassArgs) -> anyhow::Result<()> {
    let single = DemGenConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load configuration from {:?}", args.config))?;
    single
        .validate()
        .with_context(|| format!("Invalid configuration in {:?}", args.config))?;

    let mass = MassGenConfig::from_single(&single, args.item_count);
    mass.validate().context("Derived mass configuration is invalid")?;
    let yaml = mass
        .to_yaml()
        .context("Failed to serialize mass configuration")?;

    write_text(args.output.as_deref(), &yaml)?;
    tracing::info!(
        "Derived mass configuration for {} items from {:?}",
        args.item_count,
        args.config
    );
    Ok(())
}

/// Run the set-override command.
pub async fn run_set_override(args: SetOverrideArgs) -> anyhow::Result<()> {
    if args.value.is_none() && args.notes.is_none() {
        anyhow::bail!("Nothing to record: pass --value, --notes or both");
    }

    let date = parse_iso_date(&args.date).context("Invalid --date")?;
    let mut config = DemGenConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load configuration from {:?}", args.config))?;

    config.record_override(date, args.value, args.notes.clone(), args.by.clone(), Utc::now());
    config
        .validate()
        .context("Override rejected by configuration validation")?;

    let content = if is_json(&args.config) {
        serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
    } else {
        config.to_yaml().context("Failed to serialize configuration")?
    };
    write_text(Some(&args.config), &content)?;

    tracing::info!("Recorded override for {} in {:?}", date, args.config);
    Ok(())
}
