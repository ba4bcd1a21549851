//! `init`, `derive-mass` and `set-override` command tests.

use crate::{fixture, SEED};
use demgen::commands::config::{run_derive_mass, run_init, run_set_override};
use demgen::commands::generate::generate_series;
use demgen::{ConfigKind, DeriveMassArgs, GenerateArgs, InitArgs, SetOverrideArgs};
use demgen_core::{DemGenConfig, Distribution, MassGenConfig};
use demgen_export::{ExportArgs, ExportFormat};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn set_override(config: &Path, date: &str, value: Option<f64>, notes: Option<&str>) -> SetOverrideArgs {
    SetOverrideArgs {
        config: config.to_path_buf(),
        date: date.to_string(),
        value,
        notes: notes.map(str::to_string),
        by: "Planner".to_string(),
    }
}

#[tokio::test]
async fn test_init_writes_loadable_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    let single = temp_dir.path().join("single.yaml");
    run_init(InitArgs {
        kind: ConfigKind::Single,
        output: Some(single.clone()),
    })
    .await?;
    assert_eq!(DemGenConfig::from_file(&single)?, DemGenConfig::default());

    let mass = temp_dir.path().join("mass.yaml");
    run_init(InitArgs {
        kind: ConfigKind::Mass,
        output: Some(mass.clone()),
    })
    .await?;
    assert_eq!(MassGenConfig::from_file(&mass)?, MassGenConfig::default());

    Ok(())
}

#[tokio::test]
async fn test_derive_mass_from_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("mass.yaml");

    run_derive_mass(DeriveMassArgs {
        config: fixture("single.yaml"),
        item_count: 40,
        output: Some(output.clone()),
    })
    .await?;

    let mass = MassGenConfig::from_file(&output)?;
    assert_eq!(mass.item_count, 40);
    assert_eq!(mass.demand.average_daily, Distribution::new(96.0, 120.0, 144.0));
    assert_eq!(mass.demand.growth_rate, Distribution::new(6.0, 8.0, 10.0));
    // medium sits at 2 on the factor scale
    assert_eq!(mass.demand.volatility, Distribution::new(1.5, 2.0, 2.5));
    assert_eq!(mass.time.period_count, 366);
    mass.validate()?;

    Ok(())
}

#[tokio::test]
async fn test_derive_mass_from_low_volume_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let single_path = temp_dir.path().join("single.yaml");
    let output = temp_dir.path().join("mass.yaml");

    let mut single = DemGenConfig::default();
    single.demand.average_daily = 0.4;
    fs::write(&single_path, single.to_yaml()?)?;

    run_derive_mass(DeriveMassArgs {
        config: single_path,
        item_count: 3,
        output: Some(output.clone()),
    })
    .await?;

    let mass = MassGenConfig::from_file(&output)?;
    assert_eq!(mass.demand.average_daily, Distribution::new(0.0, 0.4, 0.4));
    mass.validate()?;

    Ok(())
}

#[tokio::test]
async fn test_set_override_applies_on_next_generation() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("single.yaml");
    fs::copy(fixture("single.yaml"), &config_path)?;

    run_set_override(set_override(&config_path, "2024-03-01", Some(0.0), None)).await?;
    run_set_override(set_override(&config_path, "2024-03-02", Some(999.0), Some("Bulk order"))).await?;

    let config = DemGenConfig::from_file(&config_path)?;
    assert_eq!(config.overrides.len(), 2);
    assert_eq!(config.segments.len(), 1);

    let points = generate_series(&GenerateArgs {
        config: config_path.clone(),
        seed: Some(SEED),
        export: ExportArgs {
            format: ExportFormat::Csv,
            output: None,
        },
    })?;

    let closed = points.iter().find(|p| p.date.to_string() == "2024-03-01").ok_or("missing")?;
    assert_eq!(closed.value, 0.0);
    assert!(closed.is_edited);
    assert!(closed.notes_str().contains("-- Edited by Planner on"));

    let bulk = points.iter().find(|p| p.date.to_string() == "2024-03-02").ok_or("missing")?;
    assert_eq!(bulk.value, 999.0);
    assert_eq!(bulk.notes.as_deref(), Some("Bulk order"));

    assert_eq!(points.iter().filter(|p| p.is_edited).count(), 2);

    Ok(())
}

#[tokio::test]
async fn test_set_override_keeps_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("single.json");
    fs::write(&config_path, serde_json::to_string(&DemGenConfig::default())?)?;

    run_set_override(set_override(&config_path, "2024-01-05", None, Some("Checked"))).await?;

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config_path)?)?;
    assert_eq!(raw["overrides"]["2024-01-05"]["notes"], "Checked");
    assert_eq!(raw["overrides"]["2024-01-05"]["modified_by"], "Planner");

    Ok(())
}

#[tokio::test]
async fn test_set_override_rejects_bad_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("single.yaml");
    fs::copy(fixture("flat.yaml"), &config_path)?;
    let before = fs::read_to_string(&config_path)?;

    assert!(run_set_override(set_override(&config_path, "2024-01-05", None, None)).await.is_err());
    assert!(run_set_override(set_override(&config_path, "05/01/2024", Some(1.0), None)).await.is_err());
    assert!(run_set_override(set_override(&config_path, "2024-01-05", Some(-3.0), None)).await.is_err());

    // Rejected edits leave the file untouched
    assert_eq!(fs::read_to_string(&config_path)?, before);

    Ok(())
}
