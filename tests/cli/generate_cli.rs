//! `generate` command tests.

use crate::{export_to, fixture, init_tracing, SEED};
use demgen::commands::generate::{generate_series, run_generate};
use demgen::GenerateArgs;
use demgen_core::TimeSeriesPoint;
use demgen_export::ExportFormat;
use std::fs;
use tempfile::TempDir;

fn args(config: &str, output: &std::path::Path, format: ExportFormat) -> GenerateArgs {
    GenerateArgs {
        config: fixture(config),
        seed: Some(SEED),
        export: export_to(output, format),
    }
}

#[tokio::test]
async fn test_generate_csv_from_fixture() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("series.csv");

    run_generate(args("single.yaml", &output, ExportFormat::Csv)).await?;

    let mut reader = csv::Reader::from_path(&output)?;
    assert_eq!(
        reader.headers()?.iter().collect::<Vec<_>>(),
        vec!["date", "value", "notes", "isAnomaly"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 366);
    assert_eq!(&rows[0][0], "2024-01-01");
    assert_eq!(&rows[365][0], "2024-12-31");

    for row in &rows {
        let value: f64 = row[1].parse()?;
        assert!(value >= 0.0);
        assert_eq!(value, value.round());
        assert!(&row[3] == "true" || &row[3] == "false");
    }

    // The three-day event annotates its days unless an anomaly replaced the note
    let event_days = rows
        .iter()
        .filter(|r| ["2024-11-29", "2024-11-30", "2024-12-01"].contains(&&r[0]))
        .filter(|r| r[2].contains("Black Friday"))
        .count();
    assert!(event_days >= 1);

    Ok(())
}

#[tokio::test]
async fn test_generate_json_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("series.json");
    let args = args("single.yaml", &output, ExportFormat::Json);

    run_generate(args.clone()).await?;

    let exported: Vec<TimeSeriesPoint> = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(exported, generate_series(&args)?);

    Ok(())
}

#[tokio::test]
async fn test_seed_reproduces_series() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let mut args = args("single.yaml", &temp_dir.path().join("x.csv"), ExportFormat::Csv);

    let first = generate_series(&args)?;
    let second = generate_series(&args)?;
    assert_eq!(first, second);

    args.seed = Some(SEED + 1);
    assert_ne!(first, generate_series(&args)?);

    Ok(())
}

#[tokio::test]
async fn test_zero_volatility_suppresses_anomalies() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let points = generate_series(&args(
        "flat.yaml",
        &temp_dir.path().join("x.csv"),
        ExportFormat::Csv,
    ))?;

    assert_eq!(points.len(), 31);
    assert!(points.iter().all(|p| p.value == 50.0));
    assert!(points.iter().all(|p| !p.is_anomaly && p.notes.is_none()));

    Ok(())
}

#[tokio::test]
async fn test_invalid_config_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("series.csv");

    let bad_count = temp_dir.path().join("bad_count.yaml");
    fs::write(&bad_count, "time:\n  period_count: 0\n")?;
    let err = run_generate(GenerateArgs {
        config: bad_count,
        seed: Some(SEED),
        export: export_to(&output, ExportFormat::Csv),
    })
    .await
    .unwrap_err();
    assert!(format!("{err:#}").contains("Period count must be at least 1"));
    assert!(!output.exists());

    let bad_date = temp_dir.path().join("bad_date.yaml");
    fs::write(&bad_date, "time:\n  start_date: 2024-13-45\n")?;
    let result = run_generate(GenerateArgs {
        config: bad_date,
        seed: Some(SEED),
        export: export_to(&output, ExportFormat::Csv),
    })
    .await;
    assert!(result.is_err());
    assert!(!output.exists());

    Ok(())
}
