//! `mass` command tests.

use crate::{export_to, fixture, init_tracing, SEED};
use demgen::commands::mass::run_mass;
use demgen::MassArgs;
use demgen_export::ExportFormat;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn args(output: &std::path::Path, format: ExportFormat, workers: usize) -> MassArgs {
    MassArgs {
        config: fixture("mass.yaml"),
        seed: Some(SEED),
        workers,
        item_count: None,
        export: export_to(output, format),
    }
}

#[tokio::test]
async fn test_mass_json_export() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("batch.json");

    let mut args = args(&output, ExportFormat::Json, 3);
    args.item_count = Some(6);
    run_mass(args).await?;

    let document: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(document["generationParameters"]["item_count"], 6);
    assert!(document["generatedAt"].is_string());

    let items = document["items"].as_array().ok_or("items is not an array")?;
    assert_eq!(items.len(), 6);

    let names: HashSet<_> = items.iter().map(|i| i["name"].as_str()).collect();
    assert_eq!(names.len(), 6);

    for item in items {
        let data = item["data"].as_object().ok_or("data is not an object")?;
        assert_eq!(data.len(), 52);
        assert!(data.values().all(|v| v.as_f64().is_some_and(|v| v >= 0.0)));

        let params = &item["parameters"];
        assert_eq!(params["realism"]["anomaly_rate"], 0.01);
        assert_eq!(params["realism"]["include_stockouts"], false);
        let average = params["demand"]["average_daily"].as_f64().ok_or("average")?;
        assert!((20.0..=150.0).contains(&average));
    }

    Ok(())
}

#[tokio::test]
async fn test_mass_csv_wide_export() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("batch.csv");

    run_mass(args(&output, ExportFormat::Csv, 1)).await?;

    let mut reader = csv::Reader::from_path(&output)?;
    let headers = reader.headers()?.clone();
    assert_eq!(headers.len(), 13);
    assert_eq!(&headers[0], "date");
    assert!(headers.iter().skip(1).all(|h| h.starts_with("it-")));

    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 52);
    // 2024-01-01 is already a Monday
    assert_eq!(&rows[0][0], "2024-01-01");
    assert_eq!(&rows[1][0], "2024-01-08");

    Ok(())
}

#[tokio::test]
async fn test_worker_count_keeps_item_count() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    for workers in [1, 4, 32] {
        let output = temp_dir.path().join(format!("batch-{workers}.json"));
        run_mass(args(&output, ExportFormat::Json, workers)).await?;

        let document: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
        let items = document["items"].as_array().ok_or("items is not an array")?;
        assert_eq!(items.len(), 12, "workers={workers}");
    }

    Ok(())
}

#[tokio::test]
async fn test_empty_batch_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("batch.csv");

    let mut args = args(&output, ExportFormat::Csv, 1);
    args.item_count = Some(0);
    let err = run_mass(args).await.unwrap_err();
    assert!(format!("{err:#}").contains("Nothing to export"));
    assert!(!output.exists(), "no output file for an empty batch");

    Ok(())
}
