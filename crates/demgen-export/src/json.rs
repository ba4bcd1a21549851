//! JSON exporters.

use crate::error::ExportError;
use crate::metrics::{CountingWriter, ExportMetrics};
use chrono::{DateTime, Utc};
use demgen_core::{DemGenConfig, GeneratedItem, MassGenConfig, TimeSeriesPoint};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// Document written for a batch export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDocument<'a> {
    pub generation_parameters: &'a MassGenConfig,
    pub generated_at: DateTime<Utc>,
    pub items: Vec<BatchItem<'a>>,
}

/// One item of a batch document, its series keyed by ISO date.
#[derive(Debug, Serialize)]
pub struct BatchItem<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub parameters: &'a DemGenConfig,
    pub data: BTreeMap<String, f64>,
}

impl<'a> BatchDocument<'a> {
    pub fn new(
        config: &'a MassGenConfig,
        items: &'a [GeneratedItem],
        generated_at: DateTime<Utc>,
    ) -> Self {
        let items = items
            .iter()
            .map(|item| BatchItem {
                id: item.id,
                name: &item.name,
                parameters: &item.config,
                data: item
                    .data
                    .iter()
                    .map(|p| (p.date.to_string(), p.value))
                    .collect(),
            })
            .collect();

        Self {
            generation_parameters: config,
            generated_at,
            items,
        }
    }
}

fn write_pretty<W: Write, T: Serialize>(value: &T, writer: W) -> Result<u64, ExportError> {
    let mut counting = CountingWriter::new(writer);
    serde_json::to_writer_pretty(&mut counting, value)?;
    counting.write_all(b"\n")?;
    counting.flush()?;
    Ok(counting.count())
}

/// Write one series as a pretty-printed JSON array of points.
pub fn write_series<W: Write>(
    points: &[TimeSeriesPoint],
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let bytes_written = write_pretty(&points, writer)?;

    let metrics = ExportMetrics {
        rows_written: points.len() as u64,
        total_duration: start_time.elapsed(),
        bytes_written,
    };
    info!(
        "JSON export complete: {} points, {} bytes",
        metrics.rows_written, metrics.bytes_written
    );
    Ok(metrics)
}

/// Write a batch document with its generation parameters.
pub fn write_batch<W: Write>(
    config: &MassGenConfig,
    items: &[GeneratedItem],
    generated_at: DateTime<Utc>,
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    if items.is_empty() {
        return Err(ExportError::EmptyBatch);
    }
    let start_time = Instant::now();

    let document = BatchDocument::new(config, items, generated_at);
    let bytes_written = write_pretty(&document, writer)?;

    let metrics = ExportMetrics {
        rows_written: items.iter().map(|item| item.data.len() as u64).sum(),
        total_duration: start_time.elapsed(),
        bytes_written,
    };
    info!(
        "Batch JSON export complete: {} items, {} points, {} bytes",
        items.len(),
        metrics.rows_written,
        metrics.bytes_written
    );
    Ok(metrics)
}
