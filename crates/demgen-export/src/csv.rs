//! CSV exporters.
//!
//! A single series is written long-form, one row per point. A batch is
//! written wide-form: one row per date and one column per item.

use crate::error::ExportError;
use crate::metrics::{CountingWriter, ExportMetrics};
use ::csv::Writer;
use demgen_core::{GeneratedItem, TimeSeriesPoint};
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Header of the single-series CSV.
pub const SERIES_HEADER: [&str; 4] = ["date", "value", "notes", "isAnomaly"];

/// Write one series as `date,value,notes,isAnomaly`.
pub fn write_series<W: Write>(
    points: &[TimeSeriesPoint],
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    let start_time = Instant::now();
    let mut metrics = ExportMetrics::default();
    let mut counting = CountingWriter::new(writer);

    let mut csv = Writer::from_writer(&mut counting);
    csv.write_record(SERIES_HEADER)?;
    for point in points {
        csv.write_record([
            point.date.to_string(),
            point.value.to_string(),
            point.notes_str().to_string(),
            point.is_anomaly.to_string(),
        ])?;
        metrics.rows_written += 1;
    }
    csv.flush()?;
    drop(csv);

    metrics.bytes_written = counting.count();
    metrics.total_duration = start_time.elapsed();

    info!(
        "CSV export complete: {} rows, {} bytes in {:?}",
        metrics.rows_written, metrics.bytes_written, metrics.total_duration
    );
    Ok(metrics)
}

/// Write a batch wide-form: `date,<name1>,<name2>,...`.
///
/// Dates come from the first item. An item shorter than the first writes 0
/// for the dates it lacks.
pub fn write_batch<W: Write>(
    items: &[GeneratedItem],
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    let first = items.first().ok_or(ExportError::EmptyBatch)?;
    let start_time = Instant::now();
    let mut metrics = ExportMetrics::default();
    let mut counting = CountingWriter::new(writer);

    let mut csv = Writer::from_writer(&mut counting);

    let mut header = Vec::with_capacity(items.len() + 1);
    header.push("date");
    header.extend(items.iter().map(|item| item.name.as_str()));
    csv.write_record(&header)?;

    for (idx, point) in first.data.iter().enumerate() {
        let mut record = Vec::with_capacity(items.len() + 1);
        record.push(point.date.to_string());
        record.extend(items.iter().map(|item| {
            item.data
                .get(idx)
                .map(|p| p.value)
                .unwrap_or(0.0)
                .to_string()
        }));
        csv.write_record(&record)?;
        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }
    csv.flush()?;
    drop(csv);

    metrics.bytes_written = counting.count();
    metrics.total_duration = start_time.elapsed();

    info!(
        "Batch CSV export complete: {} items x {} dates, {} bytes",
        items.len(),
        metrics.rows_written,
        metrics.bytes_written
    );
    Ok(metrics)
}
