//! CSV and JSON exporters for demgen output.
//!
//! Writers accept any [`std::io::Write`], so the same code serves files,
//! stdout and in-memory buffers in tests. Every writer returns
//! [`ExportMetrics`].
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use demgen_core::TimeSeriesPoint;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let points = vec![TimeSeriesPoint::new(date, 42.0)];
//!
//! let mut out = Vec::new();
//! demgen_export::csv::write_series(&points, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("date,value,notes,isAnomaly"));
//! ```

pub mod args;
pub mod csv;
mod error;
pub mod json;
mod metrics;

pub use args::{ExportArgs, ExportFormat};
pub use error::ExportError;
pub use metrics::ExportMetrics;

use chrono::{DateTime, Utc};
use demgen_core::{GeneratedItem, MassGenConfig, TimeSeriesPoint};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Open the export destination: a buffered file, or stdout when `path` is `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, ExportError> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            File::create(path)?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

/// Export a single series in the requested format.
pub fn export_series<W: Write>(
    points: &[TimeSeriesPoint],
    format: ExportFormat,
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    match format {
        ExportFormat::Csv => csv::write_series(points, writer),
        ExportFormat::Json => json::write_series(points, writer),
    }
}

/// Export a batch in the requested format.
pub fn export_batch<W: Write>(
    config: &MassGenConfig,
    items: &[GeneratedItem],
    generated_at: DateTime<Utc>,
    format: ExportFormat,
    writer: W,
) -> Result<ExportMetrics, ExportError> {
    match format {
        ExportFormat::Csv => csv::write_batch(items, writer),
        ExportFormat::Json => json::write_batch(config, items, generated_at, writer),
    }
}
