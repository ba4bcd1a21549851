//! Error types for configuration loading and validation.

/// Error type for configuration operations.
///
/// These are caller bugs: they are reported before any generation work
/// begins and never accompany partial output.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Period count below one
    #[error("Period count must be at least 1, got {0}")]
    InvalidPeriodCount(u32),

    /// Date string that is not `YYYY-MM-DD`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Date arithmetic left the representable calendar range
    #[error("Date range starting {start} does not fit {periods} periods")]
    DateOverflow { start: String, periods: u32 },

    /// Weekly or monthly alignment day out of range
    #[error("Invalid {kind} alignment day: {day}")]
    InvalidAlignment { kind: &'static str, day: u32 },

    /// Month number outside 1-12
    #[error("Invalid month in '{field}': {month}")]
    InvalidMonth { field: &'static str, month: u32 },

    /// Distribution that violates `min <= mode <= max`
    #[error("Invalid distribution for '{field}': min={min}, mode={mode}, max={max}")]
    InvalidDistribution {
        field: String,
        min: f64,
        mode: f64,
        max: f64,
    },

    /// Segment whose end precedes its start
    #[error("Segment '{name}' ends ({end}) before it starts ({start})")]
    InvalidSegment {
        name: String,
        start: String,
        end: String,
    },

    /// Seasonality event with a non-positive duration
    #[error("Event '{name}' must last at least one day, got {duration}")]
    InvalidEvent { name: String, duration: i64 },

    /// Probability or factor outside its allowed range
    #[error("Invalid value for '{field}': {value}")]
    InvalidRate { field: &'static str, value: f64 },

    /// Error reading a configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<chrono::NaiveDate, ConfigError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ConfigError::InvalidDate {
            value: value.to_string(),
        }
    })
}
