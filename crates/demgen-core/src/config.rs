//! Single-series configuration: the aggregate root handed to the generator.
//!
//! ## Loading
//!
//! Configurations are plain serde structs. Files ending in `.json` are read
//! as JSON, anything else as YAML:
//!
//! ```yaml
//! time:
//!   start_date: 2024-01-01
//!   period_count: 90
//! demand:
//!   average_daily: 120
//!   volatility: medium
//! segments:
//!   - name: Promo
//!     start_date: 2024-02-01
//!     end_date: 2024-02-14
//!     demand:
//!       average_daily: 200
//! ```

use crate::error::ConfigError;
use crate::overlay::{DemandPatch, PatternsPatch, RealismPatch};
use crate::settings::{
    BusinessPatterns, DemandSettings, RealismSettings, SeasonalitySettings, TimeSettings,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Segments, markers and overrides
// ============================================================================

/// A date interval carrying partial overrides, active only within its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSegment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub start_date: NaiveDate,

    /// Inclusive
    pub end_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<DemandPatch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PatternsPatch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realism: Option<RealismPatch>,

    /// Segment-local annualized growth in percent. Replaces the global
    /// growth rate inside the segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
}

impl TimeSegment {
    /// Create a segment with no overrides.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            start_date,
            end_date,
            demand: None,
            patterns: None,
            realism: None,
            trend: None,
        }
    }

    /// Whether `date` lies in `[start_date, end_date]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Length of the segment in whole days, never less than one.
    pub fn span_days(&self) -> i64 {
        match (self.end_date - self.start_date).num_days() {
            0 => 1,
            days => days,
        }
    }
}

/// Which segment wins when several contain the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentPrecedence {
    /// Earliest segment in list order
    #[default]
    First,
    /// Latest segment in list order
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    High,
    Low,
}

impl MarkerKind {
    /// Demand multiplier implied at the marker's date.
    pub fn multiplier(self) -> f64 {
        match self {
            MarkerKind::High => 1.5,
            MarkerKind::Low => 0.5,
        }
    }
}

/// A dated high/low pin; demand is interpolated between successive pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityMarker {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

impl SeasonalityMarker {
    pub fn new(date: NaiveDate, kind: MarkerKind) -> Self {
        Self {
            id: String::new(),
            date,
            kind,
        }
    }
}

/// A manual edit for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataOverride {
    /// Replacement value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Replacement notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub modified_at: DateTime<Utc>,

    #[serde(default = "default_modified_by")]
    pub modified_by: String,
}

fn default_modified_by() -> String {
    "User".to_string()
}

// ============================================================================
// Root configuration
// ============================================================================

/// Everything needed to generate one demand series.
///
/// Built and owned by the caller; the generator only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemGenConfig {
    pub time: TimeSettings,
    pub demand: DemandSettings,
    pub patterns: BusinessPatterns,
    pub seasonality: SeasonalitySettings,
    pub realism: RealismSettings,

    /// Override regions in insertion order
    pub segments: Vec<TimeSegment>,

    /// Overlap rule for `segments`
    pub segment_precedence: SegmentPrecedence,

    pub markers: Vec<SeasonalityMarker>,

    /// Manual edits keyed by date
    pub overrides: BTreeMap<NaiveDate, DataOverride>,
}

impl DemGenConfig {
    /// Load a configuration from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        read_config_file(path.as_ref())
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every invariant the generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.time.validate()?;

        if self.patterns.weekend_boost < 0.0 {
            return Err(ConfigError::InvalidRate {
                field: "patterns.weekend_boost",
                value: self.patterns.weekend_boost,
            });
        }
        validate_anomaly_rate(self.realism.anomaly_rate)?;

        for &month in &self.seasonality.holiday_months {
            validate_month("seasonality.holiday_months", month)?;
        }
        if let Some(weights) = &self.seasonality.monthly_weights {
            for &month in weights.keys() {
                validate_month("seasonality.monthly_weights", month)?;
            }
        }
        for event in &self.seasonality.events {
            if event.duration < 1 {
                return Err(ConfigError::InvalidEvent {
                    name: event.name.clone(),
                    duration: event.duration,
                });
            }
        }

        for segment in &self.segments {
            if segment.end_date < segment.start_date {
                return Err(ConfigError::InvalidSegment {
                    name: segment.name.clone(),
                    start: segment.start_date.to_string(),
                    end: segment.end_date.to_string(),
                });
            }
            if let Some(rate) = segment.realism.as_ref().and_then(|r| r.anomaly_rate) {
                validate_anomaly_rate(rate)?;
            }
            if let Some(boost) = segment.patterns.as_ref().and_then(|p| p.weekend_boost) {
                if boost < 0.0 {
                    return Err(ConfigError::InvalidRate {
                        field: "segments.patterns.weekend_boost",
                        value: boost,
                    });
                }
            }
        }

        for edit in self.overrides.values() {
            if let Some(value) = edit.value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidRate {
                        field: "overrides.value",
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    /// Record a manual edit for `date`, merging with any earlier edit.
    ///
    /// A `None` value or note keeps whatever the earlier edit had.
    pub fn record_override(
        &mut self,
        date: NaiveDate,
        value: Option<f64>,
        notes: Option<String>,
        modified_by: impl Into<String>,
        modified_at: DateTime<Utc>,
    ) {
        let previous = self.overrides.remove(&date);
        let (prev_value, prev_notes) = match previous {
            Some(o) => (o.value, o.notes),
            None => (None, None),
        };

        self.overrides.insert(
            date,
            DataOverride {
                value: value.or(prev_value),
                notes: notes.or(prev_notes),
                modified_at,
                modified_by: modified_by.into(),
            },
        );
    }
}

impl TimeSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_count < 1 {
            return Err(ConfigError::InvalidPeriodCount(self.period_count));
        }
        if let Some(day) = self.weekly_day {
            if day > 6 {
                return Err(ConfigError::InvalidAlignment { kind: "weekly", day });
            }
        }
        if let Some(day) = self.monthly_day {
            if !(1..=31).contains(&day) {
                return Err(ConfigError::InvalidAlignment {
                    kind: "monthly",
                    day,
                });
            }
        }
        Ok(())
    }
}

fn validate_anomaly_rate(rate: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidRate {
            field: "realism.anomaly_rate",
            value: rate,
        });
    }
    Ok(())
}

pub(crate) fn validate_month(field: &'static str, month: u32) -> Result<(), ConfigError> {
    if !(1..=12).contains(&month) {
        return Err(ConfigError::InvalidMonth { field, month });
    }
    Ok(())
}

/// Read a YAML or JSON file, picking the format from the extension.
pub(crate) fn read_config_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_yaml::from_str(&content)?)
    }
}
