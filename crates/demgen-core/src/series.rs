//! Generator output types.

use crate::config::DemGenConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One dated value of a generated series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,

    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_anomaly: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_edited: bool,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            notes: None,
            is_anomaly: false,
            is_edited: false,
        }
    }

    /// Append a note, comma-separated from any existing one.
    pub fn append_note(&mut self, note: &str) {
        self.notes = Some(match self.notes.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}, {note}"),
            _ => note.to_string(),
        });
    }

    /// Notes as a string slice, empty when absent.
    pub fn notes_str(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// One sampled configuration together with its generated series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    /// Opaque unique identifier
    pub id: Uuid,

    /// Human-readable unique name (`it-XXXXX`)
    pub name: String,

    pub config: DemGenConfig,

    pub data: Vec<TimeSeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_note() {
        let mut point = TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), 1.0);
        point.append_note("End Surge");
        point.append_note("Black Friday");
        assert_eq!(point.notes.as_deref(), Some("End Surge, Black Friday"));
    }

    #[test]
    fn test_point_json_shape() {
        let mut point = TimeSeriesPoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 7.0);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({"date": "2024-01-02", "value": 7.0}));

        point.is_anomaly = true;
        point.notes = Some("Spike".to_string());
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["isAnomaly"], true);
        assert_eq!(json["notes"], "Spike");
        assert!(json.get("isEdited").is_none());
    }
}
