//! Demand shaping from high/low seasonality markers.
//!
//! Between two successive markers the multiplier eases from the earlier
//! marker's level to the later one's along a half cosine. Points before the
//! first marker or after the last are left alone.

use chrono::NaiveDate;
use demgen_core::{DemGenConfig, SeasonalityMarker, TimeSeriesPoint};
use std::f64::consts::PI;

/// Cosine easing of linear progress `t` in `[0, 1]`.
pub fn cosine_ease(t: f64) -> f64 {
    (1.0 - (t * PI).cos()) / 2.0
}

/// Multiplier at `date` given markers sorted by date, or `None` when the
/// date is not bracketed by a previous and a next marker.
pub fn marker_multiplier(sorted: &[&SeasonalityMarker], date: NaiveDate) -> Option<f64> {
    let next_idx = sorted.partition_point(|m| m.date < date);
    if next_idx == 0 || next_idx == sorted.len() {
        return None;
    }

    let prev = sorted[next_idx - 1];
    let next = sorted[next_idx];

    let total = (next.date - prev.date).num_days();
    let progress = if total == 0 {
        0.0
    } else {
        (date - prev.date).num_days() as f64 / total as f64
    };

    let start = prev.kind.multiplier();
    let end = next.kind.multiplier();
    Some(start + (end - start) * cosine_ease(progress))
}

pub fn apply(points: &[TimeSeriesPoint], config: &DemGenConfig) -> Vec<TimeSeriesPoint> {
    if config.markers.is_empty() {
        return points.to_vec();
    }

    let mut sorted: Vec<&SeasonalityMarker> = config.markers.iter().collect();
    sorted.sort_by_key(|m| m.date);

    points
        .iter()
        .map(|point| {
            let mut point = point.clone();
            if let Some(multiplier) = marker_multiplier(&sorted, point.date) {
                point.value *= multiplier;
            }
            point
        })
        .collect()
}
