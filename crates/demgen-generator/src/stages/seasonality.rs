//! Monthly seasonality and one-off events.

use chrono::Datelike;
use demgen_core::{DemGenConfig, SeasonalitySettings, TimeSeriesPoint};

/// Multiplier for a calendar month (1-12).
///
/// A monthly-weight map, when present at all, is the only source: months it
/// omits weigh 1.0 and the legacy holiday months are ignored. Without a map,
/// legacy holiday months get the holiday strength.
pub fn month_multiplier(seasonality: &SeasonalitySettings, month: u32) -> f64 {
    match &seasonality.monthly_weights {
        Some(weights) => weights.get(&month).copied().unwrap_or(1.0),
        None if seasonality.holiday_months.contains(&month) => seasonality.holiday_strength,
        None => 1.0,
    }
}

pub fn apply(points: &[TimeSeriesPoint], config: &DemGenConfig) -> Vec<TimeSeriesPoint> {
    let seasonality = &config.seasonality;

    points
        .iter()
        .map(|point| {
            let date = point.date;
            let mut point = point.clone();
            point.value *= month_multiplier(seasonality, date.month());

            for event in seasonality.events.iter().filter(|e| e.covers(date)) {
                point.value *= event.boost;
                point.append_note(&event.name);
            }

            point
        })
        .collect()
}
