//! Weekly and intra-month business patterns.

use crate::dates::days_in_month;
use crate::resolver::ConfigResolver;
use chrono::{Datelike, NaiveDate, Weekday};
use demgen_core::{DemGenConfig, MonthlyPattern, TimeSeriesPoint};
use std::ops::RangeInclusive;

pub const END_SURGE_FACTOR: f64 = 1.3;
pub const END_SURGE_DAYS: u32 = 3;
pub const END_SURGE_NOTE: &str = "End Surge";

pub const MID_SLUMP_FACTOR: f64 = 0.7;
pub const MID_SLUMP_DAYS: RangeInclusive<u32> = 14..=16;
pub const MID_SLUMP_NOTE: &str = "Mid Slump";

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `date` is within the last three days of its month.
pub fn is_month_end(date: NaiveDate) -> bool {
    date.day() + END_SURGE_DAYS > days_in_month(date.year(), date.month())
}

pub fn apply(points: &[TimeSeriesPoint], config: &DemGenConfig) -> Vec<TimeSeriesPoint> {
    let resolver = ConfigResolver::new(config);

    points
        .iter()
        .map(|point| {
            let patterns = resolver.resolve(point.date).patterns;
            let mut point = point.clone();

            if is_weekend(point.date) && patterns.weekend_boost > 0.0 {
                point.value *= 1.0 + patterns.weekend_boost;
            }

            if patterns.has(MonthlyPattern::EndSurge) && is_month_end(point.date) {
                point.value *= END_SURGE_FACTOR;
                point.append_note(END_SURGE_NOTE);
            }

            if patterns.has(MonthlyPattern::MidSlump) && MID_SLUMP_DAYS.contains(&point.date.day())
            {
                point.value *= MID_SLUMP_FACTOR;
                point.append_note(MID_SLUMP_NOTE);
            }

            point
        })
        .collect()
}
