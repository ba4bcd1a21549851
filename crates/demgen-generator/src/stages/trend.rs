//! Linear growth trend from an annualized rate.
//!
//! The global rate covers the whole series. Inside a segment that carries
//! its own `trend`, the segment rate replaces the global one and progress is
//! measured across the segment's own interval.

use crate::resolver::ConfigResolver;
use demgen_core::{DemGenConfig, TimeSeriesPoint};

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Multiplier after `progress` (0-1) of a `total_pct` percent change.
pub fn growth_factor(total_pct: f64, progress: f64) -> f64 {
    1.0 + total_pct / 100.0 * progress
}

/// Percent change accumulated by `annual_rate` over `days`.
pub fn total_growth_pct(annual_rate: f64, days: i64) -> f64 {
    annual_rate * days as f64 / DAYS_PER_YEAR
}

fn progress(elapsed_days: i64, span_days: i64) -> f64 {
    (elapsed_days as f64 / span_days as f64).clamp(0.0, 1.0)
}

pub fn apply(points: &[TimeSeriesPoint], config: &DemGenConfig) -> Vec<TimeSeriesPoint> {
    let (first, last) = match points {
        [first, .., last] => (first.date, last.date),
        _ => return points.to_vec(),
    };

    let total_days = (last - first).num_days().max(1);
    let global_pct = total_growth_pct(config.demand.growth_rate, total_days);
    let resolver = ConfigResolver::new(config);

    points
        .iter()
        .map(|point| {
            let segment_trend = resolver
                .active_segment(point.date)
                .and_then(|segment| segment.trend.map(|trend| (segment, trend)));

            let (total_pct, progress) = match segment_trend {
                Some((segment, trend)) => {
                    let span = segment.span_days();
                    (
                        total_growth_pct(trend, span),
                        progress((point.date - segment.start_date).num_days(), span),
                    )
                }
                None => (
                    global_pct,
                    progress((point.date - first).num_days(), total_days),
                ),
            };

            let mut point = point.clone();
            point.value *= growth_factor(total_pct, progress);
            point
        })
        .collect()
}
