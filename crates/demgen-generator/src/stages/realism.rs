//! Anomaly injection, output rounding and the zero floor.

use crate::resolver::ConfigResolver;
use demgen_core::{DemGenConfig, TimeSeriesPoint, Volatility};
use rand::Rng;

pub const STOCKOUT_NOTE: &str = "Stockout";
pub const SPIKE_NOTE: &str = "Spike";
pub const DATA_ERROR_NOTE: &str = "Data Error";
pub const FLOORED_NOTE: &str = "Data Error (Floored)";

/// Kind of anomaly selected by a second uniform draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Forced zero (draw < 0.3)
    Stockout,
    /// Multiplied by a factor in [2, 5) (0.3 <= draw < 0.6)
    Spike,
    /// Negated half magnitude (draw >= 0.6)
    DataError,
}

impl AnomalyKind {
    pub fn from_draw(draw: f64) -> Self {
        if draw < 0.3 {
            AnomalyKind::Stockout
        } else if draw < 0.6 {
            AnomalyKind::Spike
        } else {
            AnomalyKind::DataError
        }
    }
}

fn inject_anomaly<R: Rng + ?Sized>(point: &mut TimeSeriesPoint, include_stockouts: bool, rng: &mut R) {
    match AnomalyKind::from_draw(rng.gen::<f64>()) {
        AnomalyKind::Stockout => {
            // Disabled stockouts consume the draw and leave the point alone
            if include_stockouts {
                point.value = 0.0;
                point.notes = Some(STOCKOUT_NOTE.to_string());
                point.is_anomaly = true;
            }
        }
        AnomalyKind::Spike => {
            point.value *= 2.0 + rng.gen::<f64>() * 3.0;
            point.notes = Some(SPIKE_NOTE.to_string());
            point.is_anomaly = true;
        }
        AnomalyKind::DataError => {
            point.value = -point.value.abs() * 0.5;
            point.notes = Some(DATA_ERROR_NOTE.to_string());
            point.is_anomaly = true;
        }
    }
}

fn floor_at_zero(point: &mut TimeSeriesPoint) {
    if point.value < 0.0 {
        point.value = 0.0;
        let replace = matches!(point.notes.as_deref(), None | Some("") | Some(DATA_ERROR_NOTE));
        if replace {
            point.notes = Some(FLOORED_NOTE.to_string());
        } else {
            point.append_note(FLOORED_NOTE);
        }
    }
    // Collapse -0.0
    if point.value == 0.0 {
        point.value = 0.0;
    }
}

pub fn apply<R: Rng + ?Sized>(
    points: &[TimeSeriesPoint],
    config: &DemGenConfig,
    rng: &mut R,
) -> Vec<TimeSeriesPoint> {
    let resolver = ConfigResolver::new(config);

    points
        .iter()
        .map(|point| {
            let effective = resolver.resolve(point.date);
            let realism = &effective.realism;
            let mut point = point.clone();

            if effective.demand.volatility == Volatility::None {
                // Zero-volatility points never carry anomalies
                point.is_anomaly = false;
                point.value = realism.data_type.format(point.value.max(0.0));
                floor_at_zero(&mut point);
                return point;
            }

            if rng.gen::<f64>() < realism.anomaly_rate {
                inject_anomaly(&mut point, realism.include_stockouts, rng);
            }

            point.value = realism.data_type.format(point.value);
            floor_at_zero(&mut point);
            point
        })
        .collect()
}
