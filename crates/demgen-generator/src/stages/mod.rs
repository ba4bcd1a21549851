//! The seven transformation stages of the single-series pipeline.
//!
//! Each stage maps a series to a new series of the same length and dates.
//! Stages never mutate their input; the pipeline threads each output into
//! the next stage in the fixed order of [`Stage::ALL`].

pub mod base;
pub mod markers;
pub mod overrides;
pub mod patterns;
pub mod realism;
pub mod seasonality;
pub mod trend;

use demgen_core::{DemGenConfig, TimeSeriesPoint};
use rand::Rng;
use std::fmt;

/// One pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Base,
    Trend,
    Patterns,
    Seasonality,
    Markers,
    Realism,
    Overrides,
}

impl Stage {
    /// Every stage in execution order.
    pub const ALL: [Stage; 7] = [
        Stage::Base,
        Stage::Trend,
        Stage::Patterns,
        Stage::Seasonality,
        Stage::Markers,
        Stage::Realism,
        Stage::Overrides,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Base => "base",
            Stage::Trend => "trend",
            Stage::Patterns => "patterns",
            Stage::Seasonality => "seasonality",
            Stage::Markers => "markers",
            Stage::Realism => "realism",
            Stage::Overrides => "overrides",
        }
    }

    /// Whether the stage draws from the random source.
    pub fn is_random(self) -> bool {
        matches!(self, Stage::Base | Stage::Realism)
    }

    /// Run this stage over `points`.
    pub fn apply<R: Rng + ?Sized>(
        self,
        points: &[TimeSeriesPoint],
        config: &DemGenConfig,
        rng: &mut R,
    ) -> Vec<TimeSeriesPoint> {
        match self {
            Stage::Base => base::apply(points, config, rng),
            Stage::Trend => trend::apply(points, config),
            Stage::Patterns => patterns::apply(points, config),
            Stage::Seasonality => seasonality::apply(points, config),
            Stage::Markers => markers::apply(points, config),
            Stage::Realism => realism::apply(points, config, rng),
            Stage::Overrides => overrides::apply(points, config),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
