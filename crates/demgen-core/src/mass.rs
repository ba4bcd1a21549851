//! Mass-mode configuration: distributions from which per-item
//! configurations are drawn.

use crate::config::{read_config_file, validate_month, DemGenConfig};
use crate::error::ConfigError;
use crate::settings::TimeSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A bounded triangular distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub min: f64,
    pub mode: f64,
    pub max: f64,
}

impl Distribution {
    pub fn new(min: f64, mode: f64, max: f64) -> Self {
        Self { min, mode, max }
    }

    /// A distribution that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Check `min <= mode <= max` with finite bounds.
    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.mode.is_finite() && self.max.is_finite();
        if !finite || self.min > self.mode || self.mode > self.max {
            return Err(ConfigError::InvalidDistribution {
                field: field.to_string(),
                min: self.min,
                mode: self.mode,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassDemand {
    pub average_daily: Distribution,
    pub growth_rate: Distribution,
    /// Continuous 0-3 factor, mapped to a volatility category per item
    pub volatility: Distribution,
}

impl Default for MassDemand {
    fn default() -> Self {
        Self {
            average_daily: Distribution::new(50.0, 100.0, 200.0),
            growth_rate: Distribution::new(-5.0, 0.0, 10.0),
            volatility: Distribution::new(1.0, 1.5, 2.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassSeasonality {
    /// Weight distribution per month (1-12); absent months weigh 1.0
    pub month_weights: BTreeMap<u32, Distribution>,
}

/// Drives the synthesis of `item_count` independent series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassGenConfig {
    pub item_count: u32,
    /// Shared by every item
    pub time: TimeSettings,
    pub demand: MassDemand,
    pub seasonality: MassSeasonality,
}

impl Default for MassGenConfig {
    fn default() -> Self {
        Self {
            item_count: 10,
            time: TimeSettings::default(),
            demand: MassDemand::default(),
            seasonality: MassSeasonality::default(),
        }
    }
}

impl MassGenConfig {
    /// Load a mass configuration from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        read_config_file(path.as_ref())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.time.validate()?;
        self.demand
            .average_daily
            .validate("demand.average_daily")?;
        self.demand.growth_rate.validate("demand.growth_rate")?;
        self.demand.volatility.validate("demand.volatility")?;

        for (&month, dist) in &self.seasonality.month_weights {
            validate_month("seasonality.month_weights", month)?;
            dist.validate(&format!("seasonality.month_weights.{month}"))?;
        }
        Ok(())
    }

    /// Derive a mass configuration centred on a single-series configuration.
    ///
    /// Average demand spreads ±20%, growth ±2 points, volatility ±0.5 on the
    /// 0-3 factor scale, and every configured monthly weight becomes a
    /// constant distribution.
    pub fn from_single(config: &DemGenConfig, item_count: u32) -> Self {
        let avg = config.demand.average_daily;
        let growth = config.demand.growth_rate;
        let vol = config.demand.volatility.as_factor();

        let month_weights = config
            .seasonality
            .monthly_weights
            .iter()
            .flatten()
            .map(|(&month, &weight)| (month, Distribution::constant(weight)))
            .collect();

        Self {
            item_count,
            time: config.time.clone(),
            demand: MassDemand {
                average_daily: rounded_spread(avg, 0.8, 1.2),
                growth_rate: Distribution::new(growth - 2.0, growth, growth + 2.0),
                volatility: Distribution::new((vol - 0.5).max(0.0), vol, vol + 0.5),
            },
            seasonality: MassSeasonality { month_weights },
        }
    }
}

/// Distribution around `center` with bounds at the rounded `low`/`high`
/// multiples, widened so the centre always lies within them.
fn rounded_spread(center: f64, low: f64, high: f64) -> Distribution {
    let a = (center * low).round();
    let b = (center * high).round();
    Distribution::new(a.min(b).min(center), center, a.max(b).max(center))
}
