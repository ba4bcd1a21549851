//! Per-item configuration sampling for mass generation.

use crate::triangular;
use demgen_core::{
    BusinessPatterns, ConfigError, DataType, DemGenConfig, DemandSettings, MassGenConfig,
    RealismSettings, SeasonalitySettings, Volatility,
};
use rand::Rng;
use std::collections::BTreeMap;

/// Anomaly rate shared by every mass-generated item.
pub const MASS_ANOMALY_RATE: f64 = 0.01;

/// Draws complete single-series configurations from a [`MassGenConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ItemSynthesizer<'a> {
    config: &'a MassGenConfig,
}

impl<'a> ItemSynthesizer<'a> {
    /// Validates the distributions once up front.
    pub fn new(config: &'a MassGenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sample one item configuration.
    ///
    /// Draw order is fixed: average, growth, volatility factor, then the
    /// twelve monthly weights.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DemGenConfig, ConfigError> {
        let mass = self.config;

        let average_daily =
            triangular::sample(&mass.demand.average_daily, "demand.average_daily", rng)?.round();
        let growth_rate =
            triangular::sample(&mass.demand.growth_rate, "demand.growth_rate", rng)?.round();
        let factor = triangular::sample(&mass.demand.volatility, "demand.volatility", rng)?;

        let mut monthly_weights = BTreeMap::new();
        for month in 1..=12 {
            let weight = match mass.seasonality.month_weights.get(&month) {
                Some(dist) => triangular::sample(dist, "seasonality.month_weights", rng)?,
                None => 1.0,
            };
            monthly_weights.insert(month, weight);
        }

        Ok(DemGenConfig {
            time: mass.time.clone(),
            demand: DemandSettings {
                average_daily,
                growth_rate,
                volatility: Volatility::from_factor(factor),
            },
            patterns: BusinessPatterns::default(),
            seasonality: SeasonalitySettings {
                monthly_weights: Some(monthly_weights),
                ..SeasonalitySettings::default()
            },
            realism: RealismSettings {
                anomaly_rate: MASS_ANOMALY_RATE,
                include_stockouts: false,
                data_type: DataType::Integer,
            },
            ..DemGenConfig::default()
        })
    }
}
