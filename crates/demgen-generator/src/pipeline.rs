//! Single-series generation: dates in, finished series out.

use crate::dates::generate_date_range;
use crate::error::GeneratorError;
use crate::stages::Stage;
use demgen_core::{DemGenConfig, TimeSeriesPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Run the full pipeline for `config`, drawing randomness from `rng`.
///
/// The configuration is validated before any work starts, so a rejected
/// configuration never yields a partial series.
pub fn generate<R: Rng + ?Sized>(
    config: &DemGenConfig,
    rng: &mut R,
) -> Result<Vec<TimeSeriesPoint>, GeneratorError> {
    config.validate()?;

    let dates = generate_date_range(&config.time)?;
    let mut points: Vec<TimeSeriesPoint> = dates
        .into_iter()
        .map(|date| TimeSeriesPoint::new(date, 0.0))
        .collect();

    for stage in Stage::ALL {
        points = stage.apply(&points, config, rng);
        debug!(stage = %stage, points = points.len(), "Stage complete");
    }

    let anomalies = points.iter().filter(|p| p.is_anomaly).count();
    info!(
        "Generated {} points ({} frequency, {} anomalies)",
        points.len(),
        config.time.frequency,
        anomalies
    );

    Ok(points)
}

/// Seeded single-series generator.
///
/// Owns its random source so repeated calls continue one reproducible
/// stream. Without a seed the stream comes from OS entropy.
pub struct DemandGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl DemandGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&mut self, config: &DemGenConfig) -> Result<Vec<TimeSeriesPoint>, GeneratorError> {
        generate(config, &mut self.rng)
    }
}
