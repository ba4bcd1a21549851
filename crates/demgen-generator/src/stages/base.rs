//! Base series: the effective average demand with multiplicative noise.

use crate::resolver::ConfigResolver;
use demgen_core::{DemGenConfig, TimeSeriesPoint, Volatility};
use rand::Rng;

/// Scale `value` by a uniform factor in `[1 - r, 1 + r)` for the volatility's `r`.
///
/// `Volatility::None` returns `value` untouched and draws nothing.
pub fn apply_volatility<R: Rng + ?Sized>(value: f64, volatility: Volatility, rng: &mut R) -> f64 {
    let range = volatility.noise_range();
    if range == 0.0 {
        return value;
    }
    value * rng.gen_range(1.0 - range..1.0 + range)
}

/// Replace every point with a fresh base value for its date.
pub fn apply<R: Rng + ?Sized>(
    points: &[TimeSeriesPoint],
    config: &DemGenConfig,
    rng: &mut R,
) -> Vec<TimeSeriesPoint> {
    let resolver = ConfigResolver::new(config);

    points
        .iter()
        .map(|point| {
            let demand = resolver.resolve(point.date).demand;
            let value = apply_volatility(demand.average_daily, demand.volatility, rng);
            TimeSeriesPoint::new(point.date, value)
        })
        .collect()
}
