//! Triangular distribution sampling.

use demgen_core::{ConfigError, Distribution};
use rand::Rng;

/// Inverse CDF of the triangular distribution at uniform draw `u`.
///
/// Callers must have validated `min <= mode <= max`. A zero-width
/// distribution returns `min`.
pub fn from_uniform(dist: &Distribution, u: f64) -> f64 {
    let Distribution { min, mode, max } = *dist;
    let width = max - min;
    if width == 0.0 {
        return min;
    }

    let cut = (mode - min) / width;
    let value = if u < cut {
        min + (u * width * (mode - min)).sqrt()
    } else {
        max - ((1.0 - u) * width * (max - mode)).sqrt()
    };
    value.clamp(min, max)
}

/// Draw one value from `dist`, rejecting malformed parameters.
pub fn sample<R: Rng + ?Sized>(dist: &Distribution, field: &str, rng: &mut R) -> Result<f64, ConfigError> {
    dist.validate(field)?;
    Ok(from_uniform(dist, rng.gen::<f64>()))
}
