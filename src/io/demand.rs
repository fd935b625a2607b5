// src/io/demand.rs

use crate::error::{EoqError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Samples demand forecasts from a Normal (Bell Curve) distribution.
///
/// Demand cannot be zero or negative, so such draws are redrawn rather than
/// clamped; the result always holds exactly `count` positive values.
///
/// # Arguments
/// * `rng` - Random source.
/// * `count` - Number of forecasts to draw.
/// * `mean` - The true annual demand (e.g., 10000.0).
/// * `std_dev` - Forecast error (e.g., 2000.0).
pub fn generate_normal_demand_estimates<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<f64>> {
    let normal = Normal::new(mean, std_dev).map_err(|_| EoqError::InvalidParameter {
        name: "std_dev",
        value: std_dev,
    })?;

    let mut estimates = Vec::with_capacity(count);
    while estimates.len() < count {
        let val: f64 = normal.sample(rng);
        if val > 0.0 {
            estimates.push(val);
        }
    }

    Ok(estimates)
}
