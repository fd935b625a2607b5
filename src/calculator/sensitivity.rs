// src/calculator/sensitivity.rs

//! How much it costs to order something other than Q*.
//!
//! Two views: fixed scale factors around the optimum (the points annotated
//! on the chart) and a sampled study of demand forecast errors.

use crate::calculator::eoq::{breakdown_unchecked, compute, cost_ratio};
use crate::error::{ensure_positive, EoqError, Result};
use crate::io::demand::generate_normal_demand_estimates;
use crate::model::{EoqParameters, EoqResult};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::SQRT_2;
use tracing::info;

/// An annotated point on the cost curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityPoint {
    pub label: String,
    /// Factor applied to Q*.
    pub scale: f64,
    pub quantity: f64,
    pub total_cost: f64,
    pub cost_ratio: f64,
}

/// Points at Q*/sqrt(2), Q* and Q*·sqrt(2).
///
/// Both off-optimum points carry the same cost ratio (about 1.0607): doubling
/// or halving the order interval around the optimum costs roughly 6% extra on
/// ordering + holding.
pub fn sensitivity_points(
    params: &EoqParameters,
    result: &EoqResult,
) -> Result<Vec<SensitivityPoint>> {
    sensitivity_table(params, result, &[1.0 / SQRT_2, 1.0, SQRT_2])
}

/// One annotated point per scale factor applied to Q*.
pub fn sensitivity_table(
    params: &EoqParameters,
    result: &EoqResult,
    scales: &[f64],
) -> Result<Vec<SensitivityPoint>> {
    params.validate()?;
    let q_star = ensure_positive("optimal_quantity", result.optimal_quantity)?;

    scales
        .iter()
        .map(|&scale| -> Result<SensitivityPoint> {
            ensure_positive("scale", scale)?;
            let quantity = q_star * scale;
            let point = breakdown_unchecked(params, quantity);
            Ok(SensitivityPoint {
                label: label_for(scale),
                scale,
                quantity,
                total_cost: point.total_cost,
                cost_ratio: cost_ratio(quantity, q_star)?,
            })
        })
        .collect()
}

fn label_for(scale: f64) -> String {
    const EPS: f64 = 1e-12;
    if (scale - 1.0).abs() < EPS {
        "Q*".to_string()
    } else if (scale - SQRT_2).abs() < EPS {
        "Q*·√2".to_string()
    } else if (scale - 1.0 / SQRT_2).abs() < EPS {
        "Q*/√2".to_string()
    } else {
        format!("{scale}·Q*")
    }
}

// =========================================================================
// Demand misestimation
// =========================================================================

/// Outcome of ordering with an EOQ computed from a wrong demand forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MisestimationSummary {
    pub samples: usize,
    pub relative_std_dev: f64,
    pub mean_cost_ratio: f64,
    pub std_dev_cost_ratio: f64,
    pub max_cost_ratio: f64,
}

/// Estimates the penalty of a noisy demand forecast.
///
/// Draws `samples` forecasts from Normal(lambda, `relative_std_dev` * lambda),
/// computes the EOQ each forecast would suggest and measures its cost ratio
/// against the true optimum.
///
/// # Arguments
/// * `relative_std_dev` - Forecast error as a fraction of true demand, in (0, 1].
/// * `samples` - Number of forecasts to draw (at least 1).
/// * `rng` - Random source; seed it for reproducible output.
pub fn demand_misestimation<R: Rng + ?Sized>(
    params: &EoqParameters,
    relative_std_dev: f64,
    samples: usize,
    rng: &mut R,
) -> Result<MisestimationSummary> {
    let truth = compute(params)?;
    ensure_positive("relative_std_dev", relative_std_dev)?;
    if relative_std_dev > 1.0 {
        return Err(EoqError::InvalidParameter {
            name: "relative_std_dev",
            value: relative_std_dev,
        });
    }
    if samples == 0 {
        return Err(EoqError::InvalidParameter {
            name: "samples",
            value: 0.0,
        });
    }

    let forecasts = generate_normal_demand_estimates(
        rng,
        samples,
        params.annual_demand,
        relative_std_dev * params.annual_demand,
    )?;

    let ratios = forecasts
        .into_iter()
        .map(|forecast| {
            let guess = compute(&params.with_annual_demand(forecast))?;
            cost_ratio(guess.optimal_quantity, truth.optimal_quantity)
        })
        .collect::<Result<Vec<f64>>>()?;

    let n = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / n;
    let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let max = ratios.iter().copied().fold(f64::MIN, f64::max);

    info!(
        samples,
        relative_std_dev,
        mean_cost_ratio = mean,
        max_cost_ratio = max,
        "demand misestimation study finished"
    );

    Ok(MisestimationSummary {
        samples,
        relative_std_dev,
        mean_cost_ratio: mean,
        std_dev_cost_ratio: variance.sqrt(),
        max_cost_ratio: max,
    })
}
