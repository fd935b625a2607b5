// src/calculator/eoq.rs

//! Closed-form EOQ formulas.
//!
//! Annual cost of ordering `Q` units at a time under steady demand:
//!
//! ```text
//! TC(Q) = K * lambda / Q  +  h * Q / 2  +  c * lambda
//!         (ordering)         (holding)     (purchasing)
//! ```

use crate::error::{ensure_positive, Result};
use crate::model::{EoqParameters, EoqResult};
use serde::Serialize;
use tracing::debug;

/// Cost components at one order size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub quantity: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub purchase_cost: f64,
    pub total_cost: f64,
}

/// Computes the optimal order quantity, period and annual cost.
///
/// # Formula
/// - Q* = sqrt(2 * K * lambda / h)
/// - T* = Q* / lambda
/// - CT* = sqrt(2 * K * lambda * h) + c * lambda
///
/// Fails with `InvalidParameter` if any input is not strictly positive, or if
/// the inputs are so extreme that the optimum is not a finite positive number.
pub fn compute(params: &EoqParameters) -> Result<EoqResult> {
    params.validate()?;

    let h = params.holding_cost();
    let k = params.order_cost;
    let demand = params.annual_demand;

    let optimal_quantity = ensure_positive("optimal_quantity", (2.0 * k * demand / h).sqrt())?;
    let optimal_period = ensure_positive("optimal_period", optimal_quantity / demand)?;
    let optimal_total_cost = ensure_positive(
        "optimal_total_cost",
        (2.0 * k * demand * h).sqrt() + params.purchase_cost(),
    )?;

    debug!(optimal_quantity, optimal_period, optimal_total_cost, "computed EOQ optimum");

    Ok(EoqResult {
        optimal_quantity,
        optimal_period,
        optimal_total_cost,
    })
}

/// Annual cost of ordering `quantity` units at a time.
///
/// Fails with `InvalidParameter` if `quantity` (or any parameter) is not strictly positive.
pub fn total_cost(params: &EoqParameters, quantity: f64) -> Result<f64> {
    Ok(breakdown(params, quantity)?.total_cost)
}

/// Splits the annual cost at `quantity` into ordering, holding and purchasing.
pub fn breakdown(params: &EoqParameters, quantity: f64) -> Result<CurvePoint> {
    params.validate()?;
    ensure_positive("quantity", quantity)?;
    Ok(breakdown_unchecked(params, quantity))
}

/// Cost components for inputs the caller has already validated.
pub(crate) fn breakdown_unchecked(params: &EoqParameters, quantity: f64) -> CurvePoint {
    let ordering_cost = params.order_cost * params.annual_demand / quantity;
    let holding_cost = params.holding_cost() * quantity / 2.0;
    let purchase_cost = params.purchase_cost();

    CurvePoint {
        quantity,
        ordering_cost,
        holding_cost,
        purchase_cost,
        total_cost: ordering_cost + holding_cost + purchase_cost,
    }
}

/// Ordering + holding cost at `quantity`, relative to its value at the optimum.
///
/// # Formula
/// ratio = 0.5 * (Q* / Q + Q / Q*)
///
/// Purchasing cost is excluded. The ratio is convex in `Q`, equals exactly 1 at
/// `Q = Q*` and is symmetric under `Q -> Q*^2 / Q`.
pub fn cost_ratio(quantity: f64, optimal_quantity: f64) -> Result<f64> {
    ensure_positive("quantity", quantity)?;
    ensure_positive("optimal_quantity", optimal_quantity)?;
    Ok(0.5 * (optimal_quantity / quantity + quantity / optimal_quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EoqError;

    fn reference() -> EoqParameters {
        EoqParameters::default()
    }

    #[test]
    fn reference_scenario_optimum() {
        let result = compute(&reference()).unwrap();
        assert!((result.optimal_quantity - 3651.48).abs() < 0.01);
        assert!((result.optimal_total_cost - 152_738.61).abs() < 0.01);
        assert!((result.optimal_period - 0.365148).abs() < 1e-6);
        assert!((result.orders_per_year() - 2.738613).abs() < 1e-6);
    }

    #[test]
    fn optimal_total_cost_matches_total_cost_at_optimum() {
        let params = reference();
        let result = compute(&params).unwrap();
        let at_optimum = total_cost(&params, result.optimal_quantity).unwrap();
        assert!((at_optimum - result.optimal_total_cost).abs() < 1e-6);
    }

    #[test]
    fn ordering_and_holding_balance_at_optimum() {
        let params = reference();
        let result = compute(&params).unwrap();
        let point = breakdown(&params, result.optimal_quantity).unwrap();
        assert!((point.ordering_cost - point.holding_cost).abs() < 1e-6);
    }

    #[test]
    fn total_cost_rejects_non_positive_quantity() {
        for q in [0.0, -10.0] {
            let err = total_cost(&reference(), q).unwrap_err();
            assert!(matches!(err, EoqError::InvalidParameter { name: "quantity", .. }));
        }
    }

    #[test]
    fn compute_rejects_invalid_parameters() {
        let params = EoqParameters {
            order_cost: 0.0,
            ..reference()
        };
        assert!(matches!(
            compute(&params),
            Err(EoqError::InvalidParameter { name: "order_cost", .. })
        ));
    }

    #[test]
    fn overflowing_optimum_is_rejected() {
        let params = EoqParameters {
            order_cost: 1e200,
            annual_demand: 1e200,
            ..reference()
        };
        assert!(matches!(
            compute(&params),
            Err(EoqError::InvalidParameter { name: "optimal_quantity", .. })
        ));
    }

    #[test]
    fn underflowing_holding_cost_never_reaches_the_formula() {
        let params = EoqParameters {
            unit_cost: 1e-200,
            holding_rate: 1e-200,
            ..reference()
        };
        assert!(matches!(
            compute(&params),
            Err(EoqError::InvalidParameter { name: "holding_cost", .. })
        ));
    }

    #[test]
    fn cost_ratio_is_one_at_optimum() {
        for q in [0.001, 1.0, 3651.48, 1e9] {
            assert_eq!(cost_ratio(q, q).unwrap(), 1.0);
        }
    }

    #[test]
    fn cost_ratio_is_symmetric_around_sqrt_two() {
        let q_star = 3651.48;
        let above = cost_ratio(q_star * 2f64.sqrt(), q_star).unwrap();
        let below = cost_ratio(q_star / 2f64.sqrt(), q_star).unwrap();
        assert!((above - below).abs() < 1e-12);
        assert!((above - 1.060_660_17).abs() < 1e-8);
    }

    #[test]
    fn cost_ratio_rejects_non_positive_inputs() {
        assert!(cost_ratio(0.0, 1.0).is_err());
        assert!(cost_ratio(1.0, -1.0).is_err());
    }
}
