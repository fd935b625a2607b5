// src/model/parameters.rs

use crate::error::{ensure_positive, Result};
use serde::Deserialize;
use tracing::warn;

/// The five economic inputs of the EOQ model.
///
/// Values are plain data so they can be loaded from a config file; call
/// [`EoqParameters::validate`] (or build through [`EoqParameters::new`]) before
/// relying on them. Every calculator entry point validates on its own.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EoqParameters {
    /// Cost per unit purchased or produced (c).
    pub unit_cost: f64,
    /// Annual holding rate as a fraction of unit cost (i).
    pub holding_rate: f64,
    /// Fixed cost per order placed (K).
    pub order_cost: f64,
    /// Units demanded per year (lambda).
    pub annual_demand: f64,
}

impl EoqParameters {
    /// Builds a validated parameter set.
    ///
    /// # Arguments
    /// * `unit_cost` - Cost per unit (c).
    /// * `holding_rate` - Annual holding rate (i), e.g. 0.05 for 5%.
    /// * `order_cost` - Fixed cost per order (K).
    /// * `annual_demand` - Yearly demand in units (lambda).
    pub fn new(
        unit_cost: f64,
        holding_rate: f64,
        order_cost: f64,
        annual_demand: f64,
    ) -> Result<Self> {
        let params = Self {
            unit_cost,
            holding_rate,
            order_cost,
            annual_demand,
        };
        params.validate()?;
        Ok(params)
    }

    /// Fails with `InvalidParameter` on the first input that is not strictly positive.
    ///
    /// The derived costs h = i * c and c * lambda must also stay finite and
    /// positive, which rules out inputs whose products under- or overflow.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("unit_cost", self.unit_cost)?;
        ensure_positive("holding_rate", self.holding_rate)?;
        ensure_positive("order_cost", self.order_cost)?;
        ensure_positive("annual_demand", self.annual_demand)?;
        ensure_positive("holding_cost", self.holding_cost())?;
        ensure_positive("purchase_cost", self.purchase_cost())?;

        if self.holding_rate > 1.0 {
            warn!(holding_rate = self.holding_rate, "holding rate above 100% per year");
        }
        Ok(())
    }

    /// Annual cost of holding one unit: h = i * c.
    pub fn holding_cost(&self) -> f64 {
        self.holding_rate * self.unit_cost
    }

    /// Yearly purchasing cost c * lambda, independent of the order size.
    pub fn purchase_cost(&self) -> f64 {
        self.unit_cost * self.annual_demand
    }

    /// Same economics with a different annual demand.
    pub fn with_annual_demand(&self, annual_demand: f64) -> Self {
        Self {
            annual_demand,
            ..*self
        }
    }
}

impl Default for EoqParameters {
    /// The reference scenario: c = 15, i = 5%, K = 500, lambda = 10000.
    fn default() -> Self {
        Self {
            unit_cost: 15.0,
            holding_rate: 0.05,
            order_cost: 500.0,
            annual_demand: 10_000.0,
        }
    }
}
