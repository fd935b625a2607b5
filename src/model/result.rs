// src/model/result.rs

/// The optimum of the EOQ model for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqResult {
    /// Q*, the order size minimizing annual cost.
    pub optimal_quantity: f64,
    /// T*, time between orders in years.
    pub optimal_period: f64,
    /// CT*, minimal annual cost including purchasing.
    pub optimal_total_cost: f64,
}

impl EoqResult {
    /// Number of orders placed per year at the optimum (1 / T*).
    pub fn orders_per_year(&self) -> f64 {
        1.0 / self.optimal_period
    }
}
