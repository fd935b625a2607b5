pub mod curve;
pub mod eoq;
pub mod sensitivity;

pub use curve::{generate_curve, CostCurve, CurveIter};
pub use eoq::{breakdown, compute, cost_ratio, total_cost, CurvePoint};
pub use sensitivity::{
    demand_misestimation, sensitivity_points, sensitivity_table, MisestimationSummary,
    SensitivityPoint,
};
