//! Economic Order Quantity (EOQ) model.
//!
//! Closed-form optimum, the annual cost curve, sensitivity around the
//! optimum and CSV export of the data behind the classic EOQ chart.
//!
//! ```
//! use eoq_analysis::calculator::{compute, cost_ratio};
//! use eoq_analysis::model::EoqParameters;
//!
//! let params = EoqParameters::new(15.0, 0.05, 500.0, 10_000.0).unwrap();
//! let result = compute(&params).unwrap();
//! assert!((result.optimal_quantity - 3651.48).abs() < 0.01);
//! assert_eq!(cost_ratio(result.optimal_quantity, result.optimal_quantity).unwrap(), 1.0);
//! ```

pub mod analysis;
pub mod calculator;
pub mod cli;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;

pub use error::{EoqError, Result};
