// src/error.rs

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = EoqError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum EoqError {
    /// An economic input (or an order quantity) was zero, negative or not finite.
    #[error("invalid parameter `{name}`: {value} (must be a finite value > 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The sampling range for the cost curve is malformed.
    #[error("invalid range: {reason} (q_min = {q_min}, q_max = {q_max}, n_points = {n_points})")]
    InvalidRange {
        reason: &'static str,
        q_min: f64,
        q_max: f64,
        n_points: usize,
    },

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Checks that a value is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EoqError::InvalidParameter { name, value })
    }
}
