// src/analysis/config.rs

use crate::error::Result;
use crate::model::EoqParameters;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything one analysis run needs. Loaded from TOML; every section is optional.
///
/// ```toml
/// [parameters]
/// unit_cost = 15.0
/// holding_rate = 0.05
/// order_cost = 500.0
/// annual_demand = 10000.0
///
/// [curve]
/// q_min = 100.0
/// q_max = 10000.0
/// n_points = 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub parameters: EoqParameters,
    pub curve: CurveConfig,
    pub sensitivity: SensitivityConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveConfig {
    pub q_min: f64,
    pub q_max: f64,
    pub n_points: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensitivityConfig {
    /// Extra scale factors reported next to Q*/sqrt(2), Q* and Q*·sqrt(2).
    pub extra_scales: Vec<f64>,
    /// Forecast error of the misestimation study, as a fraction of demand.
    pub relative_std_dev: f64,
    /// Forecasts drawn by the misestimation study; 0 skips it.
    pub samples: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub curve_file: String,
    pub annotations_file: String,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            q_min: 100.0,
            q_max: 10_000.0,
            n_points: 1000,
        }
    }
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            extra_scales: Vec::new(),
            relative_std_dev: 0.2,
            samples: 1000,
            seed: 42,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            curve_file: "eoq_cost_curve.csv".to_string(),
            annotations_file: "eoq_annotations.csv".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl OutputConfig {
    pub fn curve_path(&self) -> PathBuf {
        self.directory.join(&self.curve_file)
    }

    pub fn annotations_path(&self) -> PathBuf {
        self.directory.join(&self.annotations_file)
    }
}
