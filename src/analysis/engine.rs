// src/analysis/engine.rs

use crate::analysis::config::AnalysisConfig;
use crate::calculator::{
    compute, demand_misestimation, generate_curve, sensitivity_points, sensitivity_table,
    CostCurve, CurvePoint, MisestimationSummary, SensitivityPoint,
};
use crate::error::Result;
use crate::io::reporting;
use crate::model::EoqResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub result: EoqResult,
    pub curve: CostCurve,
    /// Lowest-cost sample of the curve and its index.
    pub curve_minimum: Option<(usize, CurvePoint)>,
    pub sensitivity: Vec<SensitivityPoint>,
    pub misestimation: Option<MisestimationSummary>,
}

/// Where [`EoqAnalysis::export`] wrote its files.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub curve: PathBuf,
    pub annotations: PathBuf,
}

pub struct EoqAnalysis {
    config: AnalysisConfig,
}

impl EoqAnalysis {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Runs the optimum, the curve, the annotations and, if enabled, the
    /// misestimation study.
    pub fn run(&self) -> Result<AnalysisReport> {
        let params = &self.config.parameters;

        // 1. Optimum
        let result = compute(params)?;
        info!(
            optimal_quantity = result.optimal_quantity,
            optimal_total_cost = result.optimal_total_cost,
            "EOQ optimum"
        );

        // 2. Cost curve
        let range = &self.config.curve;
        let curve = generate_curve(params, range.q_min, range.q_max, range.n_points)?;
        let curve_minimum = curve.min_point();
        if !(range.q_min..=range.q_max).contains(&result.optimal_quantity) {
            info!(
                optimal_quantity = result.optimal_quantity,
                q_min = range.q_min,
                q_max = range.q_max,
                "optimum lies outside the sampled curve"
            );
        }

        // 3. Annotations
        let mut sensitivity = sensitivity_points(params, &result)?;
        let extra = &self.config.sensitivity.extra_scales;
        if !extra.is_empty() {
            sensitivity.extend(sensitivity_table(params, &result, extra)?);
        }

        // 4. Demand misestimation
        let settings = &self.config.sensitivity;
        let misestimation = if settings.samples > 0 {
            let mut rng = StdRng::seed_from_u64(settings.seed);
            Some(demand_misestimation(
                params,
                settings.relative_std_dev,
                settings.samples,
                &mut rng,
            )?)
        } else {
            None
        };

        Ok(AnalysisReport {
            result,
            curve,
            curve_minimum,
            sensitivity,
            misestimation,
        })
    }

    /// Writes the curve and annotation CSV files for the chart renderer.
    pub fn export(&self, report: &AnalysisReport) -> Result<ExportedFiles> {
        let output = &self.config.output;
        std::fs::create_dir_all(&output.directory)?;

        let files = ExportedFiles {
            curve: output.curve_path(),
            annotations: output.annotations_path(),
        };
        reporting::write_cost_curve(&files.curve, report.curve)?;
        reporting::write_annotations(&files.annotations, &report.sensitivity)?;
        Ok(files)
    }
}
