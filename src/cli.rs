// src/cli.rs

use crate::analysis::AnalysisConfig;
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eoq-analysis", version, about = "Economic Order Quantity analysis")]
pub struct Cli {
    /// TOML configuration file (defaults to the reference scenario)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ParameterOverrides,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterOverrides {
    /// Cost per unit (c)
    #[arg(long, global = true)]
    pub unit_cost: Option<f64>,

    /// Annual holding rate (i), e.g. 0.05
    #[arg(long, global = true)]
    pub holding_rate: Option<f64>,

    /// Fixed cost per order (K)
    #[arg(long, global = true)]
    pub order_cost: Option<f64>,

    /// Annual demand in units (lambda)
    #[arg(long, global = true)]
    pub annual_demand: Option<f64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the optimal order quantity, period and cost
    Compute,

    /// Write the sampled cost curve to CSV
    Curve {
        /// Output file
        #[arg(short, long, default_value = "eoq_cost_curve.csv")]
        output: PathBuf,

        /// Override the number of samples
        #[arg(short, long)]
        points: Option<usize>,
    },

    /// Print the sensitivity annotations and the demand misestimation study
    Sensitivity {
        /// Forecast error as a fraction of demand
        #[arg(long)]
        relative_std_dev: Option<f64>,

        /// RNG seed of the misestimation study
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write curve and annotation CSV files and print a summary (default)
    Report {
        /// Directory for the CSV files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// The subcommand to run; `report` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Report { output_dir: None })
    }

    /// Config file (or defaults) with the parameter and subcommand overrides applied.
    pub fn load_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)?,
            None => AnalysisConfig::default(),
        };
        self.overrides.apply(&mut config);
        self.resolved_command().apply(&mut config);
        Ok(config)
    }
}

impl Commands {
    /// Folds subcommand options into the analysis config.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        match self {
            Commands::Compute => {}
            Commands::Curve { points, .. } => {
                if let Some(n) = points {
                    config.curve.n_points = *n;
                }
            }
            Commands::Sensitivity {
                relative_std_dev,
                seed,
            } => {
                if let Some(v) = relative_std_dev {
                    config.sensitivity.relative_std_dev = *v;
                }
                if let Some(v) = seed {
                    config.sensitivity.seed = *v;
                }
            }
            Commands::Report { output_dir } => {
                if let Some(dir) = output_dir {
                    config.output.directory = dir.clone();
                }
            }
        }
    }
}

impl ParameterOverrides {
    pub fn apply(&self, config: &mut AnalysisConfig) {
        let params = &mut config.parameters;
        if let Some(v) = self.unit_cost {
            params.unit_cost = v;
        }
        if let Some(v) = self.holding_rate {
            params.holding_rate = v;
        }
        if let Some(v) = self.order_cost {
            params.order_cost = v;
        }
        if let Some(v) = self.annual_demand {
            params.annual_demand = v;
        }
    }
}
