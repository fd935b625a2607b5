pub mod config;
pub mod engine;

pub use config::AnalysisConfig;
pub use engine::{AnalysisReport, EoqAnalysis, ExportedFiles};
