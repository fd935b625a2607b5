use anyhow::Context;
use clap::Parser;
use eoq_analysis::analysis::{AnalysisReport, EoqAnalysis};
use eoq_analysis::calculator::{compute, generate_curve};
use eoq_analysis::cli::{Cli, Commands};
use eoq_analysis::io::reporting;
use eoq_analysis::logging;
use eoq_analysis::model::EoqResult;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    // 1. SETUP CONFIGURATION
    let config = cli.load_config().context("failed to load configuration")?;

    // 2. DISPATCH
    match cli.resolved_command() {
        Commands::Compute => {
            let result = compute(&config.parameters)?;
            print_optimum(&result);
        }
        Commands::Curve { output, .. } => {
            let curve = generate_curve(
                &config.parameters,
                config.curve.q_min,
                config.curve.q_max,
                config.curve.n_points,
            )?;
            let rows = reporting::write_cost_curve(&output, curve)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {} curve points to {}", rows, output.display());
        }
        Commands::Sensitivity { .. } => {
            let report = EoqAnalysis::new(config).run()?;
            print_sensitivity(&report);
        }
        Commands::Report { .. } => {
            let analysis = EoqAnalysis::new(config);
            let report = analysis.run()?;
            let files = analysis
                .export(&report)
                .context("failed to export chart data")?;

            print_optimum(&report.result);
            print_sensitivity(&report);
            println!("\nChart data:");
            println!("  curve:       {}", files.curve.display());
            println!("  annotations: {}", files.annotations.display());
        }
    }

    Ok(())
}

fn print_optimum(result: &EoqResult) {
    println!("=== EOQ Optimum ===");
    println!("Optimal order quantity Q*: {:.2} units", result.optimal_quantity);
    println!(
        "Optimal reorder period T*: {:.4} years ({:.1} days)",
        result.optimal_period,
        result.optimal_period * 365.0
    );
    println!("Orders per year:           {:.2}", result.orders_per_year());
    println!("Optimal annual cost CT*:   ${:.2}", result.optimal_total_cost);
}

fn print_sensitivity(report: &AnalysisReport) {
    println!("\n=== Sensitivity ===");
    for point in &report.sensitivity {
        println!(
            "{:>8}: Q = {:>10.2}  cost = ${:>12.2}  ratio = {:.5}",
            point.label, point.quantity, point.total_cost, point.cost_ratio
        );
    }

    if let Some((index, point)) = report.curve_minimum {
        println!(
            "Cheapest curve sample: #{} at Q = {:.2} (${:.2})",
            index, point.quantity, point.total_cost
        );
    }

    if let Some(study) = &report.misestimation {
        println!(
            "\nDemand forecast error ±{:.0}% ({} samples): mean ratio {:.5}, sd {:.5}, worst {:.5}",
            study.relative_std_dev * 100.0,
            study.samples,
            study.mean_cost_ratio,
            study.std_dev_cost_ratio,
            study.max_cost_ratio
        );
    }
}
