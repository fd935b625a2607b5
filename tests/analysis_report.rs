use eoq_analysis::analysis::{AnalysisConfig, EoqAnalysis};
use std::fs;

#[test]
fn report_from_toml_config_writes_chart_data() {
    eoq_analysis::logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("eoq.toml");
    let out_dir = dir.path().join("out");
    fs::write(
        &config_path,
        format!(
            r#"
[parameters]
unit_cost = 15.0
holding_rate = 0.05
order_cost = 500.0
annual_demand = 10000.0

[curve]
q_min = 100.0
q_max = 10000.0
n_points = 1000

[sensitivity]
relative_std_dev = 0.1
samples = 200
seed = 9

[output]
directory = "{}"
"#,
            out_dir.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    let analysis = EoqAnalysis::new(AnalysisConfig::from_file(&config_path).unwrap());
    let report = analysis.run().unwrap();
    let files = analysis.export(&report).unwrap();

    let mut curve = csv::Reader::from_path(&files.curve).unwrap();
    assert_eq!(curve.records().count(), 1000);

    let mut annotations = csv::Reader::from_path(&files.annotations).unwrap();
    let ratios: Vec<f64> = annotations
        .records()
        .map(|r| r.unwrap()[4].parse().unwrap())
        .collect();
    assert_eq!(ratios.len(), 3);
    assert_eq!(ratios[1], 1.0);

    let study = report.misestimation.unwrap();
    assert_eq!(study.samples, 200);
    assert!(study.mean_cost_ratio >= 1.0);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalysisConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, eoq_analysis::EoqError::Io(_)));
}
