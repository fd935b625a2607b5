// src/io/reporting.rs

use crate::calculator::{CurvePoint, SensitivityPoint};
use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Writes the sampled cost curve to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/cost_curve.csv").
/// * `points` - Curve samples, e.g. a [`CostCurve`](crate::calculator::CostCurve) iterator.
///
/// Returns the number of rows written.
pub fn write_cost_curve<P, I>(file_path: P, points: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = CurvePoint>,
{
    write_records(file_path.as_ref(), points)
}

/// Writes the annotated optimum and sensitivity points to a CSV file.
pub fn write_annotations<P: AsRef<Path>>(
    file_path: P,
    points: &[SensitivityPoint],
) -> Result<usize> {
    write_records(file_path.as_ref(), points)
}

fn write_records<T, I>(path: &Path, records: I) -> Result<usize>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::Writer::from_path(path)?;

    let mut rows = 0;
    for record in records {
        wtr.serialize(record)?;
        rows += 1;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(rows, path = %path.display(), "exported CSV");
    Ok(rows)
}
