// src/calculator/curve.rs

use crate::calculator::eoq::{breakdown_unchecked, CurvePoint};
use crate::error::{EoqError, Result};
use crate::model::EoqParameters;
use std::iter::FusedIterator;

/// Evenly spaced samples of the annual cost curve over `[q_min, q_max]`.
///
/// Nothing is evaluated until iterated. The curve is `Copy`, so it can be
/// iterated any number of times and yields the same points each time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCurve {
    params: EoqParameters,
    q_min: f64,
    q_max: f64,
    n_points: usize,
}

/// Builds the cost curve for `params` with `n_points` samples from `q_min` to `q_max`.
///
/// # Errors
/// * `InvalidRange` if `q_min >= q_max`, `n_points < 2`, `q_min <= 0` or a bound is not finite.
/// * `InvalidParameter` if `params` is invalid.
pub fn generate_curve(
    params: &EoqParameters,
    q_min: f64,
    q_max: f64,
    n_points: usize,
) -> Result<CostCurve> {
    let invalid = |reason| EoqError::InvalidRange {
        reason,
        q_min,
        q_max,
        n_points,
    };

    if !q_min.is_finite() || !q_max.is_finite() {
        return Err(invalid("bounds must be finite"));
    }
    if q_min >= q_max {
        return Err(invalid("q_min must be below q_max"));
    }
    if n_points < 2 {
        return Err(invalid("at least two points are required"));
    }
    if q_min <= 0.0 {
        return Err(invalid("order quantities must be positive"));
    }
    // Every step must move by at least one representable value near q_max,
    // otherwise neighbouring samples collapse onto the same quantity.
    let step = (q_max - q_min) / (n_points - 1) as f64;
    if step < ulp(q_max) {
        return Err(invalid("range too narrow for the number of points"));
    }
    params.validate()?;

    Ok(CostCurve {
        params: *params,
        q_min,
        q_max,
        n_points,
    })
}

/// Gap between a positive finite `x` and the next larger f64.
fn ulp(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1) - x
}

impl CostCurve {
    pub fn len(&self) -> usize {
        self.n_points
    }

    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    pub fn params(&self) -> &EoqParameters {
        &self.params
    }

    /// Order quantity of sample `index`. The last sample is exactly `q_max`.
    pub fn quantity_at(&self, index: usize) -> f64 {
        if index + 1 >= self.n_points {
            return self.q_max;
        }
        let step = (self.q_max - self.q_min) / (self.n_points - 1) as f64;
        self.q_min + step * index as f64
    }

    /// Index of the sample whose order quantity is closest to `quantity`.
    pub fn nearest_index(&self, quantity: f64) -> usize {
        let step = (self.q_max - self.q_min) / (self.n_points - 1) as f64;
        let raw = ((quantity - self.q_min) / step).round();
        raw.clamp(0.0, (self.n_points - 1) as f64) as usize
    }

    /// Sample with the lowest total cost (first one on ties).
    pub fn min_point(&self) -> Option<(usize, CurvePoint)> {
        self.iter()
            .enumerate()
            .fold(None, |best: Option<(usize, CurvePoint)>, (i, point)| match best {
                Some((_, b)) if b.total_cost <= point.total_cost => best,
                _ => Some((i, point)),
            })
    }

    /// Starts a fresh pass over the samples.
    pub fn iter(&self) -> CurveIter {
        CurveIter {
            curve: *self,
            front: 0,
            back: self.n_points,
        }
    }
}

impl IntoIterator for CostCurve {
    type Item = CurvePoint;
    type IntoIter = CurveIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &CostCurve {
    type Item = CurvePoint;
    type IntoIter = CurveIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct CurveIter {
    curve: CostCurve,
    front: usize,
    back: usize,
}

impl Iterator for CurveIter {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let quantity = self.curve.quantity_at(self.front);
        self.front += 1;
        Some(breakdown_unchecked(&self.curve.params, quantity))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for CurveIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let quantity = self.curve.quantity_at(self.back);
        Some(breakdown_unchecked(&self.curve.params, quantity))
    }
}

impl ExactSizeIterator for CurveIter {}

impl FusedIterator for CurveIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::eoq::{compute, total_cost};

    fn reference_curve() -> CostCurve {
        generate_curve(&EoqParameters::default(), 100.0, 10_000.0, 1000).unwrap()
    }

    #[test]
    fn spans_closed_range_with_exact_count() {
        let points: Vec<_> = reference_curve().iter().collect();
        assert_eq!(points.len(), 1000);
        assert_eq!(points[0].quantity, 100.0);
        assert_eq!(points[999].quantity, 10_000.0);
        assert!(points.windows(2).all(|w| w[0].quantity < w[1].quantity));
    }

    #[test]
    fn iterating_twice_yields_the_same_points() {
        let curve = reference_curve();
        let first: Vec<_> = curve.iter().collect();
        let second: Vec<_> = curve.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn samples_match_total_cost() {
        let params = EoqParameters::default();
        for point in reference_curve().iter().step_by(97) {
            let expected = total_cost(&params, point.quantity).unwrap();
            assert!((point.total_cost - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn minimum_sample_is_nearest_to_optimum() {
        let curve = reference_curve();
        let result = compute(curve.params()).unwrap();
        let (index, _) = curve.min_point().unwrap();
        assert_eq!(index, curve.nearest_index(result.optimal_quantity));
    }

    #[test]
    fn reverse_iteration_mirrors_forward() {
        let curve = generate_curve(&EoqParameters::default(), 1.0, 5.0, 5).unwrap();
        let quantities: Vec<f64> = curve.iter().rev().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(curve.iter().len(), 5);
    }

    #[test]
    fn rejects_malformed_ranges() {
        let params = EoqParameters::default();
        let bad = [
            (10.0, 10.0, 10),
            (20.0, 10.0, 10),
            (10.0, 20.0, 1),
            (10.0, 20.0, 0),
            (0.0, 20.0, 10),
            (-5.0, 20.0, 10),
            (10.0, f64::INFINITY, 10),
        ];
        for (q_min, q_max, n) in bad {
            let err = generate_curve(&params, q_min, q_max, n).unwrap_err();
            assert!(
                matches!(err, EoqError::InvalidRange { .. }),
                "expected InvalidRange for ({q_min}, {q_max}, {n})"
            );
        }
    }

    #[test]
    fn rejects_range_below_float_resolution() {
        let params = EoqParameters::default();
        let err = generate_curve(&params, 1.0, 1.0 + f64::EPSILON, 4).unwrap_err();
        assert!(matches!(err, EoqError::InvalidRange { .. }));
    }

    #[test]
    fn narrowest_valid_range_is_strictly_increasing() {
        let params = EoqParameters::default();
        let curve = generate_curve(&params, 1.0, 1.0 + 4.0 * f64::EPSILON, 5).unwrap();
        let quantities: Vec<f64> = curve.iter().map(|p| p.quantity).collect();
        assert!(quantities.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(quantities.last(), Some(&(1.0 + 4.0 * f64::EPSILON)));
    }

    #[test]
    fn two_points_are_the_endpoints() {
        let curve = generate_curve(&EoqParameters::default(), 50.0, 60.0, 2).unwrap();
        let quantities: Vec<f64> = curve.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![50.0, 60.0]);
    }
}
