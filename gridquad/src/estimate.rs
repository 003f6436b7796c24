//! Error estimation by grid refinement.
//!
//! The estimate for a rule is the absolute difference between its result on
//! the caller's grid and its result on a grid `refinement` times finer along
//! every axis. This is a heuristic, not a bound. It is also by far the most
//! expensive operation in the crate: a 2D region at `n = 100` with the default
//! refinement costs `10^8` evaluations per rule, a 3D region `10^12`.

use log::{debug, trace, warn};

use crate::error::{check_precision, QuadratureError, Result};
use crate::region::Domain;

/// The refinement factor used by [`estimate_error`].
pub const DEFAULT_REFINEMENT: usize = 100;

/// Refinement passes above this many evaluations per rule are logged as warnings.
const EXPENSIVE_EVALUATIONS: f64 = 1e10;

/// Stores the estimated error of each quadrature rule.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorEstimate {
    /// The estimated error of the midpoint rule.
    pub midpoint: f64,
    /// The estimated error of the trapezoidal rule.
    pub trapezoidal: f64,
}

/// Estimates quadrature errors by recomputing on a finer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorEstimator {
    /// How many times finer the comparison grid is along each axis.
    refinement: usize,
}

impl Default for ErrorEstimator {
    fn default() -> Self {
        ErrorEstimator {
            refinement: DEFAULT_REFINEMENT,
        }
    }
}

impl ErrorEstimator {
    /// Creates an estimator comparing against a grid `refinement` times finer.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidArgument`] if `refinement` is zero.
    pub fn new(refinement: usize) -> Result<Self> {
        if refinement == 0 {
            return Err(QuadratureError::InvalidArgument(
                "refinement factor must be a positive integer".to_string(),
            ));
        }
        Ok(ErrorEstimator { refinement })
    }

    /// Returns the refinement factor.
    pub fn refinement(&self) -> usize {
        self.refinement
    }

    /// The resolution of the comparison grid for a base resolution `n`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidArgument`] if `n` is zero or the
    /// refined resolution does not fit in `usize`.
    pub fn refined_precision(&self, n: usize) -> Result<usize> {
        check_precision(n)?;
        n.checked_mul(self.refinement()).ok_or_else(|| {
            QuadratureError::InvalidArgument(format!(
                "precision {n} refined {} times overflows",
                self.refinement()
            ))
        })
    }

    /// Estimates the error of `midpoint` and `trapezoidal`, two results
    /// previously computed on `region` with `n` subdivisions per axis.
    ///
    /// Both rules are re-run from scratch on every call.
    ///
    /// # Errors
    ///
    /// Returns [`QuadratureError::InvalidArgument`] if `n` is zero or the
    /// refined resolution overflows.
    pub fn estimate<D: Domain>(
        &self,
        region: &D,
        midpoint: f64,
        trapezoidal: f64,
        n: usize,
    ) -> Result<ErrorEstimate> {
        let fine = self.refined_precision(n)?;

        let evaluations = (fine as f64).powi(D::DIM as i32);
        if evaluations > EXPENSIVE_EVALUATIONS {
            warn!("error estimate needs {evaluations:.3e} integrand evaluations per rule");
        }
        debug!(
            "refining {n} -> {fine} subdivisions per axis (x{}) over {}D volume {}",
            self.refinement(),
            D::DIM,
            region.volume()
        );

        let fine_midpoint = region.midpoint_sum(fine);
        trace!("midpoint on {fine} subdivisions: {fine_midpoint}");
        let fine_trapezoidal = region.trapezoidal_sum(fine);
        trace!("trapezoidal on {fine} subdivisions: {fine_trapezoidal}");

        Ok(ErrorEstimate {
            midpoint: (fine_midpoint - midpoint).abs(),
            trapezoidal: (fine_trapezoidal - trapezoidal).abs(),
        })
    }
}

/// Estimates the error of two results computed on `region` with `n`
/// subdivisions per axis, comparing against a grid [`DEFAULT_REFINEMENT`]
/// times finer.
///
/// # Errors
///
/// Returns [`QuadratureError::InvalidArgument`] if `n` is zero or the
/// refined resolution overflows.
pub fn estimate_error<D: Domain>(
    region: &D,
    midpoint: f64,
    trapezoidal: f64,
    n: usize,
) -> Result<ErrorEstimate> {
    ErrorEstimator::default().estimate(region, midpoint, trapezoidal, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Region2D, Region3D};
    use crate::{midpoint, trapezoidal};
    use std::cell::Cell;

    fn peak(x: f64, y: f64) -> f64 {
        1.0 / (x + y + 1.0).powi(3)
    }

    #[test]
    fn test_refinement_validation() {
        assert!(matches!(
            ErrorEstimator::new(0),
            Err(QuadratureError::InvalidArgument(_))
        ));
        let estimator = ErrorEstimator::new(10).unwrap();
        assert_eq!(estimator.refinement(), 10);
        assert_eq!(estimator.refined_precision(7), Ok(70));
        assert!(estimator.refined_precision(0).is_err());
        assert!(estimator.refined_precision(usize::MAX).is_err());
        assert_eq!(ErrorEstimator::default().refinement(), DEFAULT_REFINEMENT);
    }

    #[test]
    fn test_estimate_matches_direct_difference() {
        let region = Region2D::new((0.0, 2.0), (0.0, 1.0), peak);
        let estimator = ErrorEstimator::new(8).unwrap();

        let mid = midpoint::integrate(&region, 5).unwrap();
        let trap = trapezoidal::integrate(&region, 5).unwrap();
        let errors = estimator.estimate(&region, mid, trap, 5).unwrap();

        let fine_mid = midpoint::integrate(&region, 40).unwrap();
        let fine_trap = trapezoidal::integrate(&region, 40).unwrap();
        assert_eq!(errors.midpoint, (fine_mid - mid).abs());
        assert_eq!(errors.trapezoidal, (fine_trap - trap).abs());
    }

    #[test]
    fn test_no_caching() {
        let calls = Cell::new(0usize);
        let region = Region2D::new((0.0, 1.0), (0.0, 1.0), |x: f64, y: f64| {
            calls.set(calls.get() + 1);
            x * y
        });
        let estimator = ErrorEstimator::new(2).unwrap();
        estimator.estimate(&region, 0.0, 0.0, 3).unwrap();
        // 6x6 midpoint cells plus 6x6 trapezoidal cells with 4 corners each.
        assert_eq!(calls.get(), 36 + 4 * 36);
        estimator.estimate(&region, 0.0, 0.0, 3).unwrap();
        assert_eq!(calls.get(), 2 * (36 + 4 * 36));
    }

    #[test]
    fn test_default_refinement() {
        let region = Region2D::new((0.0, 2.0), (0.0, 1.0), peak);
        let mid = midpoint::integrate(&region, 2).unwrap();
        let trap = trapezoidal::integrate(&region, 2).unwrap();
        let errors = estimate_error(&region, mid, trap, 2).unwrap();

        let fine_mid = midpoint::integrate(&region, 200).unwrap();
        let fine_trap = trapezoidal::integrate(&region, 200).unwrap();
        assert_eq!(errors.midpoint, (fine_mid - mid).abs());
        assert_eq!(errors.trapezoidal, (fine_trap - trap).abs());
    }

    #[test]
    fn test_zero_precision() {
        let region = Region2D::new((0.0, 2.0), (0.0, 1.0), peak);
        assert!(matches!(
            estimate_error(&region, 0.0, 0.0, 0),
            Err(QuadratureError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_triple_estimate() {
        let unit = (0.0, 1.0);
        let cube = Region3D::new(unit, unit, unit, |x: f64, y: f64, z: f64| x * x + y * z);
        let estimator = ErrorEstimator::new(4).unwrap();
        let mid = midpoint::integrate(&cube, 3).unwrap();
        let trap = trapezoidal::integrate(&cube, 3).unwrap();
        let errors = estimator.estimate(&cube, mid, trap, 3).unwrap();

        // Exact value is 1/3 + 1/4; both rules improve on the finer grid.
        let exact = 1.0 / 3.0 + 0.25;
        assert!(errors.midpoint > 0.0 && errors.midpoint < (mid - exact).abs() * 1.01);
        assert!(errors.trapezoidal > 0.0);
    }
}
