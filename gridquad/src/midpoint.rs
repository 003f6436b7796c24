//! The midpoint rule on a uniform grid.
//!
//! Every cell contributes the integrand at its center times the cell volume.
//! Cells are visited with `x` outermost and `z` innermost, and contributions
//! are added to a single running sum in that order, so results are
//! reproducible bit for bit.

use crate::error::{check_precision, Result};
use crate::integrand::{Integrand2D, Integrand3D};
use crate::region::{Domain, Region2D, Region3D};

/// Approximates the integral over `region` with the midpoint rule on `n`
/// subdivisions per axis.
///
/// Costs `n^2` integrand evaluations for a [`Region2D`] and `n^3` for a
/// [`Region3D`].
///
/// # Errors
///
/// Returns [`crate::QuadratureError::InvalidArgument`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use gridquad::midpoint;
/// use gridquad::region::Region2D;
///
/// let f = |x: f64, y: f64| 1.0 / (x + y + 1.0).powi(3);
/// let region = Region2D::new((0.0, 2.0), (0.0, 1.0), f);
/// let value = midpoint::integrate(&region, 100).unwrap();
/// assert!((value - 5.0 / 24.0).abs() < 1e-3);
/// ```
pub fn integrate<D: Domain>(region: &D, n: usize) -> Result<f64> {
    check_precision(n)?;
    Ok(region.midpoint_sum(n))
}

pub(crate) fn sum_2d<F: Integrand2D>(region: &Region2D<F>, n: usize) -> f64 {
    let (ax, ay) = region.axes(n);
    let (dx, dy) = (ax.step(), ay.step());

    let mut estimate = 0.0;
    for i in 0..n {
        let x = ax.center(i);
        for j in 0..n {
            let y = ay.center(j);
            estimate += region.integrand.eval(x, y) * dx * dy;
        }
    }
    estimate
}

pub(crate) fn sum_3d<F: Integrand3D>(region: &Region3D<F>, n: usize) -> f64 {
    let (ax, ay, az) = region.axes(n);
    let (dx, dy, dz) = (ax.step(), ay.step(), az.step());

    let mut estimate = 0.0;
    for i in 0..n {
        let x = ax.center(i);
        for j in 0..n {
            let y = ay.center(j);
            for l in 0..n {
                let z = az.center(l);
                estimate += dx * dy * dz * region.integrand.eval(x, y, z);
            }
        }
    }
    estimate
}
