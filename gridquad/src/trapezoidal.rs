//! The trapezoidal rule on a uniform grid.
//!
//! Every cell contributes the average of the integrand over a fixed set of its
//! corners times the cell volume. Cells are visited and summed in the same
//! order as the midpoint rule.
//!
//! In three dimensions [`integrate`] averages six of the eight corners of each
//! cell:
//!
//! ```text
//! (x0,y0,z0) (x0,y1,z0) (x0,y1,z1) (x1,y0,z0) (x1,y1,z0) (x1,y1,z1)
//! ```
//!
//! This is not the textbook tensor-product rule. It converges for smooth
//! integrands but is biased along `y` and `z` at coarse resolutions. The
//! error estimator uses it too. [`integrate_eight_corner`] is the standard
//! all-corner rule.

use crate::error::{check_precision, Result};
use crate::integrand::{Integrand2D, Integrand3D};
use crate::region::{Domain, Region2D, Region3D};

/// Approximates the integral over `region` with the trapezoidal rule on `n`
/// subdivisions per axis.
///
/// # Errors
///
/// Returns [`crate::QuadratureError::InvalidArgument`] if `n` is zero.
pub fn integrate<D: Domain>(region: &D, n: usize) -> Result<f64> {
    check_precision(n)?;
    Ok(region.trapezoidal_sum(n))
}

/// Approximates a triple integral with the standard trapezoidal rule, which
/// averages all eight corners of every cell.
///
/// This is exact for integrands that are linear in each variable. It is not
/// used by [`integrate`] or by the error estimator.
///
/// # Errors
///
/// Returns [`crate::QuadratureError::InvalidArgument`] if `n` is zero.
pub fn integrate_eight_corner<F: Integrand3D>(region: &Region3D<F>, n: usize) -> Result<f64> {
    check_precision(n)?;

    let (ax, ay, az) = region.axes(n);
    let (dx, dy, dz) = (ax.step(), ay.step(), az.step());
    let f = &region.integrand;

    let mut estimate = 0.0;
    for i in 0..n {
        let (x0, x1) = (ax.node(i), ax.node(i + 1));
        for j in 0..n {
            let (y0, y1) = (ay.node(j), ay.node(j + 1));
            for l in 0..n {
                let (z0, z1) = (az.node(l), az.node(l + 1));

                let mut av = f.eval(x0, y0, z0);
                av += f.eval(x0, y0, z1);
                av += f.eval(x0, y1, z0);
                av += f.eval(x0, y1, z1);
                av += f.eval(x1, y0, z0);
                av += f.eval(x1, y0, z1);
                av += f.eval(x1, y1, z0);
                av += f.eval(x1, y1, z1);
                av /= 8.0;

                estimate += dx * dy * dz * av;
            }
        }
    }
    Ok(estimate)
}

pub(crate) fn sum_2d<F: Integrand2D>(region: &Region2D<F>, n: usize) -> f64 {
    let (ax, ay) = region.axes(n);
    let (dx, dy) = (ax.step(), ay.step());
    let f = &region.integrand;

    let mut estimate = 0.0;
    for i in 0..n {
        let (x1, x2) = (ax.node(i), ax.node(i + 1));
        for j in 0..n {
            let (y1, y2) = (ay.node(j), ay.node(j + 1));

            let mut height = f.eval(x1, y1);
            height += f.eval(x1, y2);
            height += f.eval(x2, y2);
            height += f.eval(x2, y1);
            height /= 4.0;

            estimate += height * dx * dy;
        }
    }
    estimate
}

pub(crate) fn sum_3d<F: Integrand3D>(region: &Region3D<F>, n: usize) -> f64 {
    let (ax, ay, az) = region.axes(n);
    let (dx, dy, dz) = (ax.step(), ay.step(), az.step());
    let f = &region.integrand;

    let mut estimate = 0.0;
    for i in 0..n {
        let (x0, x1) = (ax.node(i), ax.node(i + 1));
        for j in 0..n {
            let (y0, y1) = (ay.node(j), ay.node(j + 1));
            for l in 0..n {
                let (z0, z1) = (az.node(l), az.node(l + 1));

                let mut av = f.eval(x0, y0, z0);
                av += f.eval(x0, y1, z0);
                av += f.eval(x0, y1, z1);
                av += f.eval(x1, y0, z0);
                av += f.eval(x1, y1, z0);
                av += f.eval(x1, y1, z1);
                av /= 6.0;

                estimate += dx * dy * dz * av;
            }
        }
    }
    estimate
}
