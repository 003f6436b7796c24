//! Integration regions: a rectangle or a cuboid together with its integrand.

use crate::grid::Axis;
use crate::integrand::{Integrand2D, Integrand3D};

/// A double integral over the rectangle `[lower_x, upper_x] x [lower_y, upper_y]`.
///
/// Bounds are expected to satisfy `lower <= upper` on each axis. Degenerate
/// rectangles are accepted and integrate to zero.
#[derive(Debug, Clone, Copy)]
pub struct Region2D<F> {
    pub lower_x: f64,
    pub upper_x: f64,
    pub lower_y: f64,
    pub upper_y: f64,
    /// The function to integrate.
    pub integrand: F,
}

/// A triple integral over the cuboid
/// `[lower_x, upper_x] x [lower_y, upper_y] x [lower_z, upper_z]`.
#[derive(Debug, Clone, Copy)]
pub struct Region3D<F> {
    pub lower_x: f64,
    pub upper_x: f64,
    pub lower_y: f64,
    pub upper_y: f64,
    pub lower_z: f64,
    pub upper_z: f64,
    /// The function to integrate.
    pub integrand: F,
}

impl<F: Integrand2D> Region2D<F> {
    /// Creates a rectangle from `(min, max)` tuples for each axis.
    pub fn new(x: (f64, f64), y: (f64, f64), integrand: F) -> Self {
        Region2D {
            lower_x: x.0,
            upper_x: x.1,
            lower_y: y.0,
            upper_y: y.1,
            integrand,
        }
    }

    /// The grid axes for `n` subdivisions per axis.
    pub(crate) fn axes(&self, n: usize) -> (Axis, Axis) {
        (
            Axis::new(self.lower_x, self.upper_x, n),
            Axis::new(self.lower_y, self.upper_y, n),
        )
    }
}

impl<F: Integrand3D> Region3D<F> {
    /// Creates a cuboid from `(min, max)` tuples for each axis.
    pub fn new(x: (f64, f64), y: (f64, f64), z: (f64, f64), integrand: F) -> Self {
        Region3D {
            lower_x: x.0,
            upper_x: x.1,
            lower_y: y.0,
            upper_y: y.1,
            lower_z: z.0,
            upper_z: z.1,
            integrand,
        }
    }

    /// The grid axes for `n` subdivisions per axis.
    pub(crate) fn axes(&self, n: usize) -> (Axis, Axis, Axis) {
        (
            Axis::new(self.lower_x, self.upper_x, n),
            Axis::new(self.lower_y, self.upper_y, n),
            Axis::new(self.lower_z, self.upper_z, n),
        )
    }
}

/// A region the midpoint and trapezoidal rules can be applied to.
///
/// This is what lets [`crate::midpoint_integrate`], [`crate::trapezoidal_integrate`]
/// and the error estimator accept both rectangles and cuboids. The methods
/// assume `n > 0`; the public entry points check it first.
pub trait Domain {
    /// The number of axes of the region.
    const DIM: u32;

    /// The area of a rectangle or the volume of a cuboid.
    fn volume(&self) -> f64;

    /// The midpoint rule on `n` subdivisions per axis.
    fn midpoint_sum(&self, n: usize) -> f64;

    /// The trapezoidal rule on `n` subdivisions per axis.
    fn trapezoidal_sum(&self, n: usize) -> f64;
}

impl<F: Integrand2D> Domain for Region2D<F> {
    const DIM: u32 = 2;

    fn volume(&self) -> f64 {
        (self.upper_x - self.lower_x) * (self.upper_y - self.lower_y)
    }

    fn midpoint_sum(&self, n: usize) -> f64 {
        crate::midpoint::sum_2d(self, n)
    }

    fn trapezoidal_sum(&self, n: usize) -> f64 {
        crate::trapezoidal::sum_2d(self, n)
    }
}

impl<F: Integrand3D> Domain for Region3D<F> {
    const DIM: u32 = 3;

    fn volume(&self) -> f64 {
        (self.upper_x - self.lower_x)
            * (self.upper_y - self.lower_y)
            * (self.upper_z - self.lower_z)
    }

    fn midpoint_sum(&self, n: usize) -> f64 {
        crate::midpoint::sum_3d(self, n)
    }

    fn trapezoidal_sum(&self, n: usize) -> f64 {
        crate::trapezoidal::sum_3d(self, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let rect = Region2D::new((0.0, 2.0), (-1.0, 1.0), |x: f64, y: f64| x + y);
        assert_eq!(rect.lower_x, 0.0);
        assert_eq!(rect.upper_y, 1.0);
        assert_eq!(rect.volume(), 4.0);
        assert_eq!(<Region2D<fn(f64, f64) -> f64> as Domain>::DIM, 2);

        let one = |_: f64, _: f64, _: f64| 1.0;
        let cube = Region3D::new((0.0, 1.0), (0.0, 2.0), (0.0, 3.0), one);
        assert_eq!(cube.volume(), 6.0);
        let (ax, ay, az) = cube.axes(3);
        assert_eq!(ax.step(), 1.0 / 3.0);
        assert_eq!(ay.step(), 2.0 / 3.0);
        assert_eq!(az.step(), 1.0);

        let flat = Region3D::new((0.0, 1.0), (2.0, 2.0), (0.0, 3.0), one);
        assert_eq!(flat.volume(), 0.0);
    }
}
