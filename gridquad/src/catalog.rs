//! Sample integrals with known closed-form values.
//!
//! These are used by the command-line tool, the integration tests and the
//! benchmarks. They are plain values; nothing here is global or mutable.

use std::f64::consts::PI;

use crate::region::{Region2D, Region3D};

/// A double integral with its closed-form value.
#[derive(Debug, Clone, Copy)]
pub struct SampleDouble {
    /// A human-readable form of the integrand.
    pub name: &'static str,
    pub region: Region2D<fn(f64, f64) -> f64>,
    /// The exact value of the integral.
    pub exact: f64,
}

/// A triple integral with its closed-form value.
#[derive(Debug, Clone, Copy)]
pub struct SampleTriple {
    /// A human-readable form of the integrand.
    pub name: &'static str,
    pub region: Region3D<fn(f64, f64, f64) -> f64>,
    /// The exact value of the integral.
    pub exact: f64,
}

fn hyperbolic_bowl(x: f64, y: f64) -> f64 {
    x * y * (1.0 + x.powi(2) + y.powi(2)).sqrt()
}

fn inverse_cube(x: f64, y: f64) -> f64 {
    1.0 / (x + y + 1.0).powi(3)
}

fn damped_sine(x: f64, y: f64) -> f64 {
    x * (x * y).sin()
}

fn polynomial(x: f64, y: f64) -> f64 {
    2.0 * x - 3.0 * y.powi(2)
}

fn chirp(x: f64, y: f64) -> f64 {
    x * (x.powi(2) + y).cos()
}

fn cosine_sum(x: f64, y: f64, z: f64) -> f64 {
    (x + y + z).cos()
}

/// Returns the double integrals, in a fixed order.
pub fn double_integrals() -> Vec<SampleDouble> {
    vec![
        SampleDouble {
            name: "x*y*sqrt(1 + x^2 + y^2) on [0,1]x[0,1]",
            region: Region2D::new((0.0, 1.0), (0.0, 1.0), hyperbolic_bowl),
            exact: 0.351_649_917_94,
        },
        SampleDouble {
            name: "1/(x + y + 1)^3 on [0,2]x[0,1]",
            region: Region2D::new((0.0, 2.0), (0.0, 1.0), inverse_cube),
            exact: 5.0 / 24.0,
        },
        SampleDouble {
            name: "x*sin(x*y) on [0,1]x[pi,2pi]",
            region: Region2D::new((0.0, 1.0), (PI, 2.0 * PI), damped_sine),
            exact: 0.0,
        },
        SampleDouble {
            name: "2x - 3y^2 on [-1,1]x[0,2]",
            region: Region2D::new((-1.0, 1.0), (0.0, 2.0), polynomial),
            exact: -16.0,
        },
        SampleDouble {
            name: "x*cos(x^2 + y) on [-sqrt(pi),0]x[0,pi]",
            region: Region2D::new((-PI.sqrt(), 0.0), (0.0, PI), chirp),
            exact: 2.0,
        },
    ]
}

/// Returns the triple integral.
pub fn triple_integral() -> SampleTriple {
    SampleTriple {
        name: "cos(x + y + z) on [0,pi]^3",
        region: Region3D::new((0.0, PI), (0.0, PI), (0.0, PI), cosine_sum),
        exact: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{midpoint_integrate, trapezoidal_integrate};

    #[test]
    fn test_catalog_shape() {
        let doubles = double_integrals();
        assert_eq!(doubles.len(), 5);
        assert_eq!(doubles[1].exact, 5.0 / 24.0);
        for sample in &doubles {
            let region = &sample.region;
            assert!(region.lower_x <= region.upper_x, "{}", sample.name);
            assert!(region.lower_y <= region.upper_y, "{}", sample.name);
        }
        assert_eq!(triple_integral().region.upper_z, PI);
    }

    #[test]
    fn test_doubles_converge() {
        for sample in double_integrals() {
            let mid = midpoint_integrate(&sample.region, 200).unwrap();
            let trap = trapezoidal_integrate(&sample.region, 200).unwrap();
            assert!(
                (mid - sample.exact).abs() < 1e-3,
                "{}: exact={} midpoint={}",
                sample.name,
                sample.exact,
                mid
            );
            assert!(
                (trap - sample.exact).abs() < 1e-3,
                "{}: exact={} trapezoidal={}",
                sample.name,
                sample.exact,
                trap
            );
        }
    }
}
