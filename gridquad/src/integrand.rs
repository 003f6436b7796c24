//! The `Integrand2D` and `Integrand3D` traits, which define the function to be integrated.

/// A function of two variables to be integrated over a rectangle.
///
/// Every `Fn(f64, f64) -> f64` implements this trait, so closures and plain
/// function pointers can be used directly. Implement it by hand for
/// integrands that carry foreign state, such as a C callback.
pub trait Integrand2D {
    /// Evaluates the function at the point `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

/// A function of three variables to be integrated over a cuboid.
///
/// Every `Fn(f64, f64, f64) -> f64` implements this trait.
pub trait Integrand3D {
    /// Evaluates the function at the point `(x, y, z)`.
    fn eval(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F> Integrand2D for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

impl<F> Integrand3D for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Saddle {
        scale: f64,
    }

    impl Integrand2D for Saddle {
        fn eval(&self, x: f64, y: f64) -> f64 {
            self.scale * (x * x - y * y)
        }
    }

    fn sum3(x: f64, y: f64, z: f64) -> f64 {
        x + y + z
    }

    #[test]
    fn test_closures_and_structs() {
        let offset = 1.5;
        let shifted = move |x: f64, y: f64| x * y + offset;
        assert_eq!(shifted.eval(2.0, 3.0), 7.5);

        let saddle = Saddle { scale: 2.0 };
        assert_eq!(saddle.eval(3.0, 1.0), 16.0);

        let f: fn(f64, f64, f64) -> f64 = sum3;
        assert_eq!(f.eval(1.0, 2.0, 3.0), 6.0);
    }
}
