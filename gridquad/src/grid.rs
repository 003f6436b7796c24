//! The uniform grid shared by the quadrature rules.

/// One axis of a uniform grid: `[lower, upper]` split into `n` equal intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// The lower bound of the axis.
    lower: f64,
    /// The width of every interval, `(upper - lower) / n`.
    step: f64,
}

impl Axis {
    /// Splits `[lower, upper]` into `n` intervals.
    ///
    /// `n` must be positive; callers validate it before building the grid.
    pub fn new(lower: f64, upper: f64, n: usize) -> Self {
        Axis {
            lower,
            step: (upper - lower) / n as f64,
        }
    }

    /// The width of every interval.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The `i`-th grid node, `lower + i * step`, for `i` in `0..=n`.
    #[inline]
    pub fn node(&self, i: usize) -> f64 {
        self.lower + i as f64 * self.step
    }

    /// The center of the `i`-th interval, `lower + (i + 0.5) * step`.
    #[inline]
    pub fn center(&self, i: usize) -> f64 {
        self.lower + (i as f64 + 0.5) * self.step
    }
}
