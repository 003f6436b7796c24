//! `gridquad` approximates double and triple integrals over rectangles and
//! cuboids on a uniform grid.
//!
//! Two rules are implemented, the midpoint rule and the trapezoidal rule,
//! together with an error estimate obtained by re-running both rules on a
//! much finer grid.
//!
//! ```
//! use gridquad::region::Region2D;
//! use gridquad::{estimate_error, midpoint_integrate, trapezoidal_integrate};
//!
//! let region = Region2D::new((0.0, 1.0), (0.0, 1.0), |x: f64, y: f64| x * y);
//! let mid = midpoint_integrate(&region, 10)?;
//! let trap = trapezoidal_integrate(&region, 10)?;
//! let errors = estimate_error(&region, mid, trap, 10)?;
//! assert!(errors.midpoint < 1e-9 && errors.trapezoidal < 1e-9);
//! # Ok::<(), gridquad::QuadratureError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod estimate;
pub mod grid;
pub mod integrand;
pub mod midpoint;
pub mod region;
pub mod trapezoidal;

pub use error::{precision_from_signed, QuadratureError, Result};
pub use estimate::{estimate_error, ErrorEstimate, ErrorEstimator, DEFAULT_REFINEMENT};
pub use integrand::{Integrand2D, Integrand3D};
pub use midpoint::integrate as midpoint_integrate;
pub use region::{Domain, Region2D, Region3D};
pub use trapezoidal::integrate as trapezoidal_integrate;
