//! The C-language interface for `gridquad`

use std::ffi::c_void;
use std::os::raw::c_int;
use std::slice;

use gridquad::{
    midpoint_integrate, precision_from_signed, trapezoidal_integrate, Domain, ErrorEstimate,
    ErrorEstimator, Integrand2D, Integrand3D, QuadratureError, Region2D, Region3D,
};

/// The call succeeded.
pub const GRIDQUAD_OK: c_int = 0;
/// An argument was rejected, e.g. a precision that is not positive.
pub const GRIDQUAD_INVALID_ARGUMENT: c_int = -1;
/// A required pointer was null.
pub const GRIDQUAD_NULL_POINTER: c_int = -2;

/// A C-compatible struct for integration boundaries.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CBoundary {
    pub min: f64,
    pub max: f64,
}

/// The C-style integrand of two variables.
/// The first two arguments are the point, the third is the `user_data`
/// pointer passed to the integration routine.
pub type CIntegrand2D = extern "C" fn(f64, f64, *mut c_void) -> f64;

/// The C-style integrand of three variables.
pub type CIntegrand3D = extern "C" fn(f64, f64, f64, *mut c_void) -> f64;

/// A wrapper that implements the Rust `Integrand2D` trait.
struct CIntegrand2DWrapper {
    func: CIntegrand2D,
    user_data: *mut c_void,
}

impl Integrand2D for CIntegrand2DWrapper {
    fn eval(&self, x: f64, y: f64) -> f64 {
        (self.func)(x, y, self.user_data)
    }
}

/// A wrapper that implements the Rust `Integrand3D` trait.
struct CIntegrand3DWrapper {
    func: CIntegrand3D,
    user_data: *mut c_void,
}

impl Integrand3D for CIntegrand3DWrapper {
    fn eval(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.func)(x, y, z, self.user_data)
    }
}

fn status(err: &QuadratureError) -> c_int {
    match err {
        QuadratureError::InvalidArgument(_) => GRIDQUAD_INVALID_ARGUMENT,
    }
}

/// Writes `result` to `out` and returns the matching status code.
///
/// # Safety
///
/// `out` must be valid for writes.
unsafe fn store<T>(result: gridquad::Result<T>, out: *mut T) -> c_int {
    match result {
        Ok(value) => {
            *out = value;
            GRIDQUAD_OK
        }
        Err(err) => status(&err),
    }
}

/// Builds a rectangle from a pointer to two boundaries.
///
/// # Safety
///
/// `bounds` must be null or point to at least 2 `CBoundary`.
unsafe fn region_2d(
    bounds: *const CBoundary,
    func: CIntegrand2D,
    user_data: *mut c_void,
) -> Option<Region2D<CIntegrand2DWrapper>> {
    if bounds.is_null() {
        return None;
    }
    let b = slice::from_raw_parts(bounds, 2);
    Some(Region2D::new(
        (b[0].min, b[0].max),
        (b[1].min, b[1].max),
        CIntegrand2DWrapper { func, user_data },
    ))
}

/// Builds a cuboid from a pointer to three boundaries.
///
/// # Safety
///
/// `bounds` must be null or point to at least 3 `CBoundary`.
unsafe fn region_3d(
    bounds: *const CBoundary,
    func: CIntegrand3D,
    user_data: *mut c_void,
) -> Option<Region3D<CIntegrand3DWrapper>> {
    if bounds.is_null() {
        return None;
    }
    let b = slice::from_raw_parts(bounds, 3);
    Some(Region3D::new(
        (b[0].min, b[0].max),
        (b[1].min, b[1].max),
        (b[2].min, b[2].max),
        CIntegrand3DWrapper { func, user_data },
    ))
}

fn estimate<D: Domain>(
    region: &D,
    midpoint: f64,
    trapezoidal: f64,
    precision: c_int,
    refinement: c_int,
) -> gridquad::Result<ErrorEstimate> {
    let n = precision_from_signed(i64::from(precision))?;
    let refinement = precision_from_signed(i64::from(refinement)).map_err(|_| {
        QuadratureError::InvalidArgument(format!(
            "refinement factor must be a positive integer, got {refinement}"
        ))
    })?;
    ErrorEstimator::new(refinement)?.estimate(region, midpoint, trapezoidal, n)
}

/// Integrates a function of two variables with the midpoint rule.
///
/// Returns `GRIDQUAD_OK` and writes the estimate to `result`, or a negative
/// status code. Null pointers are rejected before the integrand is called.
///
/// # Safety
///
/// `bounds` must point to 2 `CBoundary` (x, then y) and `result` must be
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn gridquad_midpoint_2d(
    bounds: *const CBoundary,
    func: CIntegrand2D,
    user_data: *mut c_void,
    precision: c_int,
    result: *mut f64,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_2d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    let value = precision_from_signed(i64::from(precision))
        .and_then(|n| midpoint_integrate(&region, n));
    store(value, result)
}

/// Integrates a function of two variables with the trapezoidal rule.
///
/// # Safety
///
/// See [`gridquad_midpoint_2d`].
#[no_mangle]
pub unsafe extern "C" fn gridquad_trapezoidal_2d(
    bounds: *const CBoundary,
    func: CIntegrand2D,
    user_data: *mut c_void,
    precision: c_int,
    result: *mut f64,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_2d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    let value = precision_from_signed(i64::from(precision))
        .and_then(|n| trapezoidal_integrate(&region, n));
    store(value, result)
}

/// Integrates a function of three variables with the midpoint rule.
///
/// # Safety
///
/// `bounds` must point to 3 `CBoundary` (x, y, then z) and `result` must be
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn gridquad_midpoint_3d(
    bounds: *const CBoundary,
    func: CIntegrand3D,
    user_data: *mut c_void,
    precision: c_int,
    result: *mut f64,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_3d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    let value = precision_from_signed(i64::from(precision))
        .and_then(|n| midpoint_integrate(&region, n));
    store(value, result)
}

/// Integrates a function of three variables with the six-vertex trapezoidal rule.
///
/// # Safety
///
/// See [`gridquad_midpoint_3d`].
#[no_mangle]
pub unsafe extern "C" fn gridquad_trapezoidal_3d(
    bounds: *const CBoundary,
    func: CIntegrand3D,
    user_data: *mut c_void,
    precision: c_int,
    result: *mut f64,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_3d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    let value = precision_from_signed(i64::from(precision))
        .and_then(|n| trapezoidal_integrate(&region, n));
    store(value, result)
}

/// Estimates the errors of a midpoint and a trapezoidal result computed with
/// `precision` subdivisions, by recomputing both on a grid `refinement`
/// times finer.
///
/// # Safety
///
/// `bounds` must point to 2 `CBoundary` and `result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn gridquad_estimate_error_2d(
    bounds: *const CBoundary,
    func: CIntegrand2D,
    user_data: *mut c_void,
    midpoint: f64,
    trapezoidal: f64,
    precision: c_int,
    refinement: c_int,
    result: *mut ErrorEstimate,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_2d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    store(
        estimate(&region, midpoint, trapezoidal, precision, refinement),
        result,
    )
}

/// The three-variable counterpart of [`gridquad_estimate_error_2d`].
///
/// # Safety
///
/// `bounds` must point to 3 `CBoundary` and `result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn gridquad_estimate_error_3d(
    bounds: *const CBoundary,
    func: CIntegrand3D,
    user_data: *mut c_void,
    midpoint: f64,
    trapezoidal: f64,
    precision: c_int,
    refinement: c_int,
    result: *mut ErrorEstimate,
) -> c_int {
    if result.is_null() {
        return GRIDQUAD_NULL_POINTER;
    }
    let Some(region) = region_3d(bounds, func, user_data) else {
        return GRIDQUAD_NULL_POINTER;
    };
    store(
        estimate(&region, midpoint, trapezoidal, precision, refinement),
        result,
    )
}
