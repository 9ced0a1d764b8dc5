//! Test support library
//! Provides various helper functions & utilities for tests.

use nalgebra::Point2;
use patterngen::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
#[allow(dead_code)]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Componentwise point comparison with tolerance.
#[allow(dead_code)]
pub fn approx_point(a: Point2<Real>, b: Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}
