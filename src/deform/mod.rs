//! Localized deformation fields and their blend weights.
//!
//! A deformation field is a spatial map `(x, y) -> (x', y')` together with
//! a per-point blend weight in `[0, 1]` that confines the effect to a
//! region: 1 strictly inside the region, 0 strictly outside, and a smooth
//! cosine transition across the band in between. Fields are evaluated
//! independently on the *base* points and mixed by the
//! [compositor](crate::compose); they never see each other's output.

use crate::float_types::{PI, Real};
use nalgebra::Point2;

mod angular;
mod periodic;
mod radial;
mod swirl;
mod wave;

pub use angular::AngularRipple;
pub use periodic::Periodic;
pub use radial::RadialRipple;
pub use swirl::Swirl;
pub use wave::BoundaryWave;

/// One localized deformation effect.
///
/// `Sync` is a supertrait so fields can be evaluated across points in
/// parallel; evaluation is read-only.
pub trait DeformationField: Sync {
    /// The raw displaced position of `p`, before any blending by the
    /// compositor.
    fn displace(&self, p: Point2<Real>) -> Point2<Real>;

    /// Blend weight at `p`, in `[0, 1]`.
    fn weight(&self, p: Point2<Real>) -> Real;
}

/// Piecewise cosine smoothstep over the transition band `[inner, outer]`.
///
/// Returns 1 for `d <= inner`, 0 for `d >= outer`, and
/// `0.5·(1 + cos(π·(d−inner)/(outer−inner)))` in between. The cosine has
/// zero derivative at both ends, so blending is C¹-continuous across the
/// band boundaries. A degenerate band (`outer <= inner`) collapses to a
/// step at `inner`.
pub fn blend_weight(d: Real, inner: Real, outer: Real) -> Real {
    if d <= inner {
        1.0
    } else if d >= outer {
        0.0
    } else {
        0.5 * (1.0 + (PI * (d - inner) / (outer - inner)).cos())
    }
}

/// Local polar coordinates of `p` around `center`: `(r, θ)` with
/// `θ ∈ (−π, π]`.
pub(crate) fn to_polar(p: Point2<Real>, center: Point2<Real>) -> (Real, Real) {
    let v = p - center;
    (v.norm(), v.y.atan2(v.x))
}

pub(crate) fn from_polar(r: Real, theta: Real, center: Point2<Real>) -> Point2<Real> {
    Point2::new(r * theta.cos() + center.x, r * theta.sin() + center.y)
}
