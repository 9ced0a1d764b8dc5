//! Weighted blending of deformation fields into a base point set.

use crate::deform::DeformationField;
use crate::errors::PatternError;
use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Blends `fields` into `base` by weighted linear superposition:
///
/// ```text
/// p_final = p + Σ_i w_i(p)·(displace_i(p) − p)
/// ```
///
/// Every field is evaluated on the *original* base point — fields never
/// compose sequentially. Where all weights are 0 the point passes through
/// exactly. Overlapping fields whose weights sum above 1 over-blend; no
/// renormalization is applied.
pub fn compose(base: &[Point2<Real>], fields: &[&dyn DeformationField]) -> Vec<Point2<Real>> {
    let blend_one = |p: &Point2<Real>| {
        let mut sum = Vector2::zeros();
        for field in fields {
            let w = field.weight(*p);
            if w > 0.0 {
                sum += (field.displace(*p) - *p) * w;
            }
        }
        *p + sum
    };

    #[cfg(feature = "parallel")]
    {
        base.par_iter().map(blend_one).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        base.iter().map(blend_one).collect()
    }
}

/// Uniform scale followed by translation: `p_out = s·p + (tx, ty)`.
pub fn scale_translate(
    points: &[Point2<Real>],
    s: Real,
    tx: Real,
    ty: Real,
) -> Vec<Point2<Real>> {
    let t = Vector2::new(tx, ty);
    points.iter().map(|p| *p * s + t).collect()
}

/// Post-pipeline invariant: every coordinate must be finite. Reports the
/// first offending point.
pub fn ensure_finite(points: &[Point2<Real>]) -> Result<(), PatternError> {
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(PatternError::NonFinite { index, x: p.x, y: p.y });
        }
    }
    Ok(())
}
