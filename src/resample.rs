//! Adaptive path-density control: densification and decimation of an
//! ordered point sequence.
//!
//! Both operations walk the sequence once and are inherently sequential —
//! each decision depends on the previous kept point — so neither may be
//! parallelized without changing semantics.

use crate::errors::PatternError;
use crate::float_types::Real;
use nalgebra::Point2;

/// Lazily yields `points` with `⌊d/max_dis⌋` evenly spaced interior points
/// inserted into every gap of length `d > max_dis`. All original points
/// are preserved in order; the inserted points are linear interpolations
/// with the endpoints excluded.
///
/// The caller is responsible for `points` being non-empty and `max_dis`
/// positive; [`densify`] checks both.
pub fn densified(
    points: &[Point2<Real>],
    max_dis: Real,
) -> impl Iterator<Item = Point2<Real>> + '_ {
    points.first().copied().into_iter().chain(points.windows(2).flat_map(move |pair| {
        let (p1, p2) = (pair[0], pair[1]);
        let d = (p2 - p1).norm();
        let n = if d > max_dis { (d / max_dis).floor() as usize } else { 0 };
        (1..=n)
            .map(move |j| p1 + (p2 - p1) * (j as Real / (n + 1) as Real))
            .chain(core::iter::once(p2))
    }))
}

/// Collects [`densified`], so no gap in the result exceeds `max_dis` (up
/// to floating rounding at the last sub-segment).
pub fn densify(
    points: &[Point2<Real>],
    max_dis: Real,
) -> Result<Vec<Point2<Real>>, PatternError> {
    if points.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    if max_dis <= 0.0 {
        return Err(PatternError::NonPositiveSpacing(max_dis));
    }
    Ok(densified(points, max_dis).collect())
}

/// Greedy single-pass decimation: the first point is always kept, and a
/// candidate survives only if its distance to the last *kept* point is at
/// least `min_distance`.
///
/// The filter is order-dependent by design — when three or more points
/// cluster within `min_distance` of each other, which ones survive depends
/// on traversal direction. This is the intended simple one-pass behavior,
/// not a globally optimal thinning.
pub fn decimate(
    points: &[Point2<Real>],
    min_distance: Real,
) -> Result<Vec<Point2<Real>>, PatternError> {
    if points.is_empty() {
        return Err(PatternError::EmptySequence);
    }
    if min_distance <= 0.0 {
        return Err(PatternError::NonPositiveSpacing(min_distance));
    }
    let mut kept = vec![points[0]];
    for &candidate in &points[1..] {
        let last = kept[kept.len() - 1];
        if (candidate - last).norm() >= min_distance {
            kept.push(candidate);
        }
    }
    Ok(kept)
}
