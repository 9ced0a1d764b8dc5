//! Polygonal regions used as deformation boundaries and blend-weight
//! reference curves.

use crate::errors::PatternError;
use crate::float_types::{EPSILON, Real, TAU};
use geo::{Contains, LineString, Polygon as GeoPolygon, point};
use nalgebra::Point2;

/// Euclidean distance from `p` to the segment `ab`.
///
/// A segment whose squared length is within [`EPSILON`] is treated as the
/// single point `a`, so the projection never divides by a vanishing
/// length.
pub fn point_segment_distance(p: Point2<Real>, a: Point2<Real>, b: Point2<Real>) -> Real {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= EPSILON {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).norm()
}

/// A closed region bounded by a simple polygon.
///
/// Used both as a point-in-polygon test and as the reference curve for
/// distance-based blend weights. The boundary is assumed
/// non-self-intersecting; this is not enforced.
#[derive(Clone, Debug)]
pub struct PolygonRegion {
    boundary: GeoPolygon<Real>,
}

impl PolygonRegion {
    /// Builds a region from an ordered list of `[x, y]` boundary vertices.
    /// The ring is closed automatically if the last vertex differs from
    /// the first. Fewer than 3 vertices is a precondition violation.
    pub fn new(points: &[[Real; 2]]) -> Result<Self, PatternError> {
        if points.len() < 3 {
            return Err(PatternError::TooFewVertices(points.len()));
        }
        let coords: Vec<(Real, Real)> = points.iter().map(|p| (p[0], p[1])).collect();
        // geo closes the exterior ring on construction
        let boundary = GeoPolygon::new(LineString::from(coords), vec![]);
        Ok(Self { boundary })
    }

    /// The classic parametric heart curve,
    /// `x = 16·sin³t`, `y = 13·cos t − 5·cos 2t − 2·cos 3t − cos 4t`,
    /// sampled at `samples` parameters over [0, 2π], scaled by `size` and
    /// translated to `center`.
    pub fn heart(center: Point2<Real>, size: Real, samples: usize) -> Result<Self, PatternError> {
        if samples < 3 {
            return Err(PatternError::TooFewVertices(samples));
        }
        let pts: Vec<[Real; 2]> = (0..samples)
            .map(|i| {
                let t = TAU * (i as Real) / ((samples - 1) as Real);
                let x = 16.0 * t.sin().powi(3);
                let y =
                    13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
                [size * x + center.x, size * y + center.y]
            })
            .collect();
        Self::new(&pts)
    }

    /// Strict interior test (boundary points are not contained).
    pub fn contains(&self, p: Point2<Real>) -> bool {
        self.boundary.contains(&point!(x: p.x, y: p.y))
    }

    /// Unsigned distance from `p` to the nearest boundary segment.
    pub fn boundary_distance(&self, p: Point2<Real>) -> Real {
        self.boundary
            .exterior()
            .lines()
            .map(|seg| {
                let a = Point2::new(seg.start.x, seg.start.y);
                let b = Point2::new(seg.end.x, seg.end.y);
                point_segment_distance(p, a, b)
            })
            .fold(Real::INFINITY, Real::min)
    }

    /// Boundary vertices, including the closing vertex.
    pub fn vertices(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.boundary
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
    }
}
