//! Periodic wave masked by a polygonal region.

use super::{DeformationField, blend_weight};
use crate::float_types::Real;
use crate::region::PolygonRegion;
use nalgebra::Point2;

/// A global periodic map confined to a polygon.
///
/// The displacement acts in absolute coordinates (not polar):
///
/// ```text
/// x' = sin_amp_x·sin(x)·cos(y) + linear_x·x
/// y' = sin_amp_y·cos(x)·sin(y) + linear_y·y
/// ```
///
/// The weight is 1 strictly inside `region`, falls off as a cosine of the
/// boundary distance over `band` outside, and is 0 beyond.
#[derive(Clone, Debug)]
pub struct BoundaryWave {
    pub region: PolygonRegion,
    pub band: Real,
    pub sin_amp_x: Real,
    pub linear_x: Real,
    pub sin_amp_y: Real,
    pub linear_y: Real,
}

impl BoundaryWave {
    pub fn new(region: PolygonRegion, band: Real) -> Self {
        Self {
            region,
            band,
            sin_amp_x: 0.3,
            linear_x: 1.1,
            sin_amp_y: 0.3,
            linear_y: 1.1,
        }
    }
}

impl DeformationField for BoundaryWave {
    fn displace(&self, p: Point2<Real>) -> Point2<Real> {
        Point2::new(
            self.sin_amp_x * p.x.sin() * p.y.cos() + self.linear_x * p.x,
            self.sin_amp_y * p.x.cos() * p.y.sin() + self.linear_y * p.y,
        )
    }

    fn weight(&self, p: Point2<Real>) -> Real {
        if self.region.contains(p) {
            1.0
        } else {
            blend_weight(self.region.boundary_distance(p), 0.0, self.band)
        }
    }
}
