//! k-fold angular ripple bounded by a regular polygon.

use super::{DeformationField, blend_weight, from_polar, to_polar};
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

/// Multiplicative radial perturbation with k-fold angular symmetry.
///
/// The full-effect boundary is a regular `sides`-gon of circumradius
/// `circumradius`, via the implicit radius function
/// `R(θ) = circumradius / cos(|θ mod s − s/2|)` with sector `s = 2π/sides`,
/// scaled by `inner_scale`. Radius is perturbed by
/// `r' = r·(1 + w·amplitude·cos(sides·θ))`; the angle is unchanged, so the
/// ripple lobes line up with the polygon corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularRipple {
    pub center: Point2<Real>,
    pub sides: u32,
    pub circumradius: Real,
    pub inner_scale: Real,
    pub band: Real,
    pub amplitude: Real,
}

impl Default for AngularRipple {
    fn default() -> Self {
        Self {
            center: Point2::new(-30.0, 7.5),
            sides: 6,
            circumradius: 12.0,
            inner_scale: 0.6,
            band: 12.0,
            amplitude: 0.15,
        }
    }
}

impl AngularRipple {
    pub fn new(center: Point2<Real>) -> Self {
        Self { center, ..Self::default() }
    }

    fn inner_radius(&self, theta: Real) -> Real {
        let sector = TAU / self.sides as Real;
        let angle = (theta.rem_euclid(sector) - sector / 2.0).abs();
        self.circumradius / angle.cos() * self.inner_scale
    }
}

impl DeformationField for AngularRipple {
    fn displace(&self, p: Point2<Real>) -> Point2<Real> {
        let (r, theta) = to_polar(p, self.center);
        let w = self.weight(p);
        let r_prime = r * (1.0 + w * self.amplitude * (self.sides as Real * theta).cos());
        from_polar(r_prime, theta, self.center)
    }

    fn weight(&self, p: Point2<Real>) -> Real {
        let (r, theta) = to_polar(p, self.center);
        let r1 = self.inner_radius(theta);
        blend_weight(r, r1, r1 + self.band)
    }
}
