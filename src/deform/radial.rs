//! Concentric radial ripple bounded by a flower curve.

use super::{DeformationField, blend_weight, from_polar, to_polar};
use crate::float_types::Real;
use nalgebra::Point2;

/// Multiplicative radial perturbation whose frequency is in *radius*.
///
/// The full-effect boundary is the flower curve
/// `base_radius·(1 + lobe_amp·cos(lobes·θ))` scaled by `inner_scale`.
/// Radius is perturbed by `r' = r·(1 + w·amplitude·cos(frequency·r))` —
/// unlike [`AngularRipple`](super::AngularRipple) the cosine argument is
/// `r`, producing concentric rings rather than angular lobes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialRipple {
    pub center: Point2<Real>,
    pub lobes: u32,
    pub base_radius: Real,
    pub lobe_amp: Real,
    pub inner_scale: Real,
    pub band: Real,
    pub amplitude: Real,
    pub frequency: Real,
}

impl Default for RadialRipple {
    fn default() -> Self {
        Self {
            center: Point2::new(30.0, 7.5),
            lobes: 6,
            base_radius: 15.0,
            lobe_amp: 0.4,
            inner_scale: 0.5,
            band: 10.0,
            amplitude: 0.015,
            frequency: 3.0,
        }
    }
}

impl RadialRipple {
    pub fn new(center: Point2<Real>) -> Self {
        Self { center, ..Self::default() }
    }

    fn inner_radius(&self, theta: Real) -> Real {
        let flower = self.base_radius * (1.0 + self.lobe_amp * (self.lobes as Real * theta).cos());
        flower * self.inner_scale
    }
}

impl DeformationField for RadialRipple {
    fn displace(&self, p: Point2<Real>) -> Point2<Real> {
        let (r, theta) = to_polar(p, self.center);
        let w = self.weight(p);
        let r_prime = r * (1.0 + w * self.amplitude * (self.frequency * r).cos());
        from_polar(r_prime, theta, self.center)
    }

    fn weight(&self, p: Point2<Real>) -> Real {
        let (r, theta) = to_polar(p, self.center);
        let r1 = self.inner_radius(theta);
        blend_weight(r, r1, r1 + self.band)
    }
}
