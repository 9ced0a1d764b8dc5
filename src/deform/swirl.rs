//! Radial swirl with a flower-shaped inner boundary.

use super::{DeformationField, blend_weight, from_polar, to_polar};
use crate::float_types::Real;
use nalgebra::Point2;

/// Swirl deformation in local polar coordinates around `center`.
///
/// The full-effect boundary is the lobed flower curve
/// `r1(θ) = inner_base + petal_amp·(0.5 + 0.5·cos(lobes·θ))`, with the
/// no-effect boundary at `r2 = r1 + band`. With blend weight `w`, a point
/// at local polar `(r, θ)` maps to
///
/// ```text
/// r' = r·(1 + radial_gain·w·e^(−radial_decay·r))
/// θ' = θ + angular_gain·w·e^(−angular_decay·r)
/// ```
///
/// The exponential factors decay with radius, so the twist is strong near
/// the center and negligible far out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swirl {
    pub center: Point2<Real>,
    pub lobes: u32,
    pub inner_base: Real,
    pub petal_amp: Real,
    pub band: Real,
    pub radial_gain: Real,
    pub radial_decay: Real,
    pub angular_gain: Real,
    pub angular_decay: Real,
}

impl Default for Swirl {
    fn default() -> Self {
        Self {
            center: Point2::new(0.0, 25.0),
            lobes: 6,
            inner_base: 4.0,
            petal_amp: 4.0,
            band: 20.0,
            radial_gain: 0.8,
            radial_decay: 0.12,
            angular_gain: 1.2,
            angular_decay: 0.4,
        }
    }
}

impl Swirl {
    pub fn new(center: Point2<Real>) -> Self {
        Self { center, ..Self::default() }
    }

    fn inner_radius(&self, theta: Real) -> Real {
        let petal = 0.5 + 0.5 * (self.lobes as Real * theta).cos();
        self.inner_base + self.petal_amp * petal
    }
}

impl DeformationField for Swirl {
    fn displace(&self, p: Point2<Real>) -> Point2<Real> {
        let (r, theta) = to_polar(p, self.center);
        let w = self.weight(p);
        let r_prime = r * (1.0 + self.radial_gain * w * (-self.radial_decay * r).exp());
        let theta_prime = theta + self.angular_gain * w * (-self.angular_decay * r).exp();
        from_polar(r_prime, theta_prime, self.center)
    }

    fn weight(&self, p: Point2<Real>) -> Real {
        let (r, theta) = to_polar(p, self.center);
        let r1 = self.inner_radius(theta);
        blend_weight(r, r1, r1 + self.band)
    }
}
