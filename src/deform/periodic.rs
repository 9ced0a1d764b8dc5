//! Unmasked global periodic maps.

use super::DeformationField;
use crate::float_types::Real;
use nalgebra::Point2;

/// A raw periodic map applied everywhere — weight is identically 1, so a
/// single-field composite reproduces the map exactly. Applied to a
/// connected lattice path this turns the straight zig-zag into a
/// continuous periodic pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Periodic {
    /// `x' = sin_amp·sin(x) + linear·x + cross·y` and symmetrically in y.
    AxisCoupled { sin_amp: Real, linear: Real, cross: Real },
    /// `x' = amp·sin(x)·sin(y) + linear·x`, `y' = amp·cos(x)·cos(y) + linear·y`.
    Product { amp: Real, linear: Real },
}

impl Periodic {
    /// The default sine-plus-shear coupling.
    pub const fn axis_coupled() -> Self {
        Self::AxisCoupled { sin_amp: 1.0, linear: 2.0, cross: 0.5 }
    }

    /// The alternate separable product map.
    pub const fn product() -> Self {
        Self::Product { amp: 1.0, linear: 2.0 }
    }
}

impl DeformationField for Periodic {
    fn displace(&self, p: Point2<Real>) -> Point2<Real> {
        match *self {
            Self::AxisCoupled { sin_amp, linear, cross } => Point2::new(
                sin_amp * p.x.sin() + linear * p.x + cross * p.y,
                sin_amp * p.y.sin() + linear * p.y + cross * p.x,
            ),
            Self::Product { amp, linear } => Point2::new(
                amp * p.x.sin() * p.y.sin() + linear * p.x,
                amp * p.x.cos() * p.y.cos() + linear * p.y,
            ),
        }
    }

    fn weight(&self, _p: Point2<Real>) -> Real {
        1.0
    }
}
