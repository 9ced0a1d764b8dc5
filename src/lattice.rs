//! Base point-set generators: the primary/secondary intersecting-line
//! lattice and the regular axis-aligned sampling grid.

use crate::errors::PatternError;
use crate::float_types::{EPSILON, Real};
use nalgebra::{Point2, Rotation2, Vector2};

/// Configuration for the intersecting-line lattice.
///
/// The lattice traces two interleaved families of connected segments: a
/// "primary" zig-zag swept along one axis and, optionally, a "secondary"
/// zig-zag swept along the perpendicular, skewed by `theta`. The result
/// is one connected toolpath covering the grid.
///
/// - `primary_sf` is the spacing between primary-direction segments.
/// - `secondary_sf` is the spacing between adjacent intersections along a
///   primary segment.
/// - `theta` is the skew between the secondary direction and the
///   perpendicular of the primary direction (radians). Must not be an odd
///   multiple of π/2.
/// - `side_offset` extends the segments beyond the grid on both sides.
/// - `grid_number` is the grid count along each direction.
/// - `centralized` recenters the pattern on the origin; otherwise it
///   starts near (0, 0).
/// - `rotation_angle` rigidly rotates the finished pattern (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeConfig {
    pub primary_sf: Real,
    pub secondary_sf: Real,
    pub theta: Real,
    pub grid_number: usize,
    pub side_offset: Real,
    pub secondary: bool,
    pub centralized: bool,
    pub rotation_angle: Real,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            primary_sf: 1.0,
            secondary_sf: 1.0,
            theta: 0.0,
            grid_number: 4,
            side_offset: 2.0,
            secondary: true,
            centralized: false,
            rotation_angle: 0.0,
        }
    }
}

impl LatticeConfig {
    /// Generates the lattice as one ordered, connected point sequence.
    ///
    /// Pure function of the config: identical input produces bit-identical
    /// output. Returns [`PatternError::DegenerateSkew`] when `cos θ`
    /// vanishes (tan θ diverges).
    pub fn generate(&self) -> Result<Vec<Point2<Real>>, PatternError> {
        if self.theta.cos().abs() <= EPSILON {
            return Err(PatternError::DegenerateSkew(self.theta));
        }
        let tan_t = self.theta.tan();
        let span = self.grid_number as Real * self.secondary_sf + 2.0 * self.side_offset;
        let half = self.grid_number / 2;

        // Seed vertex; removed with the end artifacts below.
        let mut pts: Vec<Point2<Real>> = vec![Point2::origin()];

        // Primary-direction teeth.
        for i in 0..=half {
            let x1 = 2.0 * i as Real * self.primary_sf * tan_t;
            let y1 = 2.0 * i as Real * self.primary_sf;
            let x2 = x1 + span;
            let x3 = x2 + self.primary_sf * tan_t;
            let y3 = y1 + self.primary_sf;
            let x4 = x3 - span;
            pts.push(Point2::new(x1, y1));
            pts.push(Point2::new(x2, y1));
            pts.push(Point2::new(x3, y3));
            pts.push(Point2::new(x4, y3));
        }
        // Open the path so the secondary pass continues from it.
        pts.truncate(pts.len() - 2);
        let last = pts[pts.len() - 1];
        let (x0, y0) = (last.x, last.y);

        // Secondary-direction teeth, swept back across the span.
        if self.secondary {
            for j in 0..=half {
                let x1 = x0 - self.side_offset * (1.0 - self.theta.sin())
                    - 2.0 * j as Real * self.secondary_sf;
                let y1 = y0 + self.side_offset * self.theta.cos();
                let y2 = -self.side_offset * self.theta.cos();
                let x2 = x1 - (y1 - y2) * tan_t;
                let x3 = x2 - self.secondary_sf;
                let x4 = x1 - self.secondary_sf;
                pts.push(Point2::new(x1, y1));
                pts.push(Point2::new(x2, y2));
                pts.push(Point2::new(x3, y2));
                pts.push(Point2::new(x4, y1));
            }
        }

        // Seed vertex and trailing construction artifacts.
        pts.truncate(pts.len() - 2);
        pts.remove(0);

        if self.centralized {
            // Real-valued half count here, floor only in the loop bounds.
            let half_n = self.grid_number as Real / 2.0;
            let center = Vector2::new(
                self.side_offset + half_n * self.primary_sf * tan_t + half_n * self.secondary_sf,
                half_n * self.primary_sf,
            );
            for p in &mut pts {
                *p -= center;
            }
        }

        if self.rotation_angle != 0.0 {
            let rot = Rotation2::new(self.rotation_angle);
            for p in &mut pts {
                *p = rot * *p;
            }
        }
        Ok(pts)
    }
}

/// Configuration for a regular axis-aligned sampling grid.
///
/// Samples are laid out row-major with x varying fastest, endpoints
/// inclusive on both axes; a single sample along an axis sits at the
/// lower bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub nx: usize,
    pub ny: usize,
    pub x_min: Real,
    pub x_max: Real,
    pub y_min: Real,
    pub y_max: Real,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            nx: 300,
            ny: 300,
            x_min: -50.0,
            x_max: 50.0,
            y_min: -35.0,
            y_max: 50.0,
        }
    }
}

fn linspace(min: Real, max: Real, n: usize) -> impl Iterator<Item = Real> {
    let step = if n > 1 { (max - min) / (n - 1) as Real } else { 0.0 };
    (0..n).map(move |i| min + step * i as Real)
}

impl GridConfig {
    /// Generates the grid as an unordered point cloud (row-major order).
    pub fn generate(&self) -> Result<Vec<Point2<Real>>, PatternError> {
        if self.nx == 0 || self.ny == 0 {
            return Err(PatternError::EmptySequence);
        }
        let xs: Vec<Real> = linspace(self.x_min, self.x_max, self.nx).collect();
        let mut pts = Vec::with_capacity(self.nx * self.ny);
        for y in linspace(self.y_min, self.y_max, self.ny) {
            for &x in &xs {
                pts.push(Point2::new(x, y));
            }
        }
        Ok(pts)
    }
}
