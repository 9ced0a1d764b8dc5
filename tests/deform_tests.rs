use nalgebra::Point2;
use patterngen::PolygonRegion;
use patterngen::deform::{
    AngularRipple, BoundaryWave, DeformationField, Periodic, RadialRipple, Swirl, blend_weight,
};
use patterngen::errors::PatternError;
use patterngen::float_types::{PI, Real};
use patterngen::region::point_segment_distance;

mod support;

use crate::support::{approx_eq, approx_point};

fn sample_grid(extent: Real, step: Real) -> Vec<Point2<Real>> {
    let mut pts = Vec::new();
    let n = (2.0 * extent / step) as i32;
    for j in 0..=n {
        for i in 0..=n {
            pts.push(Point2::new(-extent + i as Real * step, -extent + j as Real * step));
        }
    }
    pts
}

#[test]
fn blend_weight_branches() {
    assert_eq!(blend_weight(0.0, 1.0, 2.0), 1.0);
    assert_eq!(blend_weight(1.0, 1.0, 2.0), 1.0);
    assert_eq!(blend_weight(2.0, 1.0, 2.0), 0.0);
    assert_eq!(blend_weight(5.0, 1.0, 2.0), 0.0);
    // Midpoint of the band is the half-weight point of the cosine.
    assert!(approx_eq(blend_weight(1.5, 1.0, 2.0), 0.5, 1e-12));
    // Degenerate band collapses to a step.
    assert_eq!(blend_weight(0.9, 1.0, 1.0), 1.0);
    assert_eq!(blend_weight(1.1, 1.0, 1.0), 0.0);
}

#[test]
fn blend_weight_continuous_at_band_edges() {
    let delta = 1e-9;
    assert!(approx_eq(blend_weight(1.0 + delta, 1.0, 2.0), 1.0, 1e-6));
    assert!(approx_eq(blend_weight(2.0 - delta, 1.0, 2.0), 0.0, 1e-6));
}

#[test]
fn weights_stay_in_unit_interval() {
    let swirl = Swirl::default();
    let hexagon = AngularRipple::default();
    let rose = RadialRipple::default();
    let heart = PolygonRegion::heart(Point2::new(0.0, -10.0), 0.5, 200).unwrap();
    let wave = BoundaryWave::new(heart, 10.0);
    let fields: [&dyn DeformationField; 4] = [&swirl, &hexagon, &rose, &wave];

    for p in sample_grid(60.0, 2.5) {
        for field in fields {
            let w = field.weight(p);
            assert!((0.0..=1.0).contains(&w), "weight {w} out of range at {p}");
        }
    }
}

#[test]
fn swirl_weight_by_region() {
    let swirl = Swirl::default();
    // Along θ = 0 from the center the petal is full: r1 = 8, r2 = 28.
    let at = |r: Real| Point2::new(swirl.center.x + r, swirl.center.y);
    assert_eq!(swirl.weight(swirl.center), 1.0);
    assert_eq!(swirl.weight(at(7.9)), 1.0);
    assert_eq!(swirl.weight(at(28.1)), 0.0);
    assert!(approx_eq(swirl.weight(at(18.0)), 0.5, 1e-12));
    // Continuity across both boundaries.
    assert!(approx_eq(swirl.weight(at(8.0 + 1e-7)), 1.0, 1e-6));
    assert!(approx_eq(swirl.weight(at(28.0 - 1e-7)), 0.0, 1e-6));
}

#[test]
fn swirl_decays_with_radius() {
    let swirl = Swirl::default();
    // Mid-band points: the twist magnitude shrinks as r grows.
    let near = Point2::new(swirl.center.x + 10.0, swirl.center.y);
    let far = Point2::new(swirl.center.x + 20.0, swirl.center.y);
    let near_shift = (swirl.displace(near) - near).norm();
    let far_shift = (swirl.displace(far) - far).norm();
    assert!(near_shift > far_shift);
}

#[test]
fn angular_ripple_preserves_angle() {
    let hexagon = AngularRipple::default();
    let p = Point2::new(hexagon.center.x + 9.0, hexagon.center.y + 2.0);
    let q = hexagon.displace(p);
    let v = p - hexagon.center;
    let u = q - hexagon.center;
    assert!(approx_eq(v.y.atan2(v.x), u.y.atan2(u.x), 1e-12));
}

#[test]
fn radial_ripple_is_concentric() {
    let rose = RadialRipple::default();
    // Two points at the same radius but different angles inside the
    // full-effect region get the same radial scaling.
    let r = 4.0;
    let p1 = Point2::new(rose.center.x + r, rose.center.y);
    let p2 = Point2::new(rose.center.x, rose.center.y + r);
    let s1 = (rose.displace(p1) - rose.center).norm() / r;
    let s2 = (rose.displace(p2) - rose.center).norm() / r;
    assert!(approx_eq(s1, s2, 1e-12));
}

#[test]
fn boundary_wave_weight_by_region() {
    let heart = PolygonRegion::heart(Point2::new(0.0, -10.0), 0.5, 1000).unwrap();
    let wave = BoundaryWave::new(heart, 10.0);
    // Heart center is interior; far away is past the band.
    assert_eq!(wave.weight(Point2::new(0.0, -10.0)), 1.0);
    assert_eq!(wave.weight(Point2::new(50.0, 40.0)), 0.0);
    // A point just outside still blends smoothly.
    let near = Point2::new(0.0, -10.0 + 0.5 * 17.0 + 0.5);
    let w = wave.weight(near);
    assert!(w > 0.0 && w < 1.0);
}

#[test]
fn periodic_maps() {
    let coupled = Periodic::axis_coupled();
    assert_eq!(coupled.weight(Point2::new(3.0, -7.0)), 1.0);
    assert!(approx_point(coupled.displace(Point2::origin()), Point2::origin(), 1e-12));
    let p = Point2::new(PI, 0.0);
    assert!(approx_point(coupled.displace(p), Point2::new(2.0 * PI, 0.5 * PI), 1e-12));

    let product = Periodic::product();
    assert!(approx_point(product.displace(Point2::origin()), Point2::new(0.0, 1.0), 1e-12));
}

#[test]
fn segment_distance() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(10.0, 0.0);
    assert!(approx_eq(point_segment_distance(Point2::new(5.0, 3.0), a, b), 3.0, 1e-12));
    // Beyond the endpoints the distance is to the nearest endpoint.
    assert!(approx_eq(point_segment_distance(Point2::new(-4.0, 3.0), a, b), 5.0, 1e-12));
    // Degenerate segment: guarded, no NaN.
    let d = point_segment_distance(Point2::new(3.0, 4.0), a, a);
    assert!(approx_eq(d, 5.0, 1e-12));
}

#[test]
fn polygon_region_queries() {
    let square =
        PolygonRegion::new(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]).unwrap();
    assert!(square.contains(Point2::new(2.0, 2.0)));
    assert!(!square.contains(Point2::new(5.0, 2.0)));
    assert!(approx_eq(square.boundary_distance(Point2::new(6.0, 2.0)), 2.0, 1e-12));
    assert!(approx_eq(square.boundary_distance(Point2::new(2.0, 2.0)), 2.0, 1e-12));
}

#[test]
fn polygon_region_needs_three_vertices() {
    assert!(matches!(
        PolygonRegion::new(&[[0.0, 0.0], [1.0, 1.0]]),
        Err(PatternError::TooFewVertices(2))
    ));
}
