// main.rs
//
// End-to-end demo of the pattern pipeline: a periodic lattice toolpath, a
// composite multi-deformation point cloud, and a density-tuning pass over
// the exported path.

use nalgebra::Point2;
use patterngen::deform::{AngularRipple, BoundaryWave, Periodic, RadialRipple, Swirl};
use patterngen::io::{read_points, write_points};
use patterngen::{
    DeformationField, GridConfig, LatticeConfig, PolygonRegion, compose, decimate, densify,
    ensure_finite, scale_translate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1) Periodic pattern: intersecting lattice, densified so the map has
    //    enough samples to bend the segments, then the periodic map.
    let lattice = LatticeConfig {
        primary_sf: 0.5,
        secondary_sf: 0.5,
        side_offset: 1.0,
        grid_number: 40,
        centralized: true,
        ..LatticeConfig::default()
    }
    .generate()?;
    let dense = densify(&lattice, 0.01)?;

    let periodic = Periodic::axis_coupled();
    let warped = compose(&dense, &[&periodic]);
    let toolpath = scale_translate(&warped, 0.5, 20.0, 20.0);
    ensure_finite(&toolpath)?;
    write_points("original_points.txt", &toolpath)?;

    // 2) Composite pattern: four localized deformations over a sampling
    //    grid, each blended around its own center.
    let grid = GridConfig::default().generate()?;

    let swirl = Swirl::default();
    let heart = PolygonRegion::heart(Point2::new(0.0, -10.0), 0.5, 1000)?;
    let wave = BoundaryWave::new(heart, 10.0);
    let hexagon = AngularRipple::default();
    let rose = RadialRipple::default();
    let fields: [&dyn DeformationField; 4] = [&swirl, &wave, &hexagon, &rose];

    let composite = compose(&grid, &fields);
    let composite = scale_translate(&composite, 0.2, 30.0, 30.0);
    ensure_finite(&composite)?;
    write_points("composite_points.txt", &composite)?;

    // 3) Density tuning: re-read the exported path and thin out points
    //    closer than the printer can resolve.
    let reloaded = read_points("original_points.txt")?;
    let filtered = decimate(&reloaded, 0.1)?;
    write_points("final_points_filtered.txt", &filtered)?;
    println!(
        "exported {} toolpath points, {} composite points, {} filtered points",
        toolpath.len(),
        composite.len(),
        filtered.len()
    );
    Ok(())
}
