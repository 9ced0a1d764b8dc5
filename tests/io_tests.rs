use nalgebra::Point2;
use patterngen::float_types::Real;
use patterngen::io::{
    IoError, parse_point, parse_point_list, read_points, to_point_list, write_points,
};

mod support;

use crate::support::approx_point;

#[test]
fn point_list_format() {
    let pts = vec![Point2::new(1.0, 2.5), Point2::new(-3.25, 0.0)];
    assert_eq!(to_point_list(&pts), "(1.0000, 2.5000)\n(-3.2500, 0.0000)\n");
}

#[test]
fn round_trip_is_lossy_at_four_decimals() {
    let pts = vec![
        Point2::new(12.345678, -0.000049),
        Point2::new(-50.0, 35.00005),
        Point2::new(0.33333333, 0.66666666),
    ];
    let reparsed = parse_point_list(&to_point_list(&pts));
    assert_eq!(reparsed.len(), pts.len());
    for (orig, got) in pts.iter().zip(&reparsed) {
        // 4 decimal digits: half-ulp of the format is 5e-5.
        assert!(approx_point(*orig, *got, 1e-4));
    }
}

#[test]
fn strict_parse_errors() {
    assert!(matches!(parse_point("1.0, 2.0"), Err(IoError::MalformedInput(_))));
    assert!(matches!(parse_point("(1.0 2.0)"), Err(IoError::MalformedInput(_))));
    assert!(matches!(parse_point("(1.0, two)"), Err(IoError::ParseFloat(_))));
    let p = parse_point("  (1.5, -2.0)  ").unwrap();
    assert_eq!(p, Point2::new(1.5, -2.0));
}

#[test]
fn malformed_lines_are_skipped() {
    let text = "(1.0000, 2.0000)\nnot a point\n\n(3.0000, abc)\n(4.0000, 5.0000)\n";
    let pts = parse_point_list(text);
    assert_eq!(pts, vec![Point2::new(1.0, 2.0), Point2::new(4.0, 5.0)]);
}

#[test]
fn file_round_trip() {
    let path = std::env::temp_dir().join("patterngen_io_round_trip.txt");
    let pts: Vec<Point2<Real>> =
        (0..50).map(|i| Point2::new(i as Real * 0.37, -(i as Real) * 1.21)).collect();
    write_points(&path, &pts).unwrap();
    let back = read_points(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back.len(), pts.len());
    for (orig, got) in pts.iter().zip(&back) {
        assert!(approx_point(*orig, *got, 1e-4));
    }
}

#[test]
fn missing_file_is_fatal() {
    let result = read_points("no_such_point_list_anywhere.txt");
    assert!(matches!(result, Err(IoError::StdIo(_))));
}
