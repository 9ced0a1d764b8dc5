//! The `(x.xxxx, y.xxxx)` per-line point-list format.
//!
//! One point per line, 4 decimal digits, sequence order preserved. The
//! format is lossy at the 4th decimal by design; a round-trip reproduces
//! coordinates to within 5e-5.

use super::IoError;
use crate::float_types::Real;
use nalgebra::Point2;
use std::path::Path;

/// Formats `points` as the point-list text, one `(x.xxxx, y.xxxx)` line
/// per point.
pub fn to_point_list(points: &[Point2<Real>]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("({:.4}, {:.4})\n", p.x, p.y));
    }
    out
}

/// Writes [`to_point_list`] to `path`.
pub fn write_points(path: impl AsRef<Path>, points: &[Point2<Real>]) -> Result<(), IoError> {
    std::fs::write(path, to_point_list(points))?;
    Ok(())
}

/// Strictly parses a single `(x, y)` line.
pub fn parse_point(line: &str) -> Result<Point2<Real>, IoError> {
    let line = line.trim();
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| IoError::MalformedInput(line.to_string()))?;
    let (x_str, y_str) = inner
        .split_once(',')
        .ok_or_else(|| IoError::MalformedInput(line.to_string()))?;
    let x: Real = x_str.trim().parse()?;
    let y: Real = y_str.trim().parse()?;
    Ok(Point2::new(x, y))
}

/// Parses a whole point list, skipping malformed lines.
///
/// A line that fails to parse is reported on stderr and processing
/// continues; blank lines are ignored silently.
pub fn parse_point_list(text: &str) -> Vec<Point2<Real>> {
    let mut points = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_point(line) {
            Ok(p) => points.push(p),
            Err(error) => eprintln!("skipping malformed point record: {error}"),
        }
    }
    points
}

/// Reads a point list from `path`.
///
/// A missing or unreadable file is fatal for the run and is returned as
/// [`IoError::StdIo`]; malformed lines inside an existing file are skipped
/// per [`parse_point_list`].
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point2<Real>>, IoError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_point_list(&text))
}
