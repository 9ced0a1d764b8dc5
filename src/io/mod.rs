//! Import/export of the flat point-list text format.

mod points;

pub use points::{parse_point, parse_point_list, read_points, to_point_list, write_points};

/// I/O and format-conversion errors.
///
/// A malformed *line* in a point list is recovered locally (skipped with a
/// diagnostic) by [`parse_point_list`]; these variants surface when a
/// single record is parsed strictly or when the file itself is missing.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseFloat(std::num::ParseFloatError),
    MalformedInput(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),
            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}
