//! Precondition violations

use crate::float_types::Real;

/// All the possible precondition violations the numeric pipeline can
/// report. These fail fast: no recovery is attempted inside the core
/// (recoverable conditions live in [`crate::io::IoError`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// The skew angle is an odd multiple of π/2, where tan(θ) diverges.
    #[error("degenerate skew angle {0} rad: cos(θ) vanishes, tan(θ) diverges")]
    DegenerateSkew(Real),
    /// An operation that requires at least one point received none.
    #[error("point sequence is empty: at least one point is required")]
    EmptySequence,
    /// A polygon boundary needs at least 3 distinct vertices.
    #[error("polygon boundary has {0} vertices, at least 3 required")]
    TooFewVertices(usize),
    /// A coordinate came out NaN or infinite.
    #[error("non-finite coordinate ({x}, {y}) at index {index}")]
    NonFinite { index: usize, x: Real, y: Real },
    /// A spacing threshold must be strictly positive.
    #[error("spacing threshold {0} must be > 0")]
    NonPositiveSpacing(Real),
}
