//! Procedural generation of 2D point-cloud patterns for printing toolpaths.
//!
//! The pipeline is a straight line: a base point set (an intersecting-line
//! [lattice](lattice) or a regular sampling grid), a set of localized
//! nonlinear [deformation fields](deform) blended into it with smooth
//! cosine weights, a [compositor](compose) that sums the weighted
//! displacements, and an adaptive [resampling pass](resample) that bounds
//! the spacing between consecutive path points. The final sequence is
//! exported as a flat `(x.xxxx, y.xxxx)` point list via [io].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to evaluate deformation fields across points

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod region;
pub mod lattice;
pub mod deform;
pub mod compose;
pub mod resample;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use compose::{compose, ensure_finite, scale_translate};
pub use deform::DeformationField;
pub use errors::PatternError;
pub use lattice::{GridConfig, LatticeConfig};
pub use region::PolygonRegion;
pub use resample::{decimate, densify};
