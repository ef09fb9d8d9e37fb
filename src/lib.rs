//! Circle geometry and 2D **Constructive Solid Geometry (CSG)**.
//!
//! The crate has two halves:
//! - [`Circle`]: a circle value with an optional rotation and a pie-slice
//!   restriction, answering hit tests, angle/position queries, line
//!   intersection, quadrant decomposition, and producing outlines either as
//!   four cubic Béziers or as a flattened polygon.
//! - [`CsgOperation`]: union, intersection, subtract and xor folded over
//!   [`Region`]s, the area type backed by `geo`'s boolean operations.
//!
//! Coordinates follow screen conventions: y grows downward and angles are
//! degrees clockwise from north.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export paths and regions as SVG, and build the demo binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod rect;
pub mod line;
pub mod quadrant;
pub mod path;
pub mod region;
pub mod traits;
pub mod circle;
pub mod csg;
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use circle::Circle;
pub use csg::CsgOperation;
pub use errors::GeometryError;
pub use region::Region;
