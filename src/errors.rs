//! Geometry errors

use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// Everything that can go wrong when asking the geometry core a question it
/// cannot answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (DegenerateLine) Both endpoints of a line are the same point
    DegenerateLine(Point2<Real>),
    /// (TooManyMembers) A CSG operation was given more regions than it accepts
    TooManyMembers {
        operation: &'static str,
        max: usize,
        given: usize,
    },
    /// (InvalidFlatness) Flattening needs a finite, positive flatness
    InvalidFlatness(Real),
    /// (TooManyVertices) Flattening at this flatness needs more vertices than allowed
    TooManyVertices { requested: Real, max: usize },
    /// (UnknownOperation) The name does not match any CSG operation
    UnknownOperation(String),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DegenerateLine(point) => write!(
                f,
                "(DegenerateLine) Both endpoints of the line coincide at: ({}, {})",
                point.x, point.y
            ),
            GeometryError::TooManyMembers {
                operation,
                max,
                given,
            } => write!(
                f,
                "(TooManyMembers) {operation} accepts at most {max} regions, {given} were given"
            ),
            GeometryError::InvalidFlatness(flatness) => write!(
                f,
                "(InvalidFlatness) Flatness must be finite and positive, got {flatness}"
            ),
            GeometryError::TooManyVertices { requested, max } => write!(
                f,
                "(TooManyVertices) Flattening needs {requested} vertices, at most {max} are allowed"
            ),
            GeometryError::UnknownOperation(name) => {
                write!(f, "(UnknownOperation) No CSG operation is called '{name}'")
            },
        }
    }
}
