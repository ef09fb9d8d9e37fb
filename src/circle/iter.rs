//! Lazy point and path iterators over a circle.
//!
//! Each iterator owns a copy of the circle, so calling the producing method
//! again always starts a fresh pass.

use super::Circle;
use crate::errors::GeometryError;
use crate::float_types::{KAPPA, MAX_FLATTENED_VERTICES, Real};
use crate::path::PathSegment;
use nalgebra::{Matrix3, Point2, Vector2};

/// `count` rim points evenly spaced over the usable sector, starting at angle 0.
#[derive(Clone, Debug)]
pub struct Positions {
    circle: Circle,
    step: Real,
    index: usize,
    count: usize,
}

impl Iterator for Positions {
    type Item = Point2<Real>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let angle = self.index as Real * self.step;
        self.index += 1;
        Some(self.circle.position_of(angle, self.circle.radius))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

/// Exact outline: `MoveTo` at angle 0, four clockwise quarter arcs as cubic
/// Béziers, then `Close`. A degenerate circle yields `MoveTo(center), Close`.
#[derive(Clone, Debug)]
pub struct CirclePathIter {
    segments: [PathSegment; 6],
    len: usize,
    index: usize,
}

impl Iterator for CirclePathIter {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments[..self.len].get(self.index).copied()?;
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CirclePathIter {}

/// Polygonal outline: `MoveTo` at the first rim point, `LineTo` for the
/// rest, then `Close`.
#[derive(Clone, Debug)]
pub struct FlattenedCirclePathIter {
    positions: Positions,
    transform: Option<Matrix3<Real>>,
    started: bool,
    done: bool,
}

impl Iterator for FlattenedCirclePathIter {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let segment = match self.positions.next() {
            Some(p) if !self.started => {
                self.started = true;
                PathSegment::MoveTo(p)
            },
            Some(p) => PathSegment::LineTo(p),
            None => {
                self.done = true;
                PathSegment::Close
            },
        };
        Some(match &self.transform {
            Some(matrix) => segment.transform(matrix),
            None => segment,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.done {
            0
        } else {
            self.positions.len().saturating_add(1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FlattenedCirclePathIter {}

impl Circle {
    /// `count` points spaced `(360 / count) * usable_fraction` degrees apart.
    pub fn positions(&self, count: usize) -> Positions {
        let step = if count == 0 {
            0.0
        } else {
            360.0 / count as Real * self.usable_fraction
        };
        Positions {
            circle: *self,
            step,
            index: 0,
            count,
        }
    }

    /// Roughly one point per unit of arc length: `floor(circumference)` points.
    pub fn unit_positions(&self) -> Positions {
        // the cast saturates: negative and NaN become 0
        self.positions(self.circumference().floor() as usize)
    }

    /// Segments of the exact outline, mapped through `transform` if given.
    pub fn path_iter(&self, transform: Option<&Matrix3<Real>>) -> CirclePathIter {
        let mut segments = [PathSegment::Close; 6];
        let len = if self.is_degenerate() {
            segments[0] = PathSegment::MoveTo(self.center);
            tracing::debug!(radius = self.radius, "degenerate circle path");
            2
        } else {
            let rim = |i: usize| self.position_of(90.0 * i as Real, self.radius);
            // clockwise tangent at the rim point of quarter i, scaled to the control offset
            let handle = |i: usize| {
                let theta = (90.0 * i as Real - 90.0 + self.rotation).to_radians();
                Vector2::new(-theta.sin(), theta.cos()) * (KAPPA * self.radius)
            };
            segments[0] = PathSegment::MoveTo(rim(0));
            for i in 0..4 {
                segments[i + 1] = PathSegment::CubicTo(
                    rim(i) + handle(i),
                    rim(i + 1) - handle(i + 1),
                    rim(i + 1),
                );
            }
            6
        };
        if let Some(matrix) = transform {
            for segment in &mut segments[..len] {
                *segment = segment.transform(matrix);
            }
        }
        CirclePathIter {
            segments,
            len,
            index: 0,
        }
    }

    /// Segments of a polygon with `round(circumference / min(flatness, radius))`
    /// vertices on the rim. Degenerate circles give `MoveTo(center), Close`.
    ///
    /// Fails when the vertex count would exceed [`MAX_FLATTENED_VERTICES`].
    pub fn flattened_path_iter(
        &self,
        transform: Option<&Matrix3<Real>>,
        flatness: Real,
    ) -> Result<FlattenedCirclePathIter, GeometryError> {
        if !(flatness > 0.0 && flatness.is_finite()) {
            tracing::warn!(flatness, "rejecting circle flattening with invalid flatness");
            return Err(GeometryError::InvalidFlatness(flatness));
        }
        let positions = if self.is_degenerate() {
            tracing::debug!(radius = self.radius, "degenerate circle path");
            Circle::at(self.center, 0.0).positions(1)
        } else {
            let count = (self.circumference() / flatness.min(self.radius)).round();
            if !(count <= MAX_FLATTENED_VERTICES as Real) {
                tracing::warn!(
                    radius = self.radius,
                    flatness,
                    count,
                    "circle flattening needs too many vertices"
                );
                return Err(GeometryError::TooManyVertices {
                    requested: count,
                    max: MAX_FLATTENED_VERTICES,
                });
            }
            self.positions(count as usize)
        };
        Ok(FlattenedCirclePathIter {
            positions,
            transform: transform.copied(),
            started: false,
            done: false,
        })
    }
}
