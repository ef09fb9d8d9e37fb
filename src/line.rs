//! Straight line segments

use crate::float_types::Real;
use geo::{Line as GeoLine, coord};
use nalgebra::{Point2, Vector2};

/// A segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point2<Real>,
    pub end: Point2<Real>,
}

impl Line {
    pub const fn new(start: Point2<Real>, end: Point2<Real>) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: Real, y1: Real, x2: Real, y2: Real) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    pub fn direction(&self) -> Vector2<Real> {
        self.end - self.start
    }

    pub fn length(&self) -> Real {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point2<Real> {
        nalgebra::center(&self.start, &self.end)
    }

    /// True unless the endpoints are more than `tolerance` apart. A line with
    /// a NaN coordinate is degenerate too.
    pub fn is_degenerate(&self, tolerance: Real) -> bool {
        !(self.length() > tolerance)
    }
}

impl From<Line> for GeoLine<Real> {
    fn from(line: Line) -> Self {
        GeoLine::new(
            coord! { x: line.start.x, y: line.start.y },
            coord! { x: line.end.x, y: line.end.y },
        )
    }
}

impl From<GeoLine<Real>> for Line {
    fn from(line: GeoLine<Real>) -> Self {
        Line::from_coords(line.start.x, line.start.y, line.end.x, line.end.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures() {
        let line = Line::from_coords(1.0, 1.0, 4.0, 5.0);
        assert_eq!(line.direction(), Vector2::new(3.0, 4.0));
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point2::new(2.5, 3.0));
    }

    #[test]
    fn degenerate_lines() {
        assert!(Line::from_coords(2.0, 2.0, 2.0, 2.0).is_degenerate(0.0));
        assert!(Line::from_coords(0.0, 0.0, Real::NAN, 1.0).is_degenerate(0.0));
        assert!(Line::from_coords(0.0, 0.0, 0.5, 0.0).is_degenerate(1.0));
        assert!(!Line::from_coords(0.0, 0.0, 0.5, 0.0).is_degenerate(0.0));
    }

    #[test]
    fn geo_conversions_keep_endpoints() {
        let line = Line::from_coords(-1.0, 2.0, 3.0, -4.0);
        let geo_line: GeoLine<Real> = line.into();
        assert_eq!(geo_line.start, coord! { x: -1.0, y: 2.0 });
        assert_eq!(geo_line.end, coord! { x: 3.0, y: -4.0 });
        assert_eq!(Line::from(geo_line), line);
    }
}
