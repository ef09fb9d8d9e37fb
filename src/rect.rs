//! Axis-aligned rectangles

use crate::float_types::Real;
use geo::{Rect as GeoRect, coord};
use nalgebra::Point2;

/// An axis-aligned rectangle stored as origin plus extent, the way bounds are
/// reported by [`Circle`](crate::circle::Circle) and [`Shape`](crate::traits::Shape).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: Real,
    pub y: Real,
    pub width: Real,
    pub height: Real,
}

impl Rect {
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle spanning two opposite corners given in any order.
    pub fn from_corners(a: Point2<Real>, b: Point2<Real>) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(min_x, min_y, a.x.max(b.x) - min_x, a.y.max(b.y) - min_y)
    }

    pub const fn min_x(&self) -> Real {
        self.x
    }

    pub const fn min_y(&self) -> Real {
        self.y
    }

    pub fn max_x(&self) -> Real {
        self.x + self.width
    }

    pub fn max_y(&self) -> Real {
        self.y + self.height
    }

    pub fn center(&self) -> Point2<Real> {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left
    /// (y grows downward).
    pub fn corners(&self) -> [Point2<Real>; 4] {
        [
            Point2::new(self.min_x(), self.min_y()),
            Point2::new(self.max_x(), self.min_y()),
            Point2::new(self.max_x(), self.max_y()),
            Point2::new(self.min_x(), self.max_y()),
        ]
    }

    pub fn diagonal(&self) -> Real {
        self.width.hypot(self.height)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom are not.
    pub fn contains(&self, x: Real, y: Real) -> bool {
        x >= self.min_x() && y >= self.min_y() && x < self.max_x() && y < self.max_y()
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_corners(
            Point2::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y())),
            Point2::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }

    /// Grows the rectangle outward to integral coordinates (floor on the
    /// minimum corner, ceil on the maximum one).
    pub fn round_out(&self) -> Rect {
        Rect::from_corners(
            Point2::new(self.min_x().floor(), self.min_y().floor()),
            Point2::new(self.max_x().ceil(), self.max_y().ceil()),
        )
    }

    /// Integer version of [`Rect::round_out`].
    pub fn to_integer_rect(&self) -> GeoRect<i64> {
        let r = self.round_out();
        GeoRect::new(
            coord! { x: r.min_x() as i64, y: r.min_y() as i64 },
            coord! { x: r.max_x() as i64, y: r.max_y() as i64 },
        )
    }
}

impl From<GeoRect<Real>> for Rect {
    fn from(rect: GeoRect<Real>) -> Self {
        Rect::new(rect.min().x, rect.min().y, rect.width(), rect.height())
    }
}

impl From<Rect> for GeoRect<Real> {
    fn from(rect: Rect) -> Self {
        GeoRect::new(
            coord! { x: rect.min_x(), y: rect.min_y() },
            coord! { x: rect.max_x(), y: rect.max_y() },
        )
    }
}
