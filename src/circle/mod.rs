//! `Circle`: a parametric circle with an optional rotation and pie-slice
//! restriction.
//!
//! Screen coordinates are assumed: y grows downward, and angles are degrees
//! measured clockwise from north (12 o'clock). [`Circle::angle_of`] and
//! [`Circle::position_of`] are inverses of each other under that convention.

use crate::errors::GeometryError;
use crate::float_types::{PI, Real, TAU, normalize_degrees, tolerance};
use crate::line::Line;
use crate::path::Path;
use crate::quadrant::Quadrant;
use crate::rect::Rect;
use crate::traits::Shape;
use nalgebra::{Matrix3, Point2};

pub mod angles;
pub mod derived;
pub mod iter;

pub use iter::{CirclePathIter, FlattenedCirclePathIter, Positions};

/// Radius of [`Circle::default`] and of circles built from a bare center.
pub const DEFAULT_RADIUS: Real = 10.0;

/// Smallest accepted usable fraction; see [`Circle::with_usable_fraction`].
pub const MIN_USABLE_FRACTION: Real = 0.001;

/// An immutable circle value. The `with_*` builders return modified copies.
///
/// A radius that is zero, negative or not finite is accepted; such circles
/// produce a degenerate single-point path and meaningless but non-panicking
/// answers to the other queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point2<Real>,
    radius: Real,
    /// Degrees added to every angle reported or consumed by the circle.
    rotation: Real,
    /// Leading share of the full turn that counts as inside, in `[0.001, 1]`.
    usable_fraction: Real,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_RADIUS)
    }
}

impl Circle {
    pub fn new(center_x: Real, center_y: Real, radius: Real) -> Self {
        Self {
            center: Point2::new(center_x, center_y),
            radius,
            rotation: 0.0,
            usable_fraction: 1.0,
        }
    }

    pub fn at(center: Point2<Real>, radius: Real) -> Self {
        Self::new(center.x, center.y, radius)
    }

    /// Circle of [`DEFAULT_RADIUS`] around `center`.
    pub fn centered(center: Point2<Real>) -> Self {
        Self::at(center, DEFAULT_RADIUS)
    }

    /// Largest circle centered in `rect`: the radius is half the smaller side.
    pub fn inscribed(rect: &Rect) -> Self {
        Self::at(rect.center(), rect.width.min(rect.height) / 2.0)
    }

    /// Circle around the center of `rect` that contains all of it.
    ///
    /// The radius is half the diagonal, padded by [`tolerance()`] so that the
    /// corners also pass the strict [`Circle::contains`] test.
    pub fn containing(rect: &Rect) -> Self {
        Self::at(rect.center(), rect.diagonal() / 2.0 + tolerance())
    }

    pub fn with_center(self, x: Real, y: Real) -> Self {
        Self {
            center: Point2::new(x, y),
            ..self
        }
    }

    pub const fn with_radius(self, radius: Real) -> Self {
        Self { radius, ..self }
    }

    pub const fn with_rotation(self, degrees: Real) -> Self {
        Self {
            rotation: degrees,
            ..self
        }
    }

    /// Restricts [`Circle::contains`] to the sector `[0, fraction * 360]`
    /// measured by [`Circle::angle_of`]. The fraction is clamped to
    /// `[0.001, 1]`; NaN resets it to a full circle.
    pub fn with_usable_fraction(self, fraction: Real) -> Self {
        let usable_fraction = if fraction.is_nan() {
            1.0
        } else {
            fraction.clamp(MIN_USABLE_FRACTION, 1.0)
        };
        Self {
            usable_fraction,
            ..self
        }
    }

    /// Copy with the radius multiplied by `factor`.
    pub fn scale(&self, factor: Real) -> Self {
        self.with_radius(self.radius * factor)
    }

    pub const fn center(&self) -> Point2<Real> {
        self.center
    }

    pub fn center_x(&self) -> Real {
        self.center.x
    }

    pub fn center_y(&self) -> Real {
        self.center.y
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub const fn rotation(&self) -> Real {
        self.rotation
    }

    pub const fn usable_fraction(&self) -> Real {
        self.usable_fraction
    }

    /// Zero, negative or non-finite radius.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite())
    }

    pub fn distance_to_center(&self, x: Real, y: Real) -> Real {
        (x - self.center.x).hypot(y - self.center.y)
    }

    /// Strictly inside the circle and, for a partial circle, inside its
    /// usable sector.
    pub fn contains(&self, x: Real, y: Real) -> bool {
        if self.distance_to_center(x, y) >= self.radius {
            return false;
        }
        self.usable_fraction == 1.0 || self.angle_of(x, y) <= self.usable_fraction * 360.0
    }

    /// Strict squared-distance test against the full disc.
    ///
    /// Unlike [`Circle::contains`] this ignores the usable fraction.
    pub fn contains_point(&self, point: &Point2<Real>) -> bool {
        (*point - self.center).norm_squared() < self.radius * self.radius
    }

    /// Angle of the point seen from the center, clockwise from north, plus
    /// the circle's rotation. The result lies in `[rotation, rotation + 360)`.
    pub fn angle_of(&self, x: Real, y: Real) -> Real {
        let degrees = (x - self.center.x).atan2(self.center.y - y).to_degrees();
        self.rotation + normalize_degrees(degrees)
    }

    /// Point at `angle` (clockwise from north, offset by the rotation) and
    /// `radius` from the center.
    pub fn position_of(&self, angle: Real, radius: Real) -> Point2<Real> {
        let theta = (angle - 90.0 + self.rotation).to_radians();
        Point2::new(
            self.center.x + radius * theta.cos(),
            self.center.y + radius * theta.sin(),
        )
    }

    pub fn quadrant_of(&self, angle: Real) -> Quadrant {
        Quadrant::for_angle(angle)
    }

    pub fn quadrant_of_point(&self, x: Real, y: Real) -> Quadrant {
        Quadrant::for_angle(self.angle_of(x, y))
    }

    /// Whether the two discs share any interior point. Containment of one
    /// circle in the other counts as overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        if self == other || self.center == other.center {
            return true;
        }
        nalgebra::distance(&self.center, &other.center) < self.radius + other.radius
    }

    /// Chord cut by the infinite line through `line`'s endpoints.
    ///
    /// Returns `Ok(None)` when the line misses the circle or only touches it;
    /// a tangent point is not reported. A line whose endpoints coincide has
    /// no direction and is rejected.
    pub fn intersection(&self, line: &Line) -> Result<Option<Line>, GeometryError> {
        if line.is_degenerate(0.0) {
            tracing::warn!(
                x = line.start.x,
                y = line.start.y,
                "intersection with a zero-length line"
            );
            return Err(GeometryError::DegenerateLine(line.start));
        }
        let direction = line.direction() / line.length();
        // foot of the perpendicular from the center
        let t = direction.dot(&(self.center - line.start));
        let foot = line.start + direction * t;
        let distance = nalgebra::distance(&foot, &self.center);
        if distance >= self.radius {
            return Ok(None);
        }
        let half_chord = (self.radius * self.radius - distance * distance).sqrt();
        Ok(Some(Line::new(
            line.start + direction * (t - half_chord),
            line.start + direction * (t + half_chord),
        )))
    }

    pub fn circumference(&self) -> Real {
        TAU * self.radius
    }

    pub fn area(&self) -> Real {
        Self::area_for_radius(self.radius)
    }

    pub fn area_for_radius(radius: Real) -> Real {
        PI * radius * radius
    }

    /// `[cx - r, cy - r, 2r, 2r]`
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            2.0 * self.radius,
            2.0 * self.radius,
        )
    }

    /// Bounds rounded outward to integers, so they always cover the circle.
    pub fn integer_bounds(&self) -> geo::Rect<i64> {
        self.bounds().to_integer_rect()
    }

    /// Whether the disc and the rectangle share an interior point, using the
    /// point of `rect` nearest to the center.
    pub fn intersects(&self, rect: &Rect) -> bool {
        let nearest_x = self.center.x.max(rect.min_x()).min(rect.max_x());
        let nearest_y = self.center.y.max(rect.min_y()).min(rect.max_y());
        let dx = self.center.x - nearest_x;
        let dy = self.center.y - nearest_y;
        dx * dx + dy * dy < self.radius * self.radius
    }

    /// All four corners pass [`Circle::contains`].
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.corners().iter().all(|c| self.contains(c.x, c.y))
    }

    /// Exact outline: four cubic Béziers.
    pub fn path(&self, transform: Option<&Matrix3<Real>>) -> Path {
        self.path_iter(transform).collect()
    }

    /// Polygonal outline whose vertices sit on the circle.
    pub fn flattened_path(
        &self,
        transform: Option<&Matrix3<Real>>,
        flatness: Real,
    ) -> Result<Path, GeometryError> {
        Ok(self.flattened_path_iter(transform, flatness)?.collect())
    }
}

impl Shape for Circle {
    fn bounding_rect(&self) -> Rect {
        self.bounds()
    }

    fn hit_test(&self, x: Real, y: Real) -> bool {
        self.contains(x, y)
    }

    /// The full outline; the usable fraction only affects hit testing.
    fn to_path(&self, transform: Option<&Matrix3<Real>>) -> Path {
        self.path(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Real = 1e-9;

    #[test]
    fn defaults() {
        let c = Circle::default();
        assert_eq!(c.radius(), 10.0);
        assert_eq!(c.rotation(), 0.0);
        assert_eq!(c.usable_fraction(), 1.0);
        assert_eq!(Circle::centered(Point2::new(1.0, 2.0)).radius(), DEFAULT_RADIUS);
    }

    #[test]
    fn builders_return_copies() {
        let c = Circle::new(1.0, 2.0, 3.0);
        let moved = c.with_center(5.0, 6.0).with_radius(7.0).with_rotation(30.0);
        assert_eq!(c.center(), Point2::new(1.0, 2.0));
        assert_eq!(moved.center(), Point2::new(5.0, 6.0));
        assert_eq!(moved.radius(), 7.0);
        assert_eq!(moved.rotation(), 30.0);
        let scaled = c.scale(2.0);
        assert_eq!(scaled.radius(), 6.0);
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn usable_fraction_is_clamped() {
        let c = Circle::default();
        assert_eq!(c.with_usable_fraction(0.0).usable_fraction(), MIN_USABLE_FRACTION);
        assert_eq!(c.with_usable_fraction(4.0).usable_fraction(), 1.0);
        assert_eq!(c.with_usable_fraction(Real::NAN).usable_fraction(), 1.0);
    }

    #[test]
    fn angle_of_compass_points() {
        let c = Circle::new(0.0, 0.0, 10.0);
        assert!((c.angle_of(0.0, -5.0) - 0.0).abs() < EPS);
        assert!((c.angle_of(5.0, 0.0) - 90.0).abs() < EPS);
        assert!((c.angle_of(0.0, 5.0) - 180.0).abs() < EPS);
        assert!((c.angle_of(-5.0, 0.0) - 270.0).abs() < EPS);
        let rotated = c.with_rotation(10.0);
        assert!((rotated.angle_of(5.0, 0.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn position_of_compass_points() {
        let c = Circle::new(1.0, 1.0, 10.0);
        let north = c.position_of(0.0, 10.0);
        assert!((north.x - 1.0).abs() < EPS && (north.y + 9.0).abs() < EPS);
        let east = c.position_of(90.0, 2.0);
        assert!((east.x - 3.0).abs() < EPS && (east.y - 1.0).abs() < EPS);
    }

    #[test]
    fn sector_restricts_contains_but_not_contains_point() {
        let half = Circle::new(0.0, 0.0, 10.0).with_usable_fraction(0.5);
        // east half is angles 0..180
        assert!(half.contains(5.0, 0.0));
        assert!(!half.contains(-5.0, 0.0));
        assert!(half.contains_point(&Point2::new(-5.0, 0.0)));
    }

    #[test]
    fn contains_is_strict() {
        let c = Circle::new(0.0, 0.0, 10.0);
        assert!(!c.contains(10.0, 0.0));
        assert!(!c.contains_point(&Point2::new(0.0, 10.0)));
        assert!(c.contains(9.999, 0.0));
    }

    #[test]
    fn intersection_through_center() {
        let c = Circle::new(0.0, 0.0, 5.0);
        let chord = c
            .intersection(&Line::from_coords(-20.0, 0.0, -10.0, 0.0))
            .unwrap()
            .unwrap();
        assert!((chord.start.x + 5.0).abs() < EPS);
        assert!((chord.end.x - 5.0).abs() < EPS);
        assert!(chord.start.y.abs() < EPS && chord.end.y.abs() < EPS);
    }

    #[test]
    fn intersection_off_center_chord() {
        let c = Circle::new(0.0, 0.0, 5.0);
        let chord = c
            .intersection(&Line::from_coords(0.0, 3.0, 1.0, 3.0))
            .unwrap()
            .unwrap();
        assert!((chord.length() - 8.0).abs() < EPS);
        assert!((c.distance_to_center(chord.start.x, chord.start.y) - 5.0).abs() < EPS);
    }

    #[test]
    fn tangent_and_miss_yield_none() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert_eq!(c.intersection(&Line::from_coords(0.0, 5.0, 1.0, 5.0)), Ok(None));
        assert_eq!(c.intersection(&Line::from_coords(0.0, 9.0, 1.0, 9.0)), Ok(None));
    }

    #[test]
    fn zero_length_line_is_rejected() {
        let c = Circle::new(0.0, 0.0, 5.0);
        let err = c.intersection(&Line::from_coords(1.0, 1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, GeometryError::DegenerateLine(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn bounds_and_integer_bounds() {
        let c = Circle::new(0.5, 0.5, 1.2);
        let b = c.bounds();
        assert!((b.x + 0.7).abs() < EPS && (b.width - 2.4).abs() < EPS);
        let i = c.integer_bounds();
        assert_eq!((i.min().x, i.min().y, i.max().x, i.max().y), (-1, -1, 2, 2));
    }

    #[test]
    fn rect_intersection_and_containment() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(c.intersects(&Rect::new(4.0, -1.0, 3.0, 2.0)));
        assert!(!c.intersects(&Rect::new(4.0, 4.0, 3.0, 3.0)));
        assert!(c.intersects(&Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert!(c.contains_rect(&Rect::new(-1.0, -1.0, 2.0, 2.0)));
        assert!(!c.contains_rect(&Rect::new(-4.0, -4.0, 8.0, 8.0)));
    }

    #[test]
    fn inscribed_uses_smaller_side() {
        let c = Circle::inscribed(&Rect::new(0.0, 0.0, 10.0, 4.0));
        assert_eq!(c.center(), Point2::new(5.0, 2.0));
        assert_eq!(c.radius(), 2.0);
    }

    #[test]
    fn negative_radius_is_tolerated() {
        let c = Circle::new(0.0, 0.0, -2.0);
        assert_eq!(c.area(), Circle::area_for_radius(-2.0));
        assert!(c.is_degenerate());
        assert!(!c.contains(0.0, 0.0));
        assert_eq!(c.path(None).len(), 2);
    }
}
