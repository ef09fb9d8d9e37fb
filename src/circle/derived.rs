//! Lines, sub-circles and partial bounds derived from a circle.

use super::Circle;
use crate::float_types::Real;
use crate::line::Line;
use crate::quadrant::Quadrant;
use crate::rect::Rect;
use nalgebra::Point2;

impl Circle {
    /// Diameter through `angle`: from the rim at `angle` to the rim opposite.
    pub fn line(&self, angle: Real) -> Line {
        Line::new(
            self.position_of(angle, self.radius),
            self.position_of(angle + 180.0, self.radius),
        )
    }

    /// Radius segment from the center to the rim at `angle`.
    pub fn half_line(&self, angle: Real) -> Line {
        Line::new(self.center, self.position_of(angle, self.radius))
    }

    /// Tangent at the rim point for `angle`, one radius long on each side
    /// of the touching point.
    pub fn tangent(&self, angle: Real) -> Line {
        let touch = self.position_of(angle, self.radius);
        let around_touch = Circle::at(touch, self.radius).with_rotation(self.rotation);
        around_touch.line(angle + 90.0)
    }

    /// Half-size circle filling `quadrant`: centered halfway out along the
    /// quadrant's bisector, so it touches both the center and the rim.
    pub fn quadrant_circle(&self, quadrant: Quadrant) -> Circle {
        let half = self.radius / 2.0;
        let center = self.position_of(quadrant.center(), half);
        Circle::at(center, half).with_rotation(self.rotation)
    }

    /// Bounds of one quadrant.
    ///
    /// Exterior bounds are the quarter of [`Circle::bounds`] on the
    /// quadrant's side. Interior bounds span from the center to the rim point
    /// on the quadrant's bisector, i.e. the largest square inside the quarter
    /// disc.
    pub fn quadrant_bounds(&self, quadrant: Quadrant, interior: bool) -> Rect {
        if interior {
            return Rect::from_corners(
                self.center,
                self.position_of(quadrant.center(), self.radius),
            );
        }
        let x = if quadrant.is_east() {
            self.center.x
        } else {
            self.center.x - self.radius
        };
        // north is up, which is the smaller y
        let y = if quadrant.is_north() {
            self.center.y - self.radius
        } else {
            self.center.y
        };
        Rect::new(x, y, self.radius, self.radius)
    }

    /// Bounds of `quadrant` joined with its neighbour; see
    /// [`Quadrant::adjacent`] for how `east_west_axis` picks the neighbour.
    pub fn half_bounds(&self, quadrant: Quadrant, east_west_axis: bool, interior: bool) -> Rect {
        self.quadrant_bounds(quadrant, interior)
            .union(&self.quadrant_bounds(quadrant.adjacent(east_west_axis), interior))
    }

    /// Bounds of the diameter at `angle`, widened on its narrower axis to the
    /// full diameter.
    pub fn angle_bounds(&self, angle: Real) -> Rect {
        let chord = self.line(angle);
        let bounds = Rect::from_corners(chord.start, chord.end);
        if bounds.width <= bounds.height {
            Rect::from_corners(
                Point2::new(self.center.x - self.radius, bounds.min_y()),
                Point2::new(self.center.x + self.radius, bounds.max_y()),
            )
        } else {
            Rect::from_corners(
                Point2::new(bounds.min_x(), self.center.y - self.radius),
                Point2::new(bounds.max_x(), self.center.y + self.radius),
            )
        }
    }
}
