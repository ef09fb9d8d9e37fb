//! Compass quadrants of a circle.
//!
//! Angles are degrees measured clockwise from north (12 o'clock), the same
//! convention used by [`Circle::angle_of`](crate::circle::Circle::angle_of).

use crate::float_types::{Real, normalize_degrees};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Quadrant {
    /// Every quadrant, clockwise from north-east.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
        Quadrant::NorthWest,
    ];

    /// Quadrant an angle falls into after normalisation to `[0, 360)`.
    /// Boundaries belong to the quadrant that starts there.
    pub fn for_angle(angle: Real) -> Quadrant {
        let angle = normalize_degrees(angle);
        if angle < 90.0 {
            Quadrant::NorthEast
        } else if angle < 180.0 {
            Quadrant::SouthEast
        } else if angle < 270.0 {
            Quadrant::SouthWest
        } else {
            Quadrant::NorthWest
        }
    }

    /// Bisecting angle of the quadrant.
    pub const fn center(self) -> Real {
        match self {
            Quadrant::NorthEast => 45.0,
            Quadrant::SouthEast => 135.0,
            Quadrant::SouthWest => 225.0,
            Quadrant::NorthWest => 315.0,
        }
    }

    pub const fn opposite(self) -> Quadrant {
        match self {
            Quadrant::NorthEast => Quadrant::SouthWest,
            Quadrant::SouthEast => Quadrant::NorthWest,
            Quadrant::SouthWest => Quadrant::NorthEast,
            Quadrant::NorthWest => Quadrant::SouthEast,
        }
    }

    /// Neighbouring quadrant across one axis.
    ///
    /// With `east_west_axis` the quadrant is mirrored east/west (NE → NW),
    /// which keeps the northern or southern half; otherwise it is mirrored
    /// north/south (NE → SE), keeping the eastern or western half.
    pub const fn adjacent(self, east_west_axis: bool) -> Quadrant {
        match (self, east_west_axis) {
            (Quadrant::NorthEast, true) => Quadrant::NorthWest,
            (Quadrant::NorthWest, true) => Quadrant::NorthEast,
            (Quadrant::SouthEast, true) => Quadrant::SouthWest,
            (Quadrant::SouthWest, true) => Quadrant::SouthEast,
            (Quadrant::NorthEast, false) => Quadrant::SouthEast,
            (Quadrant::SouthEast, false) => Quadrant::NorthEast,
            (Quadrant::NorthWest, false) => Quadrant::SouthWest,
            (Quadrant::SouthWest, false) => Quadrant::NorthWest,
        }
    }

    pub const fn is_north(self) -> bool {
        matches!(self, Quadrant::NorthEast | Quadrant::NorthWest)
    }

    pub const fn is_east(self) -> bool {
        matches!(self, Quadrant::NorthEast | Quadrant::SouthEast)
    }
}
