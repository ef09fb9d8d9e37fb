//! Pure angle helpers. Inputs are normalised to `[0, 360)` first and every
//! result is in `[0, 360)`.

use super::Circle;
use crate::float_types::{Real, normalize_degrees};

impl Circle {
    /// Middle of the clockwise span from `from` to `to`.
    pub fn angle_between(from: Real, to: Real) -> Real {
        let from = normalize_degrees(from);
        let mut to = normalize_degrees(to);
        if to < from {
            to += 360.0;
        }
        normalize_degrees(from + (to - from) / 2.0)
    }

    pub fn opposite(angle: Real) -> Real {
        normalize_degrees(normalize_degrees(angle) + 180.0)
    }

    pub fn perpendicular_clockwise(angle: Real) -> Real {
        normalize_degrees(normalize_degrees(angle) + 90.0)
    }

    pub fn perpendicular_counterclockwise(angle: Real) -> Real {
        normalize_degrees(normalize_degrees(angle) - 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance between two angles on the circle.
    fn angular_gap(a: Real, b: Real) -> Real {
        let d = normalize_degrees(a - b);
        d.min(360.0 - d)
    }

    fn sample_angles() -> impl Iterator<Item = Real> {
        (-720..=720).map(|i| i as Real * 0.75 + 0.1)
    }

    #[test]
    fn opposite_twice_is_identity() {
        for a in sample_angles() {
            assert!(angular_gap(Circle::opposite(Circle::opposite(a)), a) < 1e-9, "{a}");
        }
    }

    #[test]
    fn perpendiculars_undo_each_other() {
        for a in sample_angles() {
            let back = Circle::perpendicular_clockwise(Circle::perpendicular_counterclockwise(a));
            assert!(angular_gap(back, a) < 1e-9, "{a}");
            let cw = Circle::perpendicular_clockwise(a);
            let ccw = Circle::perpendicular_counterclockwise(a);
            assert!(angular_gap(cw, ccw) > 180.0 - 1e-9);
        }
    }

    #[test]
    fn results_are_normalized() {
        for a in sample_angles() {
            for r in [
                Circle::opposite(a),
                Circle::perpendicular_clockwise(a),
                Circle::perpendicular_counterclockwise(a),
                Circle::angle_between(a, a * 0.3),
            ] {
                assert!((0.0..360.0).contains(&r), "{a} -> {r}");
            }
        }
    }

    #[test]
    fn angle_between_follows_clockwise_span() {
        assert_eq!(Circle::angle_between(10.0, 50.0), 30.0);
        assert_eq!(Circle::angle_between(350.0, 10.0), 0.0);
        assert_eq!(Circle::angle_between(90.0, 0.0), 225.0);
        assert_eq!(Circle::angle_between(-10.0, 370.0), 0.0);
    }
}
