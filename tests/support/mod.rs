//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use circsg::{float_types::Real, rect::Rect, region::Region};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance between two angles in degrees, going the short way round.
pub fn angular_gap(a: Real, b: Real) -> Real {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Axis-aligned square region with its top-left corner at (x, y).
pub fn square(x: Real, y: Real, side: Real) -> Region {
    Region::from_rect(&Rect::new(x, y, side, side))
}

/// Area of the symmetric difference, i.e. how far apart two regions are.
pub fn area_gap(a: &Region, b: &Region) -> Real {
    use circsg::traits::BooleanOps;
    a.xor(b).area()
}
