use crate::float_types::{DEFAULT_FLATNESS, Real};
use crate::path::Path;
use crate::rect::Rect;
use crate::region::Region;
use nalgebra::{Matrix3, Rotation2, Vector2};

/// A closed 2D shape that can be hit-tested, drawn as a path, and turned
/// into a [`Region`] for boolean algebra.
pub trait Shape {
    fn bounding_rect(&self) -> Rect;

    fn hit_test(&self, x: Real, y: Real) -> bool;

    /// Outline of the shape, optionally mapped through a homogeneous affine.
    fn to_path(&self, transform: Option<&Matrix3<Real>>) -> Path;

    /// Area representation of the shape, filled with the even-odd rule.
    /// Curves are flattened with [`DEFAULT_FLATNESS`].
    fn to_region(&self) -> Region {
        Region::from_path(&self.to_path(None), DEFAULT_FLATNESS).unwrap_or_default()
    }
}

/// Boolean operations on planar regions
pub trait BooleanOps: Sized {
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    fn xor(&self, other: &Self) -> Self;
}

/// Affine transformations, expressed as 3×3 homogeneous matrices
pub trait TransformOps: Sized {
    fn transform(&self, matrix: &Matrix3<Real>) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector2<Real>) -> Self {
        self.transform(&Matrix3::new_translation(&vector))
    }

    /// Returns a new Self translated by x and y.
    fn translate(&self, x: Real, y: Real) -> Self {
        self.translate_vector(Vector2::new(x, y))
    }

    /// Rotates about the origin by `degrees`. With y growing downward a
    /// positive angle turns clockwise on screen.
    fn rotate(&self, degrees: Real) -> Self {
        let rot = Rotation2::new(degrees.to_radians());
        self.transform(&rot.to_homogeneous())
    }

    /// Scales by scale_x, scale_y about the origin
    fn scale(&self, sx: Real, sy: Real) -> Self {
        self.transform(&Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)))
    }
}
