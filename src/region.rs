//! `Region`: closed planar areas with boolean algebra, backed by `geo`.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::path::Path;
use crate::rect::Rect;
use crate::traits::{BooleanOps, Shape, TransformOps};
use geo::{
    AffineOps, AffineTransform, Area, BooleanOps as GeoBool, BoundingRect, Contains, LineString,
    MultiPolygon, Point, Polygon as GeoPolygon,
};
use nalgebra::{Matrix3, Point2};

/// A possibly disconnected area with holes. Every CSG result is a `Region`.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    polygons: MultiPolygon<Real>,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Region {
    /// The empty region.
    pub fn new() -> Self {
        Self {
            polygons: MultiPolygon::new(Vec::new()),
        }
    }

    pub const fn from_polygons(polygons: MultiPolygon<Real>) -> Self {
        Self { polygons }
    }

    pub fn from_rect(rect: &Rect) -> Self {
        if rect.is_empty() {
            return Self::new();
        }
        let polygon = geo::Rect::from(*rect).to_polygon();
        Self::from_polygons(MultiPolygon::new(vec![polygon]))
    }

    /// Fills the sub-paths of `path` with the even-odd rule: nested rings
    /// become holes, overlapping rings cancel out where they overlap.
    /// Sub-paths enclosing no area are dropped.
    pub fn from_path(path: &Path, flatness: Real) -> Result<Self, GeometryError> {
        let rings = path.flatten(flatness)?;
        let mut region: Option<MultiPolygon<Real>> = None;
        for ring in rings {
            let polygon = GeoPolygon::new(
                LineString::from(ring.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>()),
                vec![],
            );
            if polygon.unsigned_area() <= 0.0 {
                continue;
            }
            let polygon = MultiPolygon::new(vec![polygon]);
            region = Some(match region {
                Some(acc) => acc.xor(&polygon),
                None => polygon,
            });
        }
        Ok(region.map(Self::from_polygons).unwrap_or_default())
    }

    pub const fn polygons(&self) -> &MultiPolygon<Real> {
        &self.polygons
    }

    pub fn into_polygons(self) -> MultiPolygon<Real> {
        self.polygons
    }

    /// Enclosed area; holes are subtracted.
    pub fn area(&self) -> Real {
        self.polygons.unsigned_area()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty() || self.area() <= 0.0
    }

    /// Strict containment; points on the boundary are outside.
    pub fn contains(&self, x: Real, y: Real) -> bool {
        self.polygons.contains(&Point::new(x, y))
    }

    pub fn bounding_rect(&self) -> Option<Rect> {
        self.polygons.bounding_rect().map(Rect::from)
    }
}

impl BooleanOps for Region {
    fn union(&self, other: &Self) -> Self {
        Self::from_polygons(self.polygons.union(&other.polygons))
    }

    fn difference(&self, other: &Self) -> Self {
        Self::from_polygons(self.polygons.difference(&other.polygons))
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::from_polygons(self.polygons.intersection(&other.polygons))
    }

    fn xor(&self, other: &Self) -> Self {
        Self::from_polygons(self.polygons.xor(&other.polygons))
    }
}

impl TransformOps for Region {
    fn transform(&self, m: &Matrix3<Real>) -> Self {
        let affine = AffineTransform::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
        );
        Self::from_polygons(self.polygons.affine_transform(&affine))
    }
}

impl Shape for Region {
    fn bounding_rect(&self) -> Rect {
        Region::bounding_rect(self).unwrap_or_default()
    }

    fn hit_test(&self, x: Real, y: Real) -> bool {
        self.contains(x, y)
    }

    fn to_path(&self, transform: Option<&Matrix3<Real>>) -> Path {
        let mut path = Path::new();
        for polygon in &self.polygons {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                // geo stores the closing coordinate explicitly
                let coords = &ring.0[..ring.0.len().saturating_sub(1)];
                let points: Vec<Point2<Real>> =
                    coords.iter().map(|c| Point2::new(c.x, c.y)).collect();
                path.extend(Path::polygon(&points).segments().iter().copied());
            }
        }
        match transform {
            Some(matrix) => path.transform(matrix),
            None => path,
        }
    }

    fn to_region(&self) -> Region {
        self.clone()
    }
}

impl Shape for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }

    fn hit_test(&self, x: Real, y: Real) -> bool {
        self.contains(x, y)
    }

    fn to_path(&self, transform: Option<&Matrix3<Real>>) -> Path {
        let path = Path::polygon(&self.corners());
        match transform {
            Some(matrix) => path.transform(matrix),
            None => path,
        }
    }

    fn to_region(&self) -> Region {
        Region::from_rect(self)
    }
}

impl From<&Rect> for Region {
    fn from(rect: &Rect) -> Self {
        Region::from_rect(rect)
    }
}

impl From<Region> for Path {
    fn from(region: Region) -> Self {
        region.to_path(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    fn approx(a: Real, b: Real) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn rect_region_area() {
        let r = Region::from_rect(&Rect::new(0.0, 0.0, 4.0, 2.5));
        assert!(approx(r.area(), 10.0));
        assert!(r.contains(1.0, 1.0));
        assert!(!r.contains(5.0, 1.0));
        assert!(Region::from_rect(&Rect::new(0.0, 0.0, 0.0, 3.0)).is_empty());
    }

    #[test]
    fn nested_rings_make_a_hole() {
        let mut path = Path::polygon(&Rect::new(0.0, 0.0, 10.0, 10.0).corners());
        path.extend(
            Path::polygon(&Rect::new(2.0, 2.0, 2.0, 2.0).corners())
                .segments()
                .iter()
                .copied(),
        );
        let r = Region::from_path(&path, 0.1).unwrap();
        assert!(approx(r.area(), 96.0));
        assert!(!r.contains(3.0, 3.0));
        assert!(r.contains(6.0, 6.0));
    }

    #[test]
    fn degenerate_rings_are_dropped() {
        let path: Path = [PathSegment::MoveTo(Point2::new(1.0, 1.0)), PathSegment::Close]
            .into_iter()
            .collect();
        assert!(Region::from_path(&path, 0.1).unwrap().is_empty());
    }

    #[test]
    fn translate_keeps_area() {
        let r = Region::from_rect(&Rect::new(0.0, 0.0, 2.0, 3.0)).translate(5.0, 5.0);
        assert!(approx(r.area(), 6.0));
        let bb = r.bounding_rect().unwrap();
        assert!(approx(bb.x, 5.0) && approx(bb.y, 5.0));
    }

    #[test]
    fn region_path_round_trip() {
        let r = Region::from_rect(&Rect::new(1.0, 1.0, 3.0, 3.0));
        let back = Region::from_path(&r.to_path(None), 0.1).unwrap();
        assert!(approx(back.area(), 9.0));
    }
}
