//! Path segments and owned paths.
//!
//! A [`Path`] is a flat list of drawing commands: sub-paths start with
//! [`PathSegment::MoveTo`] and are terminated by [`PathSegment::Close`].
//! Curves are cubic Béziers only, which is all the circle approximation needs.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::rect::Rect;
use crate::traits::{Shape, TransformOps};
use nalgebra::{Matrix3, Point2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point2<Real>),
    LineTo(Point2<Real>),
    /// Two control points followed by the end point.
    CubicTo(Point2<Real>, Point2<Real>, Point2<Real>),
    Close,
}

impl PathSegment {
    /// Maps every point of the segment through a homogeneous 2D affine matrix.
    pub fn transform(&self, matrix: &Matrix3<Real>) -> PathSegment {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(matrix.transform_point(&p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(matrix.transform_point(&p)),
            PathSegment::CubicTo(c1, c2, p) => PathSegment::CubicTo(
                matrix.transform_point(&c1),
                matrix.transform_point(&c2),
                matrix.transform_point(&p),
            ),
            PathSegment::Close => PathSegment::Close,
        }
    }

    /// All points carried by the segment, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point2<Real>> {
        let points: ([Option<Point2<Real>>; 3], usize) = match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => ([Some(p), None, None], 1),
            PathSegment::CubicTo(c1, c2, p) => ([Some(c1), Some(c2), Some(p)], 3),
            PathSegment::Close => ([None, None, None], 0),
        };
        points.0.into_iter().take(points.1).flatten()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Point2<Real>]) -> Path {
        let mut path = Path::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.push(PathSegment::MoveTo(*first));
            path.segments.extend(iter.map(|p| PathSegment::LineTo(*p)));
            path.push(PathSegment::Close);
        }
        path
    }

    /// Bounding box of every point in the path, Bézier control points
    /// included, so the result always covers the curve.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut points = self.segments.iter().flat_map(|s| s.points());
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::from_corners(min, max))
    }

    /// Converts the path into polylines, one per sub-path.
    ///
    /// Cubic segments are split uniformly; the count follows Wang's bound
    /// `n = ceil(sqrt(3/4 * M / flatness))`, where `M` is the largest second
    /// difference of the control polygon, so no vertex strays more than
    /// `flatness` from the curve.
    pub fn flatten(&self, flatness: Real) -> Result<Vec<Vec<Point2<Real>>>, GeometryError> {
        if !(flatness > 0.0 && flatness.is_finite()) {
            tracing::warn!(flatness, "rejecting path flattening with invalid flatness");
            return Err(GeometryError::InvalidFlatness(flatness));
        }

        let mut rings = Vec::new();
        let mut current: Vec<Point2<Real>> = Vec::new();
        let mut start = Point2::origin();
        let mut last = Point2::origin();

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                    current.push(p);
                    start = p;
                    last = p;
                },
                PathSegment::LineTo(p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    current.push(p);
                    last = p;
                },
                PathSegment::CubicTo(c1, c2, p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    let steps = cubic_subdivisions(last, c1, c2, p, flatness);
                    for i in 1..=steps {
                        let t = i as Real / steps as Real;
                        current.push(cubic_point(last, c1, c2, p, t));
                    }
                    last = p;
                },
                PathSegment::Close => {
                    if !current.is_empty() {
                        rings.push(std::mem::take(&mut current));
                    }
                    last = start;
                },
            }
        }
        if !current.is_empty() {
            rings.push(current);
        }
        Ok(rings)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathSegment> for Path {
    fn extend<I: IntoIterator<Item = PathSegment>>(&mut self, iter: I) {
        self.segments.extend(iter);
    }
}

impl TransformOps for Path {
    fn transform(&self, matrix: &Matrix3<Real>) -> Self {
        self.segments.iter().map(|s| s.transform(matrix)).collect()
    }
}

impl Shape for Path {
    fn bounding_rect(&self) -> Rect {
        Path::bounding_rect(self).unwrap_or_default()
    }

    fn hit_test(&self, x: Real, y: Real) -> bool {
        self.to_region().contains(x, y)
    }

    fn to_path(&self, transform: Option<&Matrix3<Real>>) -> Path {
        match transform {
            Some(matrix) => self.transform(matrix),
            None => self.clone(),
        }
    }
}

fn cubic_point(
    p0: Point2<Real>,
    c1: Point2<Real>,
    c2: Point2<Real>,
    p3: Point2<Real>,
    t: Real,
) -> Point2<Real> {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point2::new(
        a * p0.x + b * c1.x + c * c2.x + d * p3.x,
        a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    )
}

fn cubic_subdivisions(
    p0: Point2<Real>,
    c1: Point2<Real>,
    c2: Point2<Real>,
    p3: Point2<Real>,
    flatness: Real,
) -> usize {
    let d1 = (p0.coords - 2.0 * c1.coords + c2.coords).norm();
    let d2 = (c1.coords - 2.0 * c2.coords + p3.coords).norm();
    let m = d1.max(d2);
    if m <= tolerance() {
        return 1;
    }
    ((0.75 * m / flatness).sqrt().ceil() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::Circle;

    #[test]
    fn polygon_is_closed() {
        let path = Path::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
        assert!(Path::polygon(&[]).is_empty());
    }

    #[test]
    fn flatten_straight_cubic_uses_one_step() {
        let path: Path = [
            PathSegment::MoveTo(Point2::new(0.0, 0.0)),
            PathSegment::CubicTo(
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(3.0, 0.0),
            ),
            PathSegment::Close,
        ]
        .into_iter()
        .collect();
        let rings = path.flatten(0.1).unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 2);
    }

    #[test]
    fn circle_quarters_follow_wangs_bound() {
        let circle = Circle::new(0.0, 0.0, 10.0);
        let path = circle.path(None);
        // M = |p0 - 2 c1 + c2| is the same for all four quarters
        for (flatness, steps) in [(2.0, 2), (0.5, 3), (0.1, 6)] {
            let mut last = Point2::origin();
            for segment in path.segments() {
                match *segment {
                    PathSegment::MoveTo(p) => last = p,
                    PathSegment::CubicTo(c1, c2, p) => {
                        let m = (last.coords - 2.0 * c1.coords + c2.coords)
                            .norm()
                            .max((c1.coords - 2.0 * c2.coords + p.coords).norm());
                        let bound = (0.75 * m / flatness).sqrt().ceil() as usize;
                        assert_eq!(cubic_subdivisions(last, c1, c2, p, flatness), bound);
                        assert_eq!(bound, steps, "flatness {flatness}");
                        last = p;
                    },
                    _ => {},
                }
            }

            let rings = path.flatten(flatness).unwrap();
            assert_eq!(rings.len(), 1);
            assert_eq!(rings[0].len(), 1 + 4 * steps);
            for chord in rings[0].windows(2) {
                let mid = nalgebra::center(&chord[0], &chord[1]);
                let gap = (circle.distance_to_center(mid.x, mid.y) - circle.radius()).abs();
                assert!(gap <= flatness, "flatness {flatness}: gap {gap}");
            }
        }
    }

    #[test]
    fn flatten_rejects_bad_flatness() {
        let path = Path::polygon(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(path.flatten(0.0), Err(GeometryError::InvalidFlatness(0.0)));
        assert!(path.flatten(Real::NAN).is_err());
    }

    #[test]
    fn bounding_rect_includes_control_points() {
        let path: Path = [
            PathSegment::MoveTo(Point2::new(0.0, 0.0)),
            PathSegment::CubicTo(
                Point2::new(0.0, -4.0),
                Point2::new(2.0, -4.0),
                Point2::new(2.0, 0.0),
            ),
        ]
        .into_iter()
        .collect();
        let bb = path.bounding_rect().unwrap();
        assert_eq!(bb, Rect::new(0.0, -4.0, 2.0, 4.0));
        assert!(Path::new().bounding_rect().is_none());
    }

    #[test]
    fn transform_moves_points() {
        let path = Path::polygon(&[Point2::new(1.0, 1.0), Point2::new(2.0, 1.0)]);
        let moved = path.translate(1.0, -1.0);
        assert_eq!(
            moved.segments()[0],
            PathSegment::MoveTo(Point2::new(2.0, 0.0))
        );
    }
}
