//! `CsgOperation`: folding regions together with one boolean rule.

use crate::errors::GeometryError;
use crate::region::Region;
use crate::traits::{BooleanOps, Shape};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CsgOperation {
    Union,
    Intersection,
    /// Everything after the first region is cut out of it, in order.
    Subtract,
    /// Symmetric difference.
    Xor,
}

impl CsgOperation {
    pub const ALL: [CsgOperation; 4] = [
        CsgOperation::Union,
        CsgOperation::Intersection,
        CsgOperation::Subtract,
        CsgOperation::Xor,
    ];

    /// Largest number of regions, the initial one included, the operation
    /// accepts. `None` means unbounded.
    pub const fn max_members(self) -> Option<usize> {
        match self {
            CsgOperation::Union | CsgOperation::Intersection => None,
            CsgOperation::Subtract | CsgOperation::Xor => Some(2),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CsgOperation::Union => "union",
            CsgOperation::Intersection => "intersection",
            CsgOperation::Subtract => "subtract",
            CsgOperation::Xor => "xor",
        }
    }

    /// The binary rule of the operation.
    pub fn combine(self, accumulator: &Region, other: &Region) -> Region {
        match self {
            CsgOperation::Union => accumulator.union(other),
            CsgOperation::Intersection => accumulator.intersection(other),
            CsgOperation::Subtract => accumulator.difference(other),
            CsgOperation::Xor => accumulator.xor(other),
        }
    }

    /// Folds `others` into `initial` left to right.
    ///
    /// With no `others` the result is `initial` unchanged. The total member
    /// count is checked against [`CsgOperation::max_members`] before any
    /// work is done.
    ///
    /// # Example
    /// ```
    /// use circsg::{csg::CsgOperation, rect::Rect, region::Region};
    ///
    /// let a = Region::from_rect(&Rect::new(0.0, 0.0, 10.0, 10.0));
    /// let b = Region::from_rect(&Rect::new(5.0, 5.0, 10.0, 10.0));
    /// let xor = CsgOperation::Xor.apply(&a, &[b]).unwrap();
    /// assert!((xor.area() - 150.0).abs() < 1e-6);
    /// ```
    pub fn apply(self, initial: &Region, others: &[Region]) -> Result<Region, GeometryError> {
        self.check_members(others.len() + 1)?;
        if others.is_empty() {
            return Ok(initial.clone());
        }
        let result = others
            .iter()
            .fold(initial.clone(), |acc, other| self.combine(&acc, other));
        tracing::debug!(
            operation = self.name(),
            members = others.len() + 1,
            area = result.area(),
            "csg fold"
        );
        Ok(result)
    }

    /// Like [`CsgOperation::apply`], for any mix of shapes. Each shape is
    /// converted with [`Shape::to_region`].
    pub fn apply_shapes(
        self,
        initial: &dyn Shape,
        others: &[&dyn Shape],
    ) -> Result<Region, GeometryError> {
        self.check_members(others.len() + 1)?;
        let others: Vec<Region> = others.iter().map(|shape| shape.to_region()).collect();
        self.apply(&initial.to_region(), &others)
    }

    fn check_members(self, given: usize) -> Result<(), GeometryError> {
        match self.max_members() {
            Some(max) if given > max => {
                tracing::warn!(operation = self.name(), max, given, "too many csg members");
                Err(GeometryError::TooManyMembers {
                    operation: self.name(),
                    max,
                    given,
                })
            },
            _ => Ok(()),
        }
    }
}

impl Display for CsgOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CsgOperation {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(CsgOperation::Union),
            "intersection" | "intersect" => Ok(CsgOperation::Intersection),
            "subtract" | "difference" => Ok(CsgOperation::Subtract),
            "xor" => Ok(CsgOperation::Xor),
            _ => Err(GeometryError::UnknownOperation(s.to_string())),
        }
    }
}
