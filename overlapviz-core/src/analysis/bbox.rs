use std::fmt;

use serde::Serialize;
use snafu::{OptionExt, ensure};

use crate::{
    analysis::point::Point,
    error::{CoordinateOverflowSnafu, InvalidGeometrySnafu, OverlapError},
};

/// A 2D axis-aligned bounding box on the x/z plane, represented by minimum and maximum points.
///
/// Coordinates are inclusive integers: a box from `(0, 0)` to `(0, 0)` still
/// covers one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Bbox {
    /// The minimum point of the bounding box (bottom-left corner).
    pub min: Point,
    /// The maximum point of the bounding box (top-right corner).
    pub max: Point,
}

impl Bbox {
    /// Creates a new bounding box from minimum and maximum points.
    ///
    /// No ordering is enforced, use [`Bbox::try_new`] for untrusted input.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::analysis::{bbox::Bbox, point::Point};
    /// let bbox = Bbox::new(Point::new(0, 0), Point::new(10, 5));
    /// assert_eq!(bbox.width(), 10);
    /// ```
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a bounding box from raw `min_x, min_z, max_x, max_z` values.
    pub const fn from_coords(min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Self {
        Self::new(Point::new(min_x, min_z), Point::new(max_x, max_z))
    }

    /// Creates a new bounding box, rejecting inverted corners.
    ///
    /// # Errors
    /// [`OverlapError::InvalidGeometry`] when `min.x > max.x` or `min.z > max.z`.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::analysis::{bbox::Bbox, point::Point};
    /// assert!(Bbox::try_new(Point::new(0, 0), Point::new(4, 4)).is_ok());
    /// assert!(Bbox::try_new(Point::new(5, 0), Point::new(4, 4)).is_err());
    /// ```
    pub fn try_new(min: Point, max: Point) -> Result<Self, OverlapError> {
        let bbox = Self::new(min, max);
        ensure!(bbox.is_valid(), InvalidGeometrySnafu { min, max });
        Ok(bbox)
    }

    /// Whether `min` is below or equal to `max` on both axes.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.z <= self.max.z
    }

    /// Returns the box with each axis sorted so that `min <= max`.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::from_coords(8, 1, 2, 6).repaired();
    /// assert_eq!(bbox, Bbox::from_coords(2, 1, 8, 6));
    /// ```
    pub fn repaired(&self) -> Self {
        let lo = self.min.as_ivec2().min(self.max.as_ivec2());
        let hi = self.min.as_ivec2().max(self.max.as_ivec2());
        Self::new(lo.into(), hi.into())
    }

    /// Horizontal span `max.x - min.x`, widened so that it cannot overflow.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max.z) - i64::from(self.min.z)
    }

    /// Computes the region shared by this bounding box and another.
    ///
    /// Boxes that only touch along an edge or at a corner still overlap; the
    /// result then has zero extent on that axis.
    ///
    /// The returned box carries the larger `z` bound in `min.z` and the smaller
    /// one in `max.z`. Both corners still describe the same cells; renderers
    /// read the vertical span as `min(min.z, max.z)..=max(min.z, max.z)`.
    ///
    /// # Returns
    /// `None` when the boxes share no point, otherwise the overlap region.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::analysis::bbox::Bbox;
    /// let a = Bbox::from_coords(0, 0, 10, 10);
    /// let b = Bbox::from_coords(5, 5, 15, 15);
    /// let region = a.intersect(&b).unwrap();
    /// assert_eq!(region, Bbox::from_coords(5, 10, 10, 5));
    ///
    /// let far = Bbox::from_coords(11, 0, 20, 10);
    /// assert!(a.intersect(&far).is_none());
    /// ```
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let lo = self.min.as_ivec2().max(other.min.as_ivec2());
        let hi = self.max.as_ivec2().min(other.max.as_ivec2());

        if lo.x > hi.x || lo.y > hi.y {
            return None;
        }

        Some(Self::new(Point::new(lo.x, hi.y), Point::new(hi.x, lo.y)))
    }

    /// Moves both corners by `(dx, dz)` in place.
    ///
    /// # Errors
    /// [`OverlapError::CoordinateOverflow`] when a moved coordinate leaves the
    /// `i32` range; the box is left untouched.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::analysis::bbox::Bbox;
    /// let mut bbox = Bbox::from_coords(-5, -5, 5, 5);
    /// bbox.translate(5, 5).unwrap();
    /// assert_eq!(bbox, Bbox::from_coords(0, 0, 10, 10));
    ///
    /// let mut edge = Bbox::from_coords(0, 0, i32::MAX, 1);
    /// assert!(edge.translate(1, 0).is_err());
    /// ```
    pub fn translate(&mut self, dx: i32, dz: i32) -> Result<(), OverlapError> {
        let moved = (|| {
            Some(Self::from_coords(
                self.min.x.checked_add(dx)?,
                self.min.z.checked_add(dz)?,
                self.max.x.checked_add(dx)?,
                self.max.z.checked_add(dz)?,
            ))
        })()
        .context(CoordinateOverflowSnafu {
            bbox: *self,
            dx,
            dz,
        })?;

        *self = moved;
        Ok(())
    }

    /// Multiplies every coordinate by `factor`, saturating at the `i32` bounds.
    pub fn scale(&self, factor: i32) -> Self {
        Self::from_coords(
            self.min.x.saturating_mul(factor),
            self.min.z.saturating_mul(factor),
            self.max.x.saturating_mul(factor),
            self.max.z.saturating_mul(factor),
        )
    }

    /// Checks whether a column position lies inside the box, edges included.
    #[cfg(test)]
    pub(crate) fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.min, self.max)
    }
}
