//! Extent aggregates over a box collection.
//!
//! Every fold starts from 0 rather than from the first box, so `min_x` and
//! `min_z` never report a positive value and `max_x` and `max_z` never report a
//! negative one. An empty collection reports 0 on all four sides.

use crate::analysis::bbox::Bbox;

/// The four zero-seeded extents of a collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl Extent {
    pub fn of(boxes: &[Bbox]) -> Self {
        Self {
            min_x: min_x(boxes),
            min_z: min_z(boxes),
            max_x: max_x(boxes),
            max_z: max_z(boxes),
        }
    }
}

fn fold_min(boxes: &[Bbox], key: impl Fn(&Bbox) -> i32) -> i32 {
    boxes.iter().map(key).fold(0, |acc, v| if v < acc { v } else { acc })
}

fn fold_max(boxes: &[Bbox], key: impl Fn(&Bbox) -> i32) -> i32 {
    boxes.iter().map(key).fold(0, |acc, v| if v > acc { v } else { acc })
}

pub fn min_x(boxes: &[Bbox]) -> i32 {
    fold_min(boxes, |b| b.min.x)
}

pub fn max_x(boxes: &[Bbox]) -> i32 {
    fold_max(boxes, |b| b.max.x)
}

pub fn min_z(boxes: &[Bbox]) -> i32 {
    fold_min(boxes, |b| b.min.z)
}

pub fn max_z(boxes: &[Bbox]) -> i32 {
    fold_max(boxes, |b| b.max.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_empty() {
        assert_eq!(Extent::of(&[]), Extent::default());
    }

    #[test]
    fn test_extent_mixed_signs() {
        let boxes = [
            Bbox::from_coords(-5, 2, 3, 8),
            Bbox::from_coords(1, -7, 12, 4),
        ];
        assert_eq!(
            Extent::of(&boxes),
            Extent {
                min_x: -5,
                min_z: -7,
                max_x: 12,
                max_z: 8,
            }
        );
    }

    #[test]
    fn test_extent_positive_boxes_keep_zero_min() {
        // True minimum is (5, 9) but the fold is seeded at 0
        let boxes = [
            Bbox::from_coords(5, 9, 10, 20),
            Bbox::from_coords(7, 11, 8, 12),
        ];
        assert_eq!(min_x(&boxes), 0);
        assert_eq!(min_z(&boxes), 0);
        assert_eq!(max_x(&boxes), 10);
        assert_eq!(max_z(&boxes), 20);
    }

    #[test]
    fn test_extent_negative_boxes_keep_zero_max() {
        let boxes = [Bbox::from_coords(-10, -10, -2, -3)];
        assert_eq!(max_x(&boxes), 0);
        assert_eq!(max_z(&boxes), 0);
        assert_eq!(min_x(&boxes), -10);
        assert_eq!(min_z(&boxes), -10);
    }
}
