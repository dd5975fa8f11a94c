use std::fmt;

use serde::Serialize;
use tracing::*;

use crate::analysis::bbox::Bbox;

/// One ordered overlap hit: box `index` shares `region` with box `other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OverlapEvent {
    pub index: usize,
    pub other: usize,
    pub region: Bbox,
}

impl fmt::Display for OverlapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlaps {}", self.index, self.other)
    }
}

/// Result of the all-pairs overlap pass, indexed by box position.
///
/// Both `(i, j)` and `(j, i)` are recorded, so every overlapping pair shows up
/// twice with the same region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlapTable {
    rows: Vec<Vec<OverlapEvent>>,
}

impl OverlapTable {
    /// Compares every box against every other box.
    ///
    /// The outer loop walks `i` ascending, the inner loop `j` ascending, and a
    /// box is only skipped when compared with itself by position. Two boxes
    /// with equal coordinates at different positions overlap each other.
    ///
    /// # Example
    /// ```
    /// use overlapviz_core::{Bbox, OverlapTable};
    /// let boxes = [Bbox::from_coords(0, 0, 10, 10), Bbox::from_coords(5, 5, 15, 15)];
    /// let table = OverlapTable::detect(&boxes);
    /// let lines: Vec<String> = table.events().map(|e| e.to_string()).collect();
    /// assert_eq!(lines, ["0 overlaps 1", "1 overlaps 0"]);
    /// ```
    pub fn detect(boxes: &[Bbox]) -> Self {
        let rows = boxes
            .iter()
            .enumerate()
            .map(|(index, bbox)| {
                boxes
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .filter_map(|(other, candidate)| {
                        bbox.intersect(candidate).map(|region| OverlapEvent {
                            index,
                            other,
                            region,
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let table = Self { rows };
        debug!(
            "detected {} overlap events among {} boxes, {} isolated",
            table.event_count(),
            table.len(),
            table.isolated().count()
        );
        table
    }

    /// Number of boxes the table was built from.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Overlaps of box `index` in ascending `other` order.
    ///
    /// # Panics
    /// When `index` is out of range.
    pub fn overlaps_of(&self, index: usize) -> &[OverlapEvent] {
        &self.rows[index]
    }

    /// A box is isolated when it overlaps nothing else in the collection.
    pub fn is_isolated(&self, index: usize) -> bool {
        self.rows[index].is_empty()
    }

    /// Indices of all isolated boxes, ascending.
    pub fn isolated(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_empty())
            .map(|(index, _)| index)
    }

    /// Every overlap event in discovery order.
    pub fn events(&self) -> impl Iterator<Item = &OverlapEvent> {
        self.rows.iter().flatten()
    }

    pub fn event_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &OverlapTable) -> Vec<(usize, usize)> {
        table.events().map(|e| (e.index, e.other)).collect()
    }

    #[test]
    fn test_detect_two_overlapping() {
        let boxes = [
            Bbox::from_coords(0, 0, 10, 10),
            Bbox::from_coords(5, 5, 15, 15),
        ];
        let table = OverlapTable::detect(&boxes);

        assert_eq!(pairs(&table), [(0, 1), (1, 0)]);
        assert_eq!(
            table.overlaps_of(0)[0].region,
            Bbox::from_coords(5, 10, 10, 5)
        );
        assert_eq!(table.overlaps_of(0)[0].region, table.overlaps_of(1)[0].region);
        assert!(!table.is_isolated(0) && !table.is_isolated(1));
        assert_eq!(table.isolated().count(), 0);
    }

    #[test]
    fn test_detect_discovery_order() {
        // 0 overlaps 2 and 3, 1 overlaps 3, 4 is alone
        let boxes = [
            Bbox::from_coords(0, 0, 4, 4),
            Bbox::from_coords(10, 10, 14, 14),
            Bbox::from_coords(3, 3, 6, 6),
            Bbox::from_coords(4, 0, 10, 10),
            Bbox::from_coords(30, 30, 31, 31),
        ];
        let table = OverlapTable::detect(&boxes);

        assert_eq!(
            pairs(&table),
            [(0, 2), (0, 3), (1, 3), (2, 0), (2, 3), (3, 0), (3, 1), (3, 2)]
        );
        assert_eq!(table.event_count(), 8);
        assert_eq!(table.isolated().collect::<Vec<_>>(), [4]);
        assert!(table.is_isolated(4));
    }

    #[test]
    fn test_detect_identical_boxes_overlap() {
        let boxes = [
            Bbox::from_coords(1, 1, 3, 3),
            Bbox::from_coords(1, 1, 3, 3),
        ];
        let table = OverlapTable::detect(&boxes);
        assert_eq!(pairs(&table), [(0, 1), (1, 0)]);
    }

    #[test]
    fn test_detect_single_and_empty() {
        let table = OverlapTable::detect(&[Bbox::from_coords(0, 0, 10, 10)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.events().count(), 0);
        assert!(table.is_isolated(0));

        let empty = OverlapTable::detect(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.events().count(), 0);
    }

    #[test]
    fn test_event_display() {
        let event = OverlapEvent {
            index: 3,
            other: 12,
            region: Bbox::from_coords(0, 0, 0, 0),
        };
        assert_eq!(event.to_string(), "3 overlaps 12");
    }
}
