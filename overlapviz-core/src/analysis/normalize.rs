use snafu::OptionExt;
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, extent::Extent, point::Point},
    error::{OffsetOverflowSnafu, OverlapError},
};

/// Shifts every box by the absolute value of the zero-seeded minimum.
///
/// Collections with a negative coordinate end up with that minimum on 0.
/// Collections that are already non-negative get an offset of `(0, 0)` and keep
/// their position, even when no box touches an axis.
///
/// # Returns
/// The offset that was added to every box.
///
/// # Errors
/// - [`OverlapError::OffsetOverflow`] when a minimum is `i32::MIN`.
/// - [`OverlapError::CoordinateOverflow`] when a shifted maximum leaves the
///   `i32` range.
///
/// On error no box is moved.
pub fn normalize(boxes: &mut [Bbox]) -> Result<Point, OverlapError> {
    let extent = Extent::of(boxes);
    let offset = Point::new(
        extent.min_x.checked_abs().context(OffsetOverflowSnafu {
            axis: "x",
            value: extent.min_x,
        })?,
        extent.min_z.checked_abs().context(OffsetOverflowSnafu {
            axis: "z",
            value: extent.min_z,
        })?,
    );

    let moved = boxes
        .iter()
        .map(|bbox| {
            let mut bbox = *bbox;
            bbox.translate(offset.x, offset.z)?;
            Ok(bbox)
        })
        .collect::<Result<Vec<_>, OverlapError>>()?;
    boxes.copy_from_slice(&moved);

    debug!("normalized {} boxes by offset {}", boxes.len(), offset);
    Ok(offset)
}
