use snafu::prelude::*;

use crate::analysis::{bbox::Bbox, point::Point};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum OverlapError {
    #[snafu(display("Invalid geometry: min {} is above max {}", min, max))]
    InvalidGeometry { min: Point, max: Point },
    #[snafu(display("Normalization offset for {} minimum {} does not fit i32", axis, value))]
    OffsetOverflow { axis: &'static str, value: i32 },
    #[snafu(display("Translating box {} by ({}, {}) overflows i32", bbox, dx, dz))]
    CoordinateOverflow { bbox: Bbox, dx: i32, dz: i32 },
    #[snafu(display("Overlap table has {} rows for {} boxes", rows, boxes))]
    TableMismatch { rows: usize, boxes: usize },
    #[snafu(display("Read input `{}` error: {}", path, source))]
    ReadInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Line {}: box record is missing token {}", line_no, index))]
    MissingToken { line_no: usize, index: usize },
    #[snafu(display("Line {}: token `{}` is not an integer: {}", line_no, token, source))]
    ParseCoordinate {
        source: std::num::ParseIntError,
        line_no: usize,
        token: String,
    },
    #[snafu(display("Scale must be a positive integer that fits i32, got {}", scale))]
    InvalidScale { scale: u32 },
    #[snafu(display("Image Write `{}` error: {}", path, source))]
    ImageWrite {
        source: image::ImageError,
        path: String,
    },
    #[snafu(display("Write `{}` error: {}", path, source))]
    IoWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Report `{}` serialize error: {}", path, source))]
    ReportWrite {
        source: serde_json::Error,
        path: String,
    },
}
