use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use snafu::{ResultExt, ensure};
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, overlap::OverlapEvent, point::Point},
    error::*,
    layout::element::LabeledBox,
    pipeline::Visualization,
};

#[derive(Debug, Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct BoxReport<'a> {
    pub index: usize,
    pub label: &'a str,
    pub line_no: usize,
    /// Box as read from the input.
    pub source: Bbox,
    /// Box after normalization.
    pub bbox: Bbox,
    pub width: i64,
    pub height: i64,
    pub isolated: bool,
    pub overlaps: &'a [OverlapEvent],
}

/// Machine-readable summary of a run.
#[derive(Debug, Serialize)]
pub struct OverlapReport<'a> {
    pub offset: Point,
    pub canvas: CanvasSize,
    pub overlap_events: usize,
    pub boxes: Vec<BoxReport<'a>>,
}

impl<'a> OverlapReport<'a> {
    /// Pairs every parsed box with its normalized form and detected overlaps.
    ///
    /// `labeled` and `normalized` must be in the same order as the boxes the
    /// visualization was run on.
    ///
    /// # Errors
    /// [`OverlapError::TableMismatch`] when the three inputs differ in length.
    pub fn new(
        labeled: &'a [LabeledBox],
        normalized: &[Bbox],
        vis: &'a Visualization,
    ) -> Result<Self, OverlapError> {
        let rows = vis.overlaps.len();
        ensure!(
            labeled.len() == rows,
            TableMismatchSnafu {
                rows,
                boxes: labeled.len(),
            }
        );
        ensure!(
            normalized.len() == rows,
            TableMismatchSnafu {
                rows,
                boxes: normalized.len(),
            }
        );

        let boxes = labeled
            .iter()
            .zip(normalized)
            .enumerate()
            .map(|(index, (source, bbox))| BoxReport {
                index,
                label: &source.label,
                line_no: source.line_no,
                source: source.bbox,
                bbox: *bbox,
                width: bbox.width(),
                height: bbox.height(),
                isolated: vis.overlaps.is_isolated(index),
                overlaps: vis.overlaps.overlaps_of(index),
            })
            .collect();

        Ok(Self {
            offset: vis.offset,
            canvas: CanvasSize {
                width: vis.canvas.width(),
                height: vis.canvas.height(),
            },
            overlap_events: vis.overlaps.event_count(),
            boxes,
        })
    }

    pub fn write<P: AsRef<Path>>(&self, output: P) -> Result<(), OverlapError> {
        let output = output.as_ref();
        let file = File::create(output).context(IoWriteSnafu {
            path: output.to_string_lossy(),
        })?;

        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self).context(ReportWriteSnafu {
            path: output.to_string_lossy(),
        })?;
        writer.flush().context(IoWriteSnafu {
            path: output.to_string_lossy(),
        })?;

        info!("wrote overlap report to {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    use super::*;
    use crate::{Visualizer, parser::ParserConfig, parser::parse_str};

    #[test]
    fn test_report_contents() {
        let text = "a box -2 x 0 3 x 4\nb box 1 x 1 6 x 6\nc box 20 x 20 22 x 22\n";
        let labeled = parse_str(text, &ParserConfig::default()).unwrap().flatten();
        let mut boxes: Vec<Bbox> = labeled.iter().map(|b| b.bbox).collect();

        let mut visualizer = Visualizer::new(Default::default(), ChaCha8Rng::seed_from_u64(3));
        let vis = visualizer.run(&mut boxes).unwrap();
        let report = OverlapReport::new(&labeled, &boxes, &vis).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["offset"], json!({ "x": 2, "z": 0 }));
        assert_eq!(value["canvas"], json!({ "width": 24, "height": 22 }));
        assert_eq!(value["overlap_events"], 2);

        let first = &value["boxes"][0];
        assert_eq!(first["label"], "a");
        assert_eq!(first["line_no"], 1);
        assert_eq!(first["source"]["min"], json!({ "x": -2, "z": 0 }));
        assert_eq!(first["bbox"]["min"], json!({ "x": 0, "z": 0 }));
        assert_eq!(first["width"], 5);
        assert_eq!(first["height"], 4);
        assert_eq!(first["isolated"], false);
        assert_eq!(first["overlaps"][0]["other"], 1);

        let last = &value["boxes"][2];
        assert_eq!(last["label"], "c");
        assert_eq!(last["isolated"], true);
        assert_eq!(last["overlaps"], json!([]));
    }

    #[test]
    fn test_report_write() {
        let vis = Visualization {
            offset: Point::ORIGIN,
            overlaps: Default::default(),
            canvas: image::RgbImage::new(0, 0),
        };
        let report = OverlapReport::new(&[], &[], &vis).unwrap();

        let path = std::env::temp_dir().join(format!("overlapviz-{}-report.json", std::process::id()));
        report.write(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["boxes"], json!([]));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_report_length_mismatch() {
        let labeled = parse_str("a box 0 x 0 4 x 4\nb box 2 x 2 6 x 6\n", &ParserConfig::default())
            .unwrap()
            .flatten();
        let mut boxes: Vec<Bbox> = labeled.iter().map(|b| b.bbox).collect();

        let mut visualizer = Visualizer::new(Default::default(), ChaCha8Rng::seed_from_u64(3));
        let vis = visualizer.run(&mut boxes[..1]).unwrap();

        let err = OverlapReport::new(&labeled, &boxes[..1], &vis).unwrap_err();
        assert!(matches!(err, OverlapError::TableMismatch { rows: 1, boxes: 2 }));

        let err = OverlapReport::new(&labeled[..1], &boxes, &vis).unwrap_err();
        assert!(matches!(err, OverlapError::TableMismatch { rows: 1, boxes: 2 }));

        assert!(OverlapReport::new(&labeled[..1], &boxes[..1], &vis).is_ok());
    }
}
