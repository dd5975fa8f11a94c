use image::RgbImage;
use rand::Rng;
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, normalize::normalize, overlap::OverlapTable, point::Point},
    error::OverlapError,
    render::{Renderer, config::RenderConfig},
};

/// Output of one visualization run.
pub struct Visualization {
    /// Offset that was added to every box during normalization.
    pub offset: Point,
    /// Overlaps of the normalized boxes.
    pub overlaps: OverlapTable,
    /// The flipped canvas, origin at the bottom-left.
    pub canvas: RgbImage,
}

impl Visualization {
    /// `"<i> overlaps <j>"` lines in discovery order.
    pub fn diagnostics(&self) -> impl Iterator<Item = String> + '_ {
        self.overlaps.events().map(ToString::to_string)
    }
}

/// Normalize, detect, render.
///
/// Overlaps are detected once and the same table drives both the diagnostics
/// and the draw decisions.
pub struct Visualizer<R: Rng> {
    renderer: Renderer<R>,
}

impl<R: Rng> Visualizer<R> {
    pub fn new(config: RenderConfig, rng: R) -> Self {
        Self {
            renderer: Renderer::new(config, rng),
        }
    }

    /// Runs the whole pipeline, translating `boxes` in place.
    pub fn run(&mut self, boxes: &mut [Bbox]) -> Result<Visualization, OverlapError> {
        let span = info_span!("visualize", boxes = boxes.len());
        let _guard = span.enter();

        let offset = normalize(boxes)?;
        let overlaps = OverlapTable::detect(boxes);
        for event in overlaps.events() {
            debug!("{event}: {}", event.region);
        }

        let canvas = self.renderer.render(boxes, &overlaps)?;
        info!(
            "visualized {} boxes, {} overlap events, {} isolated",
            boxes.len(),
            overlaps.event_count(),
            overlaps.isolated().count()
        );

        Ok(Visualization {
            offset,
            overlaps,
            canvas,
        })
    }
}
