use image::{Rgb, RgbImage, imageops};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use rand::Rng;
use snafu::{OptionExt, ensure};
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, extent::Extent, overlap::OverlapTable},
    consts::*,
    error::*,
    render::config::RenderConfig,
};

/// Draws overlap regions and isolated boxes onto a white canvas.
///
/// The random source is injected so that renders can be reproduced from a seed.
pub struct Renderer<R: Rng> {
    config: RenderConfig,
    rng: R,
}

impl<R: Rng> Renderer<R> {
    pub fn new(config: RenderConfig, rng: R) -> Self {
        Self { config, rng }
    }

    fn factor(&self) -> Result<i32, OverlapError> {
        i32::try_from(self.config.scale)
            .ok()
            .filter(|f| *f > 0)
            .context(InvalidScaleSnafu {
                scale: self.config.scale,
            })
    }

    /// Canvas size for already normalized boxes: the zero-seeded maximum on
    /// each axis times the scale.
    pub fn canvas_size(&self, boxes: &[Bbox]) -> Result<(u32, u32), OverlapError> {
        let factor = self.factor()?;
        let extent = Extent::of(boxes);
        // zero-seeded maxima are never negative
        let width = extent.max_x.saturating_mul(factor).unsigned_abs();
        let height = extent.max_z.saturating_mul(factor).unsigned_abs();
        Ok((width, height))
    }

    /// Renders normalized boxes using the overlaps detected on them.
    ///
    /// Boxes are visited in index order. Every overlap region of a box is
    /// filled red; a box without overlaps is filled with a fresh random green.
    /// The canvas is flipped vertically at the end so that `z` grows upwards.
    ///
    /// # Errors
    /// [`OverlapError::TableMismatch`] when `overlaps` was not detected on a
    /// collection of the same length as `boxes`.
    pub fn render(
        &mut self,
        boxes: &[Bbox],
        overlaps: &OverlapTable,
    ) -> Result<RgbImage, OverlapError> {
        ensure!(
            boxes.len() == overlaps.len(),
            TableMismatchSnafu {
                rows: overlaps.len(),
                boxes: boxes.len(),
            }
        );

        let factor = self.factor()?;
        let (width, height) = self.canvas_size(boxes)?;
        info!("rendering {} boxes on a {}x{} canvas", boxes.len(), width, height);

        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND_COLOR);
        if width == 0 || height == 0 {
            warn!("canvas is empty, nothing to draw");
            return Ok(canvas);
        }

        for (index, bbox) in boxes.iter().enumerate() {
            for event in overlaps.overlaps_of(index) {
                fill(&mut canvas, &event.region.scale(factor), OVERLAP_COLOR);
            }

            if overlaps.is_isolated(index) {
                let color = self.isolated_color();
                trace!("box {index} is isolated, color {:?}", color.0);
                fill(&mut canvas, &bbox.scale(factor), color);
            }
        }

        imageops::flip_vertical_in_place(&mut canvas);
        Ok(canvas)
    }

    fn isolated_color(&mut self) -> Rgb<u8> {
        let (low_min, low_max) = ISOLATED_LOW_CHANNEL;
        let (green_min, green_max) = ISOLATED_GREEN_CHANNEL;

        let r = self.rng.random_range(low_min..=low_max);
        let g = self.rng.random_range(green_min..=green_max);
        let b = self.rng.random_range(low_min..=low_max);
        Rgb([r, g, b])
    }
}

/// Fills the cells of `bbox` with both corners included, clipped to the canvas.
///
/// The vertical span is read from whichever `z` corner is smaller, so overlap
/// regions with swapped `z` bounds fill the same cells as their ordered form.
fn fill(canvas: &mut RgbImage, bbox: &Bbox, color: Rgb<u8>) {
    let left = i64::from(bbox.min.x.min(bbox.max.x)).max(0);
    let right = i64::from(bbox.min.x.max(bbox.max.x)).min(i64::from(canvas.width()) - 1);
    let top = i64::from(bbox.min.z.min(bbox.max.z)).max(0);
    let bottom = i64::from(bbox.min.z.max(bbox.max.z)).min(i64::from(canvas.height()) - 1);

    if left > right || top > bottom {
        return;
    }

    // clipped to the canvas, so every value fits both i32 and u32
    let rect = Rect::at(left as i32, top as i32)
        .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
    draw_filled_rect_mut(canvas, rect, color);
}
