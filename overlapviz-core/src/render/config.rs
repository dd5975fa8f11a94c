use derive_builder::Builder;

use crate::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_SCALE};

/// Rendering and encoding parameters.
///
/// # Example
/// ```
/// use overlapviz_core::RenderConfigBuilder;
/// let config = RenderConfigBuilder::default().scale(4).build().unwrap();
/// assert_eq!(config.scale, 4);
/// assert_eq!(config.quality, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct RenderConfig {
    /// Pixels per box unit, applied to both axes.
    pub scale: u32,
    /// JPEG quality, 1 to 100.
    pub quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.scale {
            if scale == 0 || i32::try_from(scale).is_err() {
                return Err(format!("scale must be in 1..={}, got {scale}", i32::MAX));
            }
        }
        if let Some(quality) = self.quality {
            if !(1..=100).contains(&quality) {
                return Err(format!("quality must be in 1..=100, got {quality}"));
            }
        }
        Ok(())
    }
}
