pub mod analysis;
pub mod consts;
pub mod error;
pub mod layout;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use analysis::{
    bbox::Bbox,
    overlap::{OverlapEvent, OverlapTable},
    point::Point,
};
pub use pipeline::{Visualization, Visualizer};
pub use render::config::{RenderConfig, RenderConfigBuilder};
