pub mod canvas;
pub mod config;
pub mod encode;

pub use canvas::Renderer;
pub use encode::save_jpeg;
