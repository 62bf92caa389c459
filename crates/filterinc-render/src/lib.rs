//! CPU image-processing backend for filterinc, built on the `image` crate.

pub mod config;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod renderer;

pub use config::RenderConfig;
pub use renderer::ImageRenderer;
