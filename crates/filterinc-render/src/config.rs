use image::ImageFormat;

/// Preview longest edge used when nothing else is configured.
pub const DEFAULT_PREVIEW_MAX_EDGE: u32 = 2048;

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Sources whose longest edge exceeds this are downsampled before
    /// filtering. `None` renders at full resolution.
    pub preview_max_edge: Option<u32>,
    /// Container used by [`crate::encode::encode`] when sharing.
    pub share_format: ImageFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview_max_edge: Some(DEFAULT_PREVIEW_MAX_EDGE),
            share_format: ImageFormat::Png,
        }
    }
}
