use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use filterinc_core::{ProcessError, SourceImage};

/// Identify the container of freshly picked bytes. This is the load-time
/// check; a recognised header does not guarantee the body decodes.
pub fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, ProcessError> {
    if bytes.is_empty() {
        return Err(ProcessError::decode("no image data"));
    }
    image::guess_format(bytes).map_err(|err| ProcessError::decode(err.to_string()))
}

/// Decode a source to RGBA8, shrinking it so the longest edge fits within
/// `max_edge` when one is given.
pub fn decode_source(source: &SourceImage, max_edge: Option<u32>) -> Result<RgbaImage> {
    let t0 = std::time::Instant::now();
    let img = image::load_from_memory(source.bytes()).context("failed to decode source image")?;
    debug!(
        elapsed_ms = t0.elapsed().as_millis(),
        width = img.width(),
        height = img.height(),
        "source decode"
    );

    let img = match max_edge {
        Some(edge) if img.width().max(img.height()) > edge => {
            let scaled = img.resize(edge, edge, FilterType::Triangle);
            debug!(
                width = scaled.width(),
                height = scaled.height(),
                "downsampled for preview"
            );
            scaled
        }
        _ => img,
    };

    Ok(img.to_rgba8())
}
