use std::io::Cursor;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use filterinc_core::RenderedImage;

/// Encode a rendered image for sharing.
pub fn encode(image: &RenderedImage, format: ImageFormat) -> Result<Vec<u8>> {
    let rgba = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .context("rendered image buffer has the wrong size")?;

    // JPEG has no alpha channel.
    let dynamic = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
        _ => DynamicImage::ImageRgba8(rgba),
    };

    let mut bytes = Vec::new();
    dynamic
        .write_to(&mut Cursor::new(&mut bytes), format)
        .with_context(|| format!("encode rendered image as {format:?}"))?;

    debug!(size = bytes.len(), ?format, "encoded rendered image");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_output_decodes_back() {
        let img = RenderedImage::from_rgba(3, 2, vec![128; 24]).unwrap();
        let bytes = encode(&img, ImageFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn jpeg_drops_alpha() {
        let img = RenderedImage::from_rgba(8, 8, vec![200; 256]).unwrap();
        let bytes = encode(&img, ImageFormat::Jpeg).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }
}
