use anyhow::Result;
use image::RgbaImage;

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params, blur, to_u8};

/// Unsharp mask applied to luma only, so edges gain contrast without color
/// fringes.
pub struct SharpenLuminance;

fn luma(p: &[u8; 4]) -> f32 {
    (0.2126 * p[0] as f32 + 0.7152 * p[1] as f32 + 0.0722 * p[2] as f32) / 255.0
}

impl FilterModule for SharpenLuminance {
    fn kind(&self) -> FilterKind {
        FilterKind::SharpenLuminance
    }

    fn apply(&self, mut input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let amount = params.get(ParameterKey::Sharpness);
        if amount == 0.0 {
            return Ok(input);
        }

        let blurred = blur(&input, params.get(ParameterKey::Radius));
        for (pixel, soft) in input.pixels_mut().zip(blurred.pixels()) {
            let detail = luma(&pixel.0) - luma(&soft.0);
            let lift = amount * detail;
            for c in 0..3 {
                pixel.0[c] = to_u8(pixel.0[c] as f32 / 255.0 + lift);
            }
        }
        Ok(input)
    }
}
