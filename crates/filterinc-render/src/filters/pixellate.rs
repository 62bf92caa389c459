use anyhow::Result;
use image::RgbaImage;
use image::imageops::{self, FilterType};

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params};

/// Replaces each `scale` x `scale` block with its average color.
pub struct Pixellate;

impl FilterModule for Pixellate {
    fn kind(&self) -> FilterKind {
        FilterKind::Pixellate
    }

    fn apply(&self, input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let block = params.get(ParameterKey::Scale).round().max(1.0) as u32;
        if block == 1 {
            return Ok(input);
        }

        let (w, h) = input.dimensions();
        let small_w = w.div_ceil(block).max(1);
        let small_h = h.div_ceil(block).max(1);
        let small = imageops::resize(&input, small_w, small_h, FilterType::Triangle);
        let blocky = imageops::resize(&small, small_w * block, small_h * block, FilterType::Nearest);
        Ok(imageops::crop_imm(&blocky, 0, 0, w, h).to_image())
    }
}
