use anyhow::Result;
use image::RgbaImage;

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params, blend_with, blur};

/// Softens and brightens: screen-blends a blurred copy over the input.
pub struct Bloom;

/// Softens and darkens: multiply-blends a blurred copy over the input.
pub struct Gloom;

impl FilterModule for Bloom {
    fn kind(&self) -> FilterKind {
        FilterKind::Bloom
    }

    fn apply(&self, input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let intensity = params.get(ParameterKey::Intensity);
        if intensity == 0.0 {
            return Ok(input);
        }
        let halo = blur(&input, params.get(ParameterKey::Radius));
        Ok(blend_with(input, &halo, |a, b| {
            let screen = 1.0 - (1.0 - a) * (1.0 - b);
            a + intensity * (screen - a)
        }))
    }
}

impl FilterModule for Gloom {
    fn kind(&self) -> FilterKind {
        FilterKind::Gloom
    }

    fn apply(&self, input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let intensity = params.get(ParameterKey::Intensity);
        if intensity == 0.0 {
            return Ok(input);
        }
        let shade = blur(&input, params.get(ParameterKey::Radius));
        Ok(blend_with(input, &shade, |a, b| {
            let multiply = a * b;
            a + intensity * (multiply - a)
        }))
    }
}
