use anyhow::Result;
use image::RgbaImage;

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params, to_u8};

const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Brown monochrome tone, mixed with the input by intensity.
pub struct SepiaTone;

impl FilterModule for SepiaTone {
    fn kind(&self) -> FilterKind {
        FilterKind::SepiaTone
    }

    fn apply(&self, mut input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let intensity = params.get(ParameterKey::Intensity);
        if intensity == 0.0 {
            return Ok(input);
        }

        for pixel in input.pixels_mut() {
            let rgb = [
                pixel.0[0] as f32 / 255.0,
                pixel.0[1] as f32 / 255.0,
                pixel.0[2] as f32 / 255.0,
            ];
            for (c, row) in SEPIA.iter().enumerate() {
                let toned = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
                pixel.0[c] = to_u8(rgb[c] + intensity * (toned - rgb[c]));
            }
        }
        Ok(input)
    }
}
