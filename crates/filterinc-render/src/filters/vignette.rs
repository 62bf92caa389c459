use anyhow::Result;
use image::RgbaImage;

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params};

/// Radius at which the vignette no longer reaches the frame.
const MAX_RADIUS: f32 = 200.0;

/// Darkens toward the corners. Falloff starts at `radius / 200` of the
/// half-diagonal and reaches full strength at the corners.
pub struct Vignette;

impl FilterModule for Vignette {
    fn kind(&self) -> FilterKind {
        FilterKind::Vignette
    }

    fn apply(&self, mut input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        let intensity = params.get(ParameterKey::Intensity);
        let start = (params.get(ParameterKey::Radius) / MAX_RADIUS).clamp(0.0, 1.0);
        if intensity == 0.0 || start >= 1.0 {
            return Ok(input);
        }

        let (w, h) = input.dimensions();
        let cx = w as f32 / 2.0;
        let cy = h as f32 / 2.0;
        let half_diag = (cx * cx + cy * cy).sqrt().max(f32::EPSILON);

        for (x, y, pixel) in input.enumerate_pixels_mut() {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let d = (dx * dx + dy * dy).sqrt() / half_diag;
            let t = ((d - start) / (1.0 - start)).clamp(0.0, 1.0);
            let factor = 1.0 - intensity * t * t;
            for c in 0..3 {
                pixel.0[c] = (pixel.0[c] as f32 * factor).round() as u8;
            }
        }
        Ok(input)
    }
}
