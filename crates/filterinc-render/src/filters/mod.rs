mod color_invert;
mod gaussian_blur;
mod glow;
mod pixellate;
mod sepia;
mod sharpen_luminance;
mod vignette;

pub use color_invert::ColorInvert;
pub use gaussian_blur::GaussianBlur;
pub use glow::{Bloom, Gloom};
pub use pixellate::Pixellate;
pub use sepia::SepiaTone;
pub use sharpen_luminance::SharpenLuminance;
pub use vignette::Vignette;

use std::collections::BTreeMap;

use anyhow::Result;
use image::{RgbaImage, imageops};

use filterinc_core::{FilterKind, ParameterKey};

/// Parameter values for one render, falling back to the slider default for
/// any key the request left out.
#[derive(Clone, Copy, Debug)]
pub struct Params<'a>(pub &'a BTreeMap<ParameterKey, f32>);

impl Params<'_> {
    pub fn get(&self, key: ParameterKey) -> f32 {
        self.0.get(&key).copied().unwrap_or_else(|| key.default_value())
    }
}

/// One filter implementation.
pub trait FilterModule: Send + Sync {
    fn kind(&self) -> FilterKind;
    fn apply(&self, input: RgbaImage, params: Params<'_>) -> Result<RgbaImage>;
}

/// The module rendering `kind`, if this backend provides one.
pub fn module_for(kind: FilterKind) -> Option<&'static dyn FilterModule> {
    let module: &'static dyn FilterModule = match kind {
        FilterKind::Bloom => &Bloom,
        FilterKind::ColorInvert => &ColorInvert,
        FilterKind::Gloom => &Gloom,
        FilterKind::GaussianBlur => &GaussianBlur,
        FilterKind::Pixellate => &Pixellate,
        FilterKind::SepiaTone => &SepiaTone,
        FilterKind::SharpenLuminance => &SharpenLuminance,
        FilterKind::Vignette => &Vignette,
        FilterKind::Crystallize => return None,
    };
    Some(module)
}

/// Gaussian-ish blur whose cost does not grow with `sigma`. Sigma is capped
/// at half the shorter edge; beyond that the result no longer changes.
pub(crate) fn blur(input: &RgbaImage, sigma: f32) -> RgbaImage {
    let (w, h) = input.dimensions();
    if w < 2 || h < 2 || sigma <= 0.0 {
        return input.clone();
    }
    let cap = (w.min(h) as f32 / 2.0).max(1.0);
    imageops::fast_blur(input, sigma.min(cap))
}

/// Per-channel blend of `base` and `other` in normalized space. Alpha is
/// taken from `base`.
pub(crate) fn blend_with(
    mut base: RgbaImage,
    other: &RgbaImage,
    f: impl Fn(f32, f32) -> f32,
) -> RgbaImage {
    for (dst, src) in base.pixels_mut().zip(other.pixels()) {
        for c in 0..3 {
            let a = dst.0[c] as f32 / 255.0;
            let b = src.0[c] as f32 / 255.0;
            dst.0[c] = to_u8(f(a, b));
        }
    }
    base
}

pub(crate) fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    pub fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    /// Left half black, right half white.
    pub fn split(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, _| {
            if x < w / 2 {
                image::Rgba([0, 0, 0, 255])
            } else {
                image::Rgba([255, 255, 255, 255])
            }
        })
    }

    pub fn params(pairs: &[(ParameterKey, f32)]) -> BTreeMap<ParameterKey, f32> {
        pairs.iter().copied().collect()
    }
}
