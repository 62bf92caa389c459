use anyhow::Result;
use image::RgbaImage;

use filterinc_core::{FilterKind, ParameterKey};

use super::{FilterModule, Params, blur};

pub struct GaussianBlur;

impl FilterModule for GaussianBlur {
    fn kind(&self) -> FilterKind {
        FilterKind::GaussianBlur
    }

    fn apply(&self, input: RgbaImage, params: Params<'_>) -> Result<RgbaImage> {
        Ok(blur(&input, params.get(ParameterKey::Radius)))
    }
}
