use anyhow::Result;
use image::{RgbaImage, imageops};

use filterinc_core::FilterKind;

use super::{FilterModule, Params};

pub struct ColorInvert;

impl FilterModule for ColorInvert {
    fn kind(&self) -> FilterKind {
        FilterKind::ColorInvert
    }

    fn apply(&self, mut input: RgbaImage, _params: Params<'_>) -> Result<RgbaImage> {
        imageops::invert(&mut input);
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_util::*;

    #[test]
    fn inverts_color_channels() {
        let input = solid(2, 2, [0, 100, 255]);
        let empty = params(&[]);
        let out = ColorInvert.apply(input, Params(&empty)).unwrap();
        let p = out.get_pixel(1, 1).0;
        assert_eq!(&p[..3], &[255, 155, 0]);
    }

    #[test]
    fn twice_is_identity() {
        let input = split(6, 4);
        let empty = params(&[]);
        let once = ColorInvert.apply(input.clone(), Params(&empty)).unwrap();
        let twice = ColorInvert.apply(once, Params(&empty)).unwrap();
        assert_eq!(twice, input);
    }
}
