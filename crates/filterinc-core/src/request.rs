use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ProcessError;
use crate::filter::FilterKind;
use crate::params::ParameterKey;

/// Encoded image bytes as delivered by the picker. Never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    bytes: Arc<[u8]>,
}

impl SourceImage {
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Everything a renderer needs for one pass: the source, the filter, and the
/// values of the parameters that filter reads.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessingRequest {
    source: SourceImage,
    filter: FilterKind,
    parameters: BTreeMap<ParameterKey, f32>,
}

impl ProcessingRequest {
    pub fn new(
        source: SourceImage,
        filter: FilterKind,
        parameters: BTreeMap<ParameterKey, f32>,
    ) -> Self {
        Self {
            source,
            filter,
            parameters,
        }
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn parameters(&self) -> &BTreeMap<ParameterKey, f32> {
        &self.parameters
    }

    pub fn parameter(&self, key: ParameterKey) -> Option<f32> {
        self.parameters.get(&key).copied()
    }
}

/// Rendered output as 8-bit sRGB RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl RenderedImage {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ProcessError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ProcessError::render(format!(
                "expected {expected} bytes for {width}x{height} RGBA, got {}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba: rgba.into(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

pub type ProcessingResult = Result<RenderedImage, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_image_validates_length() {
        assert!(RenderedImage::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = RenderedImage::from_rgba(2, 2, vec![0; 12]).unwrap_err();
        assert!(matches!(err, ProcessError::RenderFailure(_)));
    }

    #[test]
    fn source_clones_share_bytes() {
        let a = SourceImage::from_bytes(vec![1u8, 2, 3]);
        let b = a.clone();
        assert_eq!(a.bytes().as_ptr(), b.bytes().as_ptr());
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn missing_parameter_is_none() {
        let req = ProcessingRequest::new(
            SourceImage::from_bytes(Vec::new()),
            FilterKind::ColorInvert,
            BTreeMap::new(),
        );
        assert_eq!(req.parameter(ParameterKey::Radius), None);
        assert!(req.source().is_empty());
    }
}
