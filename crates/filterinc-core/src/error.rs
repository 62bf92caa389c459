use thiserror::Error;

/// Why a load or render did not produce an image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The selected image bytes could not be read or recognised.
    #[error("image decode failure: {0}")]
    ImageDecodeFailure(String),
    /// The request asked for a filter or parameter the renderer cannot honour.
    #[error("unsupported filter input: {0}")]
    UnsupportedFilterInput(String),
    /// The source was accepted but no output image could be produced.
    #[error("render failure: {0}")]
    RenderFailure(String),
}

impl ProcessError {
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::ImageDecodeFailure(reason.into())
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedFilterInput(reason.into())
    }

    pub fn render(reason: impl Into<String>) -> Self {
        Self::RenderFailure(reason.into())
    }
}
