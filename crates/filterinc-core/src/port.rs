use crate::request::{ProcessingRequest, ProcessingResult};

/// An image-processing backend.
///
/// Implementations render `request.filter()` over the decoded source using
/// only the parameters present in the request, and report every failure as
/// an `Err` in the result rather than panicking.
pub trait ImageProcessingPort: Send + Sync {
    fn name(&self) -> &str;
    fn render(&self, request: &ProcessingRequest) -> ProcessingResult;
}
