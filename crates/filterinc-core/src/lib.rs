//! Filter parameter binding: which slider values a filter reads, how they are
//! packaged into a render request, and the editing session that drives it.

pub mod binding;
pub mod error;
pub mod filter;
pub mod params;
pub mod port;
pub mod request;
pub mod session;

pub use error::ProcessError;
pub use filter::{FilterDescriptor, FilterKind};
pub use params::{ParameterKey, ParameterStore, ParameterValues};
pub use port::ImageProcessingPort;
pub use request::{ProcessingRequest, ProcessingResult, RenderedImage, SourceImage};
pub use session::{EditSession, LoadToken, PendingRender, SessionState};
