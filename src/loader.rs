use std::path::Path;

use tracing::{debug, info};

use filterinc_core::{ProcessError, SourceImage};
use filterinc_render::decode::sniff_format;

/// Read picked image bytes from disk and check they look like an image.
pub async fn load_path(path: &Path) -> Result<SourceImage, ProcessError> {
    let t0 = std::time::Instant::now();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ProcessError::decode(format!("{}: {err}", path.display())))?;
    debug!(?path, elapsed_ms = t0.elapsed().as_millis(), "read image bytes");
    load_bytes(bytes)
}

/// Wrap already-loaded bytes, rejecting anything without a known image header.
pub fn load_bytes(bytes: Vec<u8>) -> Result<SourceImage, ProcessError> {
    let format = sniff_format(&bytes)?;
    info!(?format, size = bytes.len(), "image data accepted");
    Ok(SourceImage::from_bytes(bytes))
}
