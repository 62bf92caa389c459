use tracing::{debug, warn};

use filterinc_core::{
    ImageProcessingPort, ProcessError, ProcessingRequest, ProcessingResult, RenderedImage,
};

use crate::config::RenderConfig;
use crate::decode::decode_source;
use crate::filters::{Params, module_for};

/// Renders requests on the CPU with the `image` crate.
#[derive(Clone, Debug, Default)]
pub struct ImageRenderer {
    config: RenderConfig,
}

impl ImageRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl ImageProcessingPort for ImageRenderer {
    fn name(&self) -> &str {
        "image-cpu"
    }

    fn render(&self, request: &ProcessingRequest) -> ProcessingResult {
        let filter = request.filter();
        let descriptor = filter.descriptor();

        if let Some(key) = request.parameters().keys().find(|&&k| !descriptor.accepts(k)) {
            return Err(ProcessError::unsupported(format!(
                "{filter} does not accept {key}"
            )));
        }
        let module = module_for(filter).ok_or_else(|| {
            ProcessError::unsupported(format!("{filter} is not available in this renderer"))
        })?;

        let t0 = std::time::Instant::now();
        let input = decode_source(request.source(), self.config.preview_max_edge).map_err(|err| {
            warn!(err = %format!("{err:#}"), "source did not decode");
            ProcessError::render(format!("{err:#}"))
        })?;

        let output = module
            .apply(input, Params(request.parameters()))
            .map_err(|err| ProcessError::render(format!("{filter}: {err:#}")))?;

        let (width, height) = output.dimensions();
        if width == 0 || height == 0 {
            return Err(ProcessError::render(format!(
                "{filter} produced an empty image"
            )));
        }
        debug!(
            %filter,
            width,
            height,
            elapsed_ms = t0.elapsed().as_millis(),
            "rendered"
        );
        RenderedImage::from_rgba(width, height, output.into_raw())
    }
}
