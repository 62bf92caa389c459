use tracing::{debug, info, warn};

use crate::binding;
use crate::error::ProcessError;
use crate::filter::{FilterDescriptor, FilterKind};
use crate::params::{ParameterKey, ParameterStore};
use crate::port::ImageProcessingPort;
use crate::request::{ProcessingRequest, ProcessingResult, RenderedImage, SourceImage};

/// Where an editing session is in its lifecycle.
///
/// ```text
/// NoImage -> ImageLoaded -> Processing -> Rendered | Failed
///                               ^                  |
///                               +------------------+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NoImage,
    ImageLoaded,
    Processing,
    Rendered,
    Failed,
}

/// Identifies one asynchronous image load. Only the most recent token issued
/// by a session is honoured on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

/// A request handed out by [`EditSession::prepare_render`], tagged with the
/// generation its result must be reported against.
#[derive(Clone, Debug)]
pub struct PendingRender {
    pub generation: u64,
    pub request: ProcessingRequest,
}

/// State for editing one source image: the selected filter, the slider
/// values, and the most recent render outcome.
#[derive(Debug)]
pub struct EditSession {
    state: SessionState,
    filter: FilterKind,
    store: ParameterStore,
    source: Option<SourceImage>,
    load_token: u64,
    render_generation: u64,
    last_rendered: Option<RenderedImage>,
    last_error: Option<ProcessError>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::with_store(ParameterStore::new())
    }

    pub fn with_store(store: ParameterStore) -> Self {
        Self {
            state: SessionState::NoImage,
            filter: FilterKind::default(),
            store,
            source: None,
            load_token: 0,
            render_generation: 0,
            last_rendered: None,
            last_error: None,
        }
    }

    /// Install a newly selected image. Supersedes any load still in flight
    /// and any render of the previous image.
    pub fn on_image_selected(&mut self, image: SourceImage) {
        self.load_token += 1;
        self.install_source(image);
    }

    /// Start an asynchronous load. Any earlier token becomes stale.
    pub fn begin_image_load(&mut self) -> LoadToken {
        self.load_token += 1;
        debug!(token = self.load_token, "image load started");
        LoadToken(self.load_token)
    }

    /// Deliver the outcome of a load started with `token`.
    ///
    /// Returns `Ok(true)` when the image was installed and `Ok(false)` when the
    /// token was stale and the outcome discarded. A failed current load keeps
    /// the previous image and state and hands the error back.
    pub fn complete_image_load(
        &mut self,
        token: LoadToken,
        result: Result<SourceImage, ProcessError>,
    ) -> Result<bool, ProcessError> {
        if token.0 != self.load_token {
            warn!(
                token = token.0,
                current = self.load_token,
                "discarding stale image load"
            );
            return Ok(false);
        }
        match result {
            Ok(image) => {
                self.install_source(image);
                Ok(true)
            }
            Err(err) => {
                warn!(%err, "image load failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn install_source(&mut self, image: SourceImage) {
        info!(bytes = image.len(), "image selected");
        self.source = Some(image);
        self.render_generation += 1;
        self.last_error = None;
        self.state = SessionState::ImageLoaded;
    }

    /// Select a different filter. Slider values are left as they are.
    /// Returns whether there is an image to re-render.
    pub fn on_filter_changed(&mut self, filter: FilterKind) -> bool {
        info!(from = %self.filter, to = %filter, "filter changed");
        self.filter = filter;
        self.has_image()
    }

    /// Update one slider value, clamped to its bounds. Returns the stored value.
    pub fn on_parameter_changed(&mut self, key: ParameterKey, value: f32) -> f32 {
        let stored = self.store.set(key, value);
        debug!(%key, requested = value, stored, "parameter changed");
        stored
    }

    /// Build the request for the current filter, parameters and image and
    /// move to `Processing`. `None` while no image is loaded.
    pub fn prepare_render(&mut self) -> Option<PendingRender> {
        let source = self.source.as_ref()?;
        let request = binding::build_request(self.filter.descriptor(), &self.store, source);
        self.render_generation += 1;
        self.state = SessionState::Processing;
        Some(PendingRender {
            generation: self.render_generation,
            request,
        })
    }

    /// Apply a render outcome. Results for anything but the latest prepared
    /// generation are dropped and `false` is returned.
    ///
    /// A failure moves to `Failed` but keeps the last good image and the
    /// slider values so the user can retry.
    pub fn finish_render(&mut self, generation: u64, result: ProcessingResult) -> bool {
        if generation != self.render_generation || self.state != SessionState::Processing {
            debug!(
                generation,
                current = self.render_generation,
                "discarding stale render"
            );
            return false;
        }
        match result {
            Ok(image) => {
                debug!(w = image.width(), h = image.height(), "render applied");
                self.last_rendered = Some(image);
                self.last_error = None;
                self.state = SessionState::Rendered;
            }
            Err(err) => {
                warn!(%err, filter = %self.filter, "render failed");
                self.last_error = Some(err);
                self.state = SessionState::Failed;
            }
        }
        true
    }

    /// Prepare, render on `port`, and apply in one step.
    pub fn recompute(&mut self, port: &dyn ImageProcessingPort) -> Option<ProcessingResult> {
        let pending = self.prepare_render()?;
        debug!(port = port.name(), filter = %self.filter, "rendering");
        let result = port.render(&pending.request);
        self.finish_render(pending.generation, result.clone());
        Some(result)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    pub fn descriptor(&self) -> &'static FilterDescriptor {
        self.filter.descriptor()
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    pub fn last_rendered(&self) -> Option<&RenderedImage> {
        self.last_rendered.as_ref()
    }

    pub fn last_error(&self) -> Option<&ProcessError> {
        self.last_error.as_ref()
    }

    pub fn is_parameter_active(&self, key: ParameterKey) -> bool {
        binding::is_parameter_active(self.descriptor(), key)
    }

    /// Sliders and the filter picker stay disabled until something has rendered.
    pub fn controls_enabled(&self) -> bool {
        self.last_rendered.is_some()
    }

    pub fn slider_enabled(&self, key: ParameterKey) -> bool {
        self.controls_enabled() && self.is_parameter_active(key)
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
