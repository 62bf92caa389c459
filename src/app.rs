use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::ImageFormat;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use filterinc_core::{
    EditSession, FilterKind, ImageProcessingPort, LoadToken, ParameterKey, ProcessError,
    ProcessingResult, SourceImage,
};
use filterinc_render::ImageRenderer;

use crate::loader;

/// Where a newly picked image comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    ImageSelected(ImageSource),
    FilterChanged(FilterKind),
    ParameterChanged(ParameterKey, f32),

    // Background completions
    ImageLoaded(LoadToken, Result<SourceImage, ProcessError>),
    ImageProcessed(u64, ProcessingResult),
}

/// Owns one editing session and the backend it renders with.
///
/// Image reads and renders run as tokio tasks and report back through an
/// internal channel; [`App::settle`] drains those completions. Must be driven
/// from inside a tokio runtime.
pub struct App {
    session: EditSession,
    port: Arc<dyn ImageProcessingPort>,
    share_format: ImageFormat,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    in_flight: usize,
    status_message: String,
    // A load error stays on the status line until the next user action.
    status_pinned: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_renderer(ImageRenderer::default())
    }

    pub fn with_renderer(renderer: ImageRenderer) -> Self {
        let share_format = renderer.config().share_format;
        Self::with_port(Arc::new(renderer), share_format)
    }

    pub fn with_port(port: Arc<dyn ImageProcessingPort>, share_format: ImageFormat) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        info!(port = port.name(), "editor ready");
        Self {
            session: EditSession::new(),
            port,
            share_format,
            tx,
            rx,
            in_flight: 0,
            status_message: "Tap to import a photo.".into(),
            status_pinned: false,
        }
    }

    pub fn update(&mut self, message: Message) {
        if matches!(
            message,
            Message::ImageSelected(_) | Message::FilterChanged(_) | Message::ParameterChanged(..)
        ) {
            self.status_pinned = false;
        }

        match message {
            Message::ImageSelected(ImageSource::Path(path)) => {
                let token = self.session.begin_image_load();
                self.status_message = format!("Loading {}...", path.display());
                self.spawn(async move {
                    let result = loader::load_path(&path).await;
                    Message::ImageLoaded(token, result)
                });
            }

            Message::ImageSelected(ImageSource::Bytes(bytes)) => {
                let token = self.session.begin_image_load();
                self.apply_load(token, loader::load_bytes(bytes));
            }

            Message::ImageLoaded(token, result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.apply_load(token, result);
            }

            Message::FilterChanged(filter) => {
                if self.session.on_filter_changed(filter) {
                    self.reprocess_image();
                }
            }

            Message::ParameterChanged(key, value) => {
                let before = self.session.store().get(key);
                let stored = self.session.on_parameter_changed(key, value);
                if stored != before && self.session.has_image() {
                    self.reprocess_image();
                }
            }

            Message::ImageProcessed(generation, result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                let failure = result.as_ref().err().cloned();
                if !self.session.finish_render(generation, result) || self.status_pinned {
                    return;
                }
                self.status_message = match failure {
                    None => self.session.filter().name().to_string(),
                    Some(err) => format!("Could not apply {}: {err}", self.session.filter()),
                };
            }
        }
    }

    fn apply_load(&mut self, token: LoadToken, result: Result<SourceImage, ProcessError>) {
        match self.session.complete_image_load(token, result) {
            Ok(true) => self.reprocess_image(),
            Ok(false) => {}
            Err(err) => {
                error!(%err, "image load failed");
                self.status_message = format!("Could not load photo: {err}");
                self.status_pinned = true;
            }
        }
    }

    /// Process background completions until nothing is outstanding.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(message) = self.rx.recv().await else {
                break;
            };
            self.update(message);
        }
    }

    fn reprocess_image(&mut self) {
        let Some(pending) = self.session.prepare_render() else {
            return;
        };
        let port = Arc::clone(&self.port);
        self.spawn(async move {
            let generation = pending.generation;
            let result = tokio::task::spawn_blocking(move || port.render(&pending.request))
                .await
                .unwrap_or_else(|err| Err(ProcessError::render(format!("render task: {err}"))));
            Message::ImageProcessed(generation, result)
        });
    }

    fn spawn(&mut self, task: impl Future<Output = Message> + Send + 'static) {
        self.in_flight += 1;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            if tx.send(task.await).is_err() {
                warn!("editor dropped before task completed");
            }
        });
    }

    /// Encode the latest rendered image for the share sheet.
    pub fn share_bytes(&self) -> Result<Vec<u8>> {
        let image = self
            .session
            .last_rendered()
            .context("nothing has been rendered yet")?;
        filterinc_render::encode::encode(image, self.share_format)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn filters(&self) -> &'static [FilterKind] {
        &FilterKind::ALL
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
