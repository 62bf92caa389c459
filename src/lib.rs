//! Headless controller for the filterinc photo filter editor.
//!
//! A presentation layer feeds user actions into [`App::update`] as
//! [`Message`]s and reads back the session state, the latest rendered image,
//! and which controls are enabled.

pub mod app;
pub mod loader;

pub use app::{App, ImageSource, Message};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, honouring `RUST_LOG` and
/// defaulting to `info`. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
