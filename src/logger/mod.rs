//! Logger module
//!
//! Provides logging utilities for the helpers including:
//! - Structured records for missed static assets
//! - Injectable sinks (tracing-backed or in-memory)
//! - Process-wide subscriber setup
//! - Error helpers for internal diagnostics

mod record;
mod sink;

pub use record::LogRecord;
pub use sink::{LogSink, MemorySink, TracingSink};

use crate::config::LoggingConfig;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Should be called
/// once at application startup; a second call returns an error.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.format == "json" {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.compact()).try_init()
    }
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_server_start(addr: &std::net::SocketAddr, config: &crate::config::Config) {
    tracing::info!(
        addr = %addr,
        layout = %config.templates.layout,
        assets_root = %config.assets.root,
        assets_prefix = %config.assets.prefix,
        "server started"
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}
