//! Audit logging for health-check invocations.
//!
//! [`Logger`] is an explicitly constructed component that records a line to up
//! to two sinks: standard output and an append-only file on a mounted volume.
//! It owns a private `tracing` dispatcher rather than installing a global
//! subscriber, so the process entry point decides its lifetime and tests can
//! substitute an in-memory sink.
//!
//! Construction fails if the file sink cannot be opened; after construction,
//! individual write failures are swallowed and `info` never returns an error.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::dispatcher::{self, Dispatch};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Initialize the ambient application log on the global subscriber.
///
/// This is separate from the audit [`Logger`]: it carries startup and request
/// tracing for operators, at whatever filter the deployment asks for.
pub fn init_tracing(filter: &str, format: &str) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    if format == "json" {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Records health-check invocations to the configured sinks.
///
/// Cheap to clone; clones share the same sinks.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Build a logger from configuration, opening the file sink eagerly.
    ///
    /// An unopenable file path is a broken deployment and fails construction;
    /// the caller decides whether that is fatal.
    pub fn new(config: &LoggingConfig) -> Result<Self, LoggingError> {
        let mut layers: Vec<BoxedLayer> = Vec::new();
        if config.console {
            layers.push(fmt::layer().boxed());
        }
        if let Some(path) = config.file_path() {
            layers.push(file_layer(path)?);
        }
        Ok(Self::from_layers(layers))
    }

    /// Logger over a single caller-supplied writer. Used by tests to capture
    /// records in memory instead of touching the filesystem.
    pub fn from_writer<W>(make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::from_layers(vec![fmt::layer()
            .with_ansi(false)
            .with_writer(make_writer)
            .boxed()])
    }

    fn from_layers(layers: Vec<BoxedLayer>) -> Self {
        let subscriber = Registry::default().with(layers);
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Record one informational line to every configured sink.
    ///
    /// Best effort: a sink that fails to write loses the record, nothing is
    /// surfaced to the caller.
    pub fn info(&self, message: &str) {
        dispatcher::with_default(&self.dispatch, || {
            tracing::info!("{message}");
        });
    }
}

/// Open the file sink in append mode, creating the file and any missing
/// parent directories.
fn file_layer(path: &Path) -> Result<BoxedLayer, LoggingError> {
    let open_err = |source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(open_err)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)?;

    Ok(fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .boxed())
}
