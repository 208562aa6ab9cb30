//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::logging::Logger;

/// Shared application state, cloneable across handlers.
///
/// Carries the application configuration and the audit logger. The logger is
/// constructed once by the process entry point and handed in here; handlers
/// never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub logger: Logger,
}

impl AppState {
    /// Creates a new application state from the given configuration and logger.
    pub fn new(config: AppConfig, logger: Logger) -> Self {
        Self {
            config: Arc::new(config),
            logger,
        }
    }
}
