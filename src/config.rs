//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines default paths
//! and the default log filter. `AppConfig` is the root configuration struct;
//! every field has a serde default so the service runs with no config file at
//! all, which is the normal case inside a container image.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "readyz=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default path for the file sink, an append-only log on the mounted volume
pub const DEFAULT_LOG_FILE: &str = "/mnt/data/app.log";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }
}

/// Logging configuration.
///
/// `console` and `file` describe the health-check audit logger's sinks;
/// `format` applies to the ambient application log.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Write audit records to standard output (default: true)
    #[serde(default = "LoggingConfig::default_console")]
    pub console: bool,
    /// File sink path; set to none to disable the file sink
    #[serde(default = "LoggingConfig::default_file")]
    pub file: Option<PathBuf>,
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
    /// Ambient log filter (e.g., "readyz=debug,tower_http=info"). CLI flag
    /// and RUST_LOG take precedence over this.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console: Self::default_console(),
            file: Self::default_file(),
            format: Self::default_format(),
            filter: None,
        }
    }
}

impl LoggingConfig {
    fn default_console() -> bool {
        true
    }

    fn default_file() -> Option<PathBuf> {
        Some(PathBuf::from(DEFAULT_LOG_FILE))
    }

    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Effective file sink path. TOML has no null, so an empty string in the
    /// config file disables the file sink.
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A present-but-unreadable or malformed file is still an error; only a
    /// missing file is treated as "run unconfigured".
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_container_expectations() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 3000);
        assert!(config.logging.console);
        assert_eq!(
            config.logging.file.as_deref(),
            Some(Path::new(DEFAULT_LOG_FILE))
        );
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn configured_filter_is_picked_up() {
        let config: AppConfig = toml::from_str(
            r#"
            [logging]
            filter = "readyz=trace"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter.as_deref(), Some("readyz=trace"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            port = 8080

            [logging]
            console = false
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert!(!config.logging.console);
        assert!(config.logging.file.is_some());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.http.port, 3000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "http = \"not a table\"").unwrap();
        assert!(matches!(
            AppConfig::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_file_path_disables_the_file_sink() {
        let config: AppConfig = toml::from_str(
            r#"
            [logging]
            file = ""
            "#,
        )
        .unwrap();
        assert!(config.logging.file_path().is_none());
    }
}
