//! readyz: container health-check endpoint service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file (falling back to defaults when none
//! is shipped in the image), initializes tracing, constructs the audit
//! logger, and starts the HTTP server.

use clap::Parser;

use readyz::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use readyz::logging::{init_tracing, Logger};
use readyz::routes::create_router;
use readyz::server::start_server;
use readyz::state::AppState;

/// readyz: a container health-check endpoint service
#[derive(Parser, Debug)]
#[command(name = "readyz", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "readyz=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > config > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .or_else(|| config.logging.filter.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging.format);

    tracing::info!("Loaded configuration");

    // An unopenable audit log path is a broken deployment; fail at startup
    // instead of per request.
    let logger = Logger::new(&config.logging)?;
    tracing::info!(
        console = config.logging.console,
        file = ?config.logging.file_path(),
        "Initialized audit logger"
    );

    // Create application state and router
    let state = AppState::new(config.clone(), logger);
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
