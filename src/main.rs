//! hello-service: a minimal JSON greeting service.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration from a TOML file, initializes tracing, builds the Axum router
//! and serves it until a shutdown signal arrives.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hello_service::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hello_service::create_router;
use hello_service::http::start_server;

/// hello-service: health probe and versioned greeting API
#[derive(Parser, Debug)]
#[command(name = "hello-service", version, about)]
struct Args {
    /// Path to configuration file (defaults apply if the default file is absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hello_service=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Bind host, overriding http.host
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding http.port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicitly named file must exist; the default one is optional
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        config = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
