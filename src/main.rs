//! Demo API server.
//!
//! Wires the two example handlers into a registry and serves them:
//! `GET /weather/<station-id>` relays NOAA current conditions as XML,
//! `POST /logger` echoes form fields back as JSON. Everything else hits
//! the default 404 handler.

use std::path::PathBuf;

use clap::Parser;

use api_server::config::{load_config, ServerConfig};
use api_server::dispatch::HandlerRegistry;
use api_server::handlers::logger::{self, LOGGER_TAG};
use api_server::handlers::weather::{WeatherHandler, WEATHER_TAG};
use api_server::http::{respond_json, respond_xml, ApiServer};
use api_server::observability::logging;

#[derive(Parser)]
#[command(name = "api-server")]
#[command(about = "Minimal HTTP API server with tag-based dispatch", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the read timeout in seconds.
    #[arg(long)]
    read_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = args.host {
        config.listener.host = host;
    }
    if let Some(port) = args.port {
        config.listener.port = port;
    }
    if let Some(read_timeout) = args.read_timeout {
        config.timeouts.read_secs = read_timeout;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "api-server starting");
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        read_timeout_secs = config.timeouts.read_secs,
        "Configuration loaded"
    );

    let mut registry = HandlerRegistry::new();

    let weather = WeatherHandler::noaa();
    registry.register(
        WEATHER_TAG,
        respond_xml(move |request| {
            let weather = weather.clone();
            async move { weather.current_observation(request).await }
        }),
    );
    registry.register(LOGGER_TAG, respond_json(logger::log_post_data));

    let server = ApiServer::new(config, registry);
    server.bind_and_run().await?;

    Ok(())
}
