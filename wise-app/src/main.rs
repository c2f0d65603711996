//! # Wise Bridge Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the Wise gateway adapter
//! - Create the operations service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wise_gateway::WiseClient;
use wise_ops::{OpsService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wise_app=debug,wise_ops=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting Wise bridge server on port {}", config.port);
    tracing::info!(
        "Using Wise {} environment",
        if config.sandbox { "sandbox" } else { "production" }
    );

    // Build the gateway adapter
    let gateway = WiseClient::new(config.api_token, config.sandbox);

    // Create the operations service
    let service = OpsService::new(gateway);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
