use std::net::SocketAddr;
use std::sync::Arc;

use auxparty::configs::Config;
use auxparty::server::AppState;
use auxparty::transport;
use axum::{Router, routing::get};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("No usable config ({}), falling back to defaults", e);
        Config::default()
    });

    let directives = config
        .logging
        .as_ref()
        .map(|l| l.directives())
        .unwrap_or_else(|| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if config.server.allowed_origins.is_empty() {
        warn!("No origin allow-list configured, accepting connections from any origin");
    }

    let address: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let shared_state = Arc::new(AppState::new(config));

    let app = Router::new()
        .route(
            "/ws",
            get(transport::websocket_server::websocket_handler),
        )
        .merge(transport::http_server::router())
        .with_state(shared_state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    info!("auxparty listening on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
