//! Coeziv route planning HTTP microservice.
//!
//! # Configuration
//!
//! - `COEZIV_NETWORK_PATH` - JSON road network file (default: built-in reference network)
//! - `COEZIV_DEFAULT_SRC` / `COEZIV_DEFAULT_DST` - Endpoints used when a query omits them
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - Set to `false` to disable the Prometheus recorder

use std::net::SocketAddr;

use tracing::{error, info};

use coeziv_service_route::router;
use coeziv_service_shared::{
    AppState, LoggingConfig, MetricsConfig, ServiceConfig, init_logging, init_metrics,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(
        network = ?config.network_path,
        port = config.port,
        default_src = %config.default_src,
        default_dst = %config.default_dst,
        "starting route service"
    );

    let state = AppState::load(&config).inspect_err(|e| {
        error!(error = %e, "failed to load application state");
    })?;

    info!(
        nodes = state.graph().nodes().len(),
        edges = state.graph().edge_count(),
        "application state loaded"
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
