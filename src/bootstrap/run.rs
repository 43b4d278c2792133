use std::net::SocketAddr;
use std::sync::Arc;

use clips_core::AppConfig;
use tracing::{info, warn};

use super::wiring::AppServices;
use crate::web::WebServer;

/// Wire the services and serve HTTP until Ctrl-C.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let services = Arc::new(AppServices::from_config(&config)?);
    let addr = SocketAddr::new(config.host, config.port);

    WebServer::new(addr, services).run(shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!("failed to listen for Ctrl-C, serving until killed: {}", e);
            std::future::pending::<()>().await
        }
    }
}
