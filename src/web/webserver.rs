use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use super::routes::routes;
use crate::bootstrap::AppServices;

pub struct WebServer {
    addr: SocketAddr,
    services: Arc<AppServices>,
}

impl WebServer {
    pub fn new(addr: SocketAddr, services: Arc<AppServices>) -> Self {
        Self { addr, services }
    }

    /// Bind the listener and return the bound address with the serving future.
    ///
    /// The future completes once `shutdown` resolves and in-flight requests finish.
    pub fn bind<F>(
        self,
        shutdown: F,
    ) -> anyhow::Result<(SocketAddr, impl Future<Output = ()> + 'static)>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr;
        warp::serve(routes(self.services))
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .with_context(|| format!("Failed to bind web server to {}", addr))
    }

    pub async fn run<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (bound, server) = self.bind(shutdown)?;
        info!("Web server listening on http://{}", bound);
        server.await;
        info!("Web server stopped");
        Ok(())
    }
}
