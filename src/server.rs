// src/server.rs
use std::sync::Arc;

use anyhow::Context;
use axum::Router;

use crate::{
    config::Config,
    routes,
    services::connectivity::ConnectivityProbe,
    state::{AppState, SharedState},
};

/// Built once at startup, never mutated afterwards.
pub struct Server {
    config: Config,
    state: SharedState,
}

impl Server {
    pub fn new(config: Config, probe: Arc<dyn ConnectivityProbe>) -> Self {
        let state = Arc::new(AppState::new(probe, config.database));
        Self { config, state }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> Router {
        routes::create_router()
            .with_state(self.state.clone())
            .layer(routes::cors_layer(&self.config.allowed_origins))
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!(addr = %addr, "nexrail backend listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
