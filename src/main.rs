use std::sync::Arc;

use anyhow::Context;
use nexrail_backend::{
    config::Config, server::Server, services::connectivity::UnconfiguredProbe,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(config.log_format);

    let server = Server::new(config, Arc::new(UnconfiguredProbe));
    tracing::info!(
        port = server.config().port,
        cors_origins = server.config().allowed_origins.len(),
        "starting nexrail backend"
    );

    server.run().await
}
