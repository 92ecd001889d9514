use anyhow::Context;
use std::sync::Arc;

use users_subgraph::modules::users::adapters::outbound::user_directory_in_memory::InMemoryUserDirectory;
use users_subgraph::shell::config::Config;
use users_subgraph::shell::graphql::{AppState, validate_sdl};
use users_subgraph::shell::http::serve;
use users_subgraph::shell::startup::start;
use users_subgraph::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::default();
    let state = AppState::new(Arc::new(InMemoryUserDirectory::seeded()));

    let (listener, schema) = start(&config, state, validate_sdl)
        .await
        .context("failed to start subgraph")?;
    tracing::info!("🚀 Server ready at {}", config.ready_url());

    serve(listener, schema, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
