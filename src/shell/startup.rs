use thiserror::Error;
use tokio::net::TcpListener;

use crate::shell::config::Config;
use crate::shell::graphql::{AppSchema, AppState, SchemaError, build_schema_with};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

/// Builds the schema, then binds. A schema that fails `check_sdl` never
/// reaches the listener.
pub async fn start(
    config: &Config,
    state: AppState,
    check_sdl: impl Fn(&str) -> Result<(), SchemaError>,
) -> Result<(TcpListener, AppSchema), StartupError> {
    let schema = build_schema_with(state, check_sdl)?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    Ok((listener, schema))
}
