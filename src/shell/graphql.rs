use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, SDLExportOptions, Schema};
use thiserror::Error;

pub use crate::modules::users::use_cases::me::inbound::graphql::MeQuery;
pub use crate::modules::users::use_cases::resolve_user_reference::inbound::graphql::UserEntityQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MeQuery, UserEntityQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid subgraph SDL: {0}")]
    InvalidSdl(String),
}

/// Builds the federated schema and checks that its SDL parses before anything
/// gets to serve it.
pub fn build_schema(state: AppState) -> Result<AppSchema, SchemaError> {
    build_schema_with(state, validate_sdl)
}

/// Same as [`build_schema`] with the SDL check supplied by the caller.
pub fn build_schema_with(
    state: AppState,
    check_sdl: impl Fn(&str) -> Result<(), SchemaError>,
) -> Result<AppSchema, SchemaError> {
    let schema = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .enable_federation()
        .data(state)
        .finish();

    check_sdl(&federation_sdl(&schema))?;
    tracing::debug!("subgraph schema built");
    Ok(schema)
}

pub fn federation_sdl(schema: &AppSchema) -> String {
    schema
        .sdl_with_options(SDLExportOptions::new().federation())
        .trim()
        .to_string()
}

pub fn validate_sdl(sdl: &str) -> Result<(), SchemaError> {
    async_graphql::parser::parse_schema(sdl)
        .map(|_| ())
        .map_err(|e| SchemaError::InvalidSdl(e.to_string()))
}
