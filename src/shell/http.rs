use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shell::graphql::AppSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serves the subgraph on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    schema: AppSchema,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health() -> &'static str {
    "ok"
}
