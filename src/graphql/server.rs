use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, get_service},
};

use crate::error::Result;

use super::BookGraphSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn graphiql_html(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(graphiql_html(GRAPHQL_PATH))
}

/// Builds the single-route app. POST always executes; GET serves GraphiQL
/// when enabled and otherwise executes query-string requests.
pub fn router(schema: BookGraphSchema, graphiql_enabled: bool) -> Router {
    let service = GraphQL::new(schema);
    let route = if graphiql_enabled {
        get(graphiql).post_service(service)
    } else {
        get_service(service.clone()).post_service(service)
    };
    Router::new().route(GRAPHQL_PATH, route)
}

pub async fn run_server(
    schema: BookGraphSchema,
    addr: SocketAddr,
    graphiql_enabled: bool,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, path = GRAPHQL_PATH, graphiql = graphiql_enabled, "Serving GraphQL");
    axum::serve(listener, router(schema, graphiql_enabled)).await?;
    Ok(())
}
