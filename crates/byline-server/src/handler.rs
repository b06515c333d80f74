use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, Json};
use serde_json::json;

use crate::schema::BylineSchema;

/// Execute one GraphQL request.
pub async fn graphql_handler(
    State(schema): State<BylineSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// The GraphiQL IDE, pointed at the query endpoint.
pub async fn graphiql_handler() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// The embedded browser client.
pub async fn client_handler() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
