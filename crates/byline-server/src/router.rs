use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::schema::BylineSchema;

/// Build the axum router with all byline endpoints.
///
/// CORS stays wide open on every route: the browser client may be served
/// from elsewhere during development, and the API carries no credentials.
pub fn build_router(schema: BylineSchema, graphiql: bool) -> Router {
    let graphql: MethodRouter<BylineSchema> = if graphiql {
        get(handler::graphiql_handler).post(handler::graphql_handler)
    } else {
        post(handler::graphql_handler)
    };
    Router::new()
        .route("/", get(handler::client_handler))
        .route("/health", get(handler::health_handler))
        .route("/graphql", graphql)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(schema)
}
