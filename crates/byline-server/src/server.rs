use std::sync::Arc;

use byline_resolvers::ResolverSet;
use byline_store::{JsonFileBackend, Store};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::schema::build_schema;

/// The byline HTTP server.
pub struct BylineServer {
    config: ServerConfig,
}

impl BylineServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the state document and serve requests until shutdown.
    ///
    /// An absent or malformed document is a startup failure, not something
    /// to recover from at runtime.
    pub async fn serve(self) -> ServerResult<()> {
        let backend = JsonFileBackend::new(&self.config.data_path);
        let store = Store::open(backend)?;
        tracing::info!(
            path = %self.config.data_path.display(),
            users = store.users().len(),
            posts = store.posts().len(),
            "state document loaded"
        );

        let schema = build_schema(Arc::new(ResolverSet::new(store)));
        let app = build_router(schema, self.config.graphiql);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("byline server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
