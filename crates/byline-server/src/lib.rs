//! HTTP server for byline.
//!
//! Hosts the users/posts GraphQL API, the GraphiQL IDE, and a small
//! embedded browser client, all from one process.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod schema;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use schema::{build_schema, BylineSchema};
pub use server::BylineServer;
