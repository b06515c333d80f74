use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ServerResult;

/// Configuration for the byline HTTP server.
///
/// Every field has a default, so a config file may set any subset of them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Path of the JSON state document. Must exist and parse at startup.
    pub data_path: PathBuf,
    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:4000".parse().unwrap(),
            data_path: PathBuf::from("data.json"),
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
