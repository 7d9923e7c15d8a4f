use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    /// The host address to bind the HTTP server to.
    ///
    /// Can also be set via the `HOST` environment variable.
    #[serde(default = "http_server_host_default")]
    host: String,

    /// The port to bind the HTTP server to.
    ///
    /// Can also be set via the `PORT` environment variable.
    #[serde(default = "http_server_port_default")]
    port: u16,

    /// The path the GraphQL endpoint is mounted on. A missing leading `/` is added.
    ///
    /// Can also be set via the `GRAPHQL_ENDPOINT` environment variable.
    #[serde(default = "graphql_endpoint_default")]
    graphql_endpoint: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: http_server_host_default(),
            port: http_server_port_default(),
            graphql_endpoint: graphql_endpoint_default(),
        }
    }
}

fn http_server_host_default() -> String {
    "0.0.0.0".to_string()
}

fn http_server_port_default() -> u16 {
    4000
}

fn graphql_endpoint_default() -> String {
    "/graphql".to_string()
}

impl HttpServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn graphql_endpoint(&self) -> String {
        normalize_route_path(&self.graphql_endpoint)
    }
}

fn normalize_route_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
