mod env_overrides;
pub mod http_server;
pub mod log;

use config::{Config, File, FileFormat, FileSourceFile};
use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::{
    env_overrides::{EnvVarOverrides, EnvVarOverridesError},
    http_server::HttpServerConfig,
    log::LoggingConfig,
};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// The logger configuration.
    ///
    /// Mostly silent (`info`) by default, printing only important messages, warnings, and errors.
    #[serde(default)]
    pub log: LoggingConfig,

    /// Configuration for the HTTP server/listener and the GraphQL endpoint.
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl AdapterConfig {
    pub fn address(&self) -> String {
        self.http.address()
    }

    pub fn graphql_path(&self) -> String {
        self.http.graphql_endpoint()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterConfigError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
    #[error("Failed to apply configuration overrides: {0}")]
    EnvVarOverridesError(#[from] EnvVarOverridesError),
    #[error("Failed to load the environment variables: {0}")]
    EnvVarLoadError(#[from] envconfig::Error),
    #[error("Failed to parse the configuration file path: {0}")]
    ConfigPathParseError(Infallible),
}

static DEFAULT_FILE_NAMES: &[&str] = &[
    "adapter.config.yaml",
    "adapter.config.yml",
    "adapter.config.json",
    "adapter.config.json5",
];

/// Loads the configuration from `override_config_path` when given, otherwise from the
/// first `adapter.config.*` file found in the working directory. Environment variable
/// overrides are applied last.
pub fn load_config(
    override_config_path: Option<String>,
) -> Result<AdapterConfig, AdapterConfigError> {
    let env_overrides = EnvVarOverrides::init_from_env()?;
    let mut config = Config::builder();

    if let Some(path_str) = override_config_path {
        let path_buf = path_str
            .parse::<std::path::PathBuf>()
            .map_err(AdapterConfigError::ConfigPathParseError)?;
        let as_file: File<FileSourceFile, _> = path_buf.into();

        config = config.add_source(as_file.required(true));
    } else {
        for name in DEFAULT_FILE_NAMES {
            config = config.add_source(File::with_name(name).required(false));
        }
    }

    config = env_overrides.apply_overrides(config)?;

    Ok(config.build()?.try_deserialize::<AdapterConfig>()?)
}

pub fn parse_yaml_config(config_raw: &str) -> Result<AdapterConfig, AdapterConfigError> {
    Config::builder()
        .add_source(File::from_str(config_raw, FileFormat::Yaml))
        .build()?
        .try_deserialize::<AdapterConfig>()
        .map_err(AdapterConfigError::ConfigLoadError)
}
