use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the adapter reports what it is doing.
///
/// Each field has an environment override: `LOG_LEVEL`, `LOG_FORMAT` and `LOG_FILTER`.
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,

    /// Raw `EnvFilter` directives, e.g. `ntex=warn,ntex_graphql_adapter=trace`.
    /// Takes over from `level` when present.
    #[serde(default)]
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn env_filter_str(&self) -> &str {
        match &self.filter {
            Some(directives) => directives,
            None => self.level.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const NAMED: [(LogLevel, &'static str); 5] = [
        (LogLevel::Trace, "trace"),
        (LogLevel::Debug, "debug"),
        (LogLevel::Info, "info"),
        (LogLevel::Warn, "warn"),
        (LogLevel::Error, "error"),
    ];

    pub fn as_str(&self) -> &'static str {
        lookup_name(&Self::NAMED, self)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_variant(&Self::NAMED, s).ok_or_else(|| format!("Invalid log level: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Indented span tree, for reading locally.
    PrettyTree,
    /// One line per event.
    PrettyCompact,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    const NAMED: [(LogFormat, &'static str); 3] = [
        (LogFormat::PrettyTree, "pretty-tree"),
        (LogFormat::PrettyCompact, "pretty-compact"),
        (LogFormat::Json, "json"),
    ];

    pub fn as_str(&self) -> &'static str {
        lookup_name(&Self::NAMED, self)
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LogFormat::PrettyCompact
        } else {
            LogFormat::Json
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_variant(&Self::NAMED, s).ok_or_else(|| format!("Invalid log format: {}", s))
    }
}

fn lookup_name<T: PartialEq>(table: &[(T, &'static str)], variant: &T) -> &'static str {
    table
        .iter()
        .find(|(candidate, _)| candidate == variant)
        .map(|(_, name)| *name)
        .unwrap_or_default()
}

fn lookup_variant<T: Copy>(table: &[(T, &'static str)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
        .map(|(variant, _)| *variant)
}
