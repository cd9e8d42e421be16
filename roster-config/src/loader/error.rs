use std::path::PathBuf;

use roster_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read env file {path}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("invalid API base URL '{value}'")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL '{value}' must use http or https")]
    UnsupportedScheme { value: String },
    #[error("API base URL '{value}' must not carry a query or fragment")]
    ApiUrlHasQuery { value: String },
    #[error("invalid timeout '{value}' from {origin}")]
    InvalidTimeout {
        origin: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("timeout from {origin} must be greater than zero")]
    ZeroTimeout { origin: &'static str },
    #[error("invalid {key} from {origin}")]
    InvalidSetting {
        key: &'static str,
        origin: &'static str,
        #[source]
        source: ModelError,
    },
}
