use std::{path::PathBuf, time::Duration};

use roster_model::{SortDirection, SortKey};
use serde::Deserialize;
use url::Url;

/// Fully resolved console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Directory root. Always ends with `/` so collection paths join beneath it.
    pub base_url: Url,
    /// Per-request timeout; `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

/// Initial sort applied when the console starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewConfig {
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

/// Where the resolved values came from, for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_file: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// On-disk TOML shape. Every field is optional; missing values fall through
/// to lower layers.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    #[serde(default)]
    pub api: FileApi,
    #[serde(default)]
    pub view: FileView,
    #[serde(default)]
    pub logging: FileLogging,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileApi {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileView {
    pub sort_key: Option<String>,
    pub sort_direction: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileLogging {
    pub filter: Option<String>,
}
