pub mod error;

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use roster_model::ModelError;
use tracing::debug;

use crate::{
    constants::{
        DEFAULT_API_URL, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER, ENV_API_TIMEOUT,
        ENV_API_URL, ENV_LOG, ENV_SORT_DIRECTION, ENV_SORT_KEY,
    },
    models::{
        ApiConfig, ConfigMetadata, ConsoleConfig, FileConfig, LoggingConfig,
        ViewConfig,
    },
    util::{non_empty, parse_base_url, parse_timeout},
};

use self::error::ConfigLoadError;

const ORIGIN_FILE: &str = "config file";
const ORIGIN_ENV: &str = "environment";
const ORIGIN_OVERRIDE: &str = "command line";

/// Builder that resolves a [`ConsoleConfig`] from every configured layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    env: Option<HashMap<String, String>>,
    api_url_override: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this TOML file; it must exist. Without one, `roster.toml` in the
    /// working directory is used when present.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Read `KEY=VALUE` pairs from a dotenv file. Process variables win.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Use the given variables instead of the process environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn api_url(mut self, url: Option<String>) -> Self {
        self.api_url_override = url;
        self
    }

    pub fn load(self) -> Result<ConsoleConfig, ConfigLoadError> {
        let mut metadata = ConfigMetadata::default();

        let file = match self.resolve_config_path() {
            Some(path) => {
                let parsed = read_file_config(&path)?;
                debug!(path = %path.display(), "loaded config file");
                metadata.config_file = Some(path);
                parsed
            }
            None => FileConfig::default(),
        };

        let mut env = self
            .env
            .unwrap_or_else(|| std::env::vars().collect::<HashMap<_, _>>());
        if let Some(path) = self.env_file {
            merge_env_file(&mut env, &path)?;
            metadata.env_file = Some(path);
        }
        let env_value =
            |key: &str| non_empty(env.get(key).map(String::as_str));

        let api = {
            let (raw_url, origin_url) = match (
                non_empty(self.api_url_override.as_deref()),
                env_value(ENV_API_URL),
                non_empty(file.api.base_url.as_deref()),
            ) {
                (Some(url), _, _) => (url, ORIGIN_OVERRIDE),
                (None, Some(url), _) => (url, ORIGIN_ENV),
                (None, None, Some(url)) => (url, ORIGIN_FILE),
                (None, None, None) => (DEFAULT_API_URL.to_string(), "defaults"),
            };
            debug!(origin = origin_url, url = %raw_url, "resolved API base URL");

            let timeout = match (
                env_value(ENV_API_TIMEOUT),
                non_empty(file.api.timeout.as_deref()),
            ) {
                (Some(raw), _) => Some(parse_timeout(ORIGIN_ENV, &raw)?),
                (None, Some(raw)) => Some(parse_timeout(ORIGIN_FILE, &raw)?),
                (None, None) => None,
            };

            ApiConfig {
                base_url: parse_base_url(&raw_url)?,
                timeout,
            }
        };

        let view = ViewConfig {
            sort_key: layered_setting(
                "sort key",
                env_value(ENV_SORT_KEY),
                non_empty(file.view.sort_key.as_deref()),
            )?
            .unwrap_or_default(),
            sort_direction: layered_setting(
                "sort direction",
                env_value(ENV_SORT_DIRECTION),
                non_empty(file.view.sort_direction.as_deref()),
            )?
            .unwrap_or_default(),
        };

        let logging = LoggingConfig {
            filter: env_value(ENV_LOG)
                .or_else(|| non_empty(file.logging.filter.as_deref()))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        Ok(ConsoleConfig {
            api,
            view,
            logging,
            metadata,
        })
    }

    fn resolve_config_path(&self) -> Option<PathBuf> {
        match &self.config_file {
            Some(path) => Some(path.clone()),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.is_file().then_some(fallback)
            }
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn merge_env_file(
    env: &mut HashMap<String, String>,
    path: &Path,
) -> Result<(), ConfigLoadError> {
    let to_error = |source| ConfigLoadError::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    for item in dotenvy::from_path_iter(path).map_err(to_error)? {
        let (key, value) = item.map_err(to_error)?;
        env.entry(key).or_insert(value);
    }
    Ok(())
}

/// Environment beats file; each layer is parsed with its own origin so the
/// error names where the bad value came from.
fn layered_setting<T>(
    key: &'static str,
    from_env: Option<String>,
    from_file: Option<String>,
) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr<Err = ModelError>,
{
    let (raw, origin) = match (from_env, from_file) {
        (Some(raw), _) => (raw, ORIGIN_ENV),
        (None, Some(raw)) => (raw, ORIGIN_FILE),
        (None, None) => return Ok(None),
    };
    raw.parse::<T>()
        .map(Some)
        .map_err(|source| ConfigLoadError::InvalidSetting {
            key,
            origin,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{SortDirection, SortKey};

    fn empty_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test]
    fn defaults_without_any_layer() {
        let config = ConfigLoader::new()
            .config_file("/nonexistent/never-read.toml")
            .with_env(empty_env());
        // An explicit file must exist.
        assert!(matches!(
            config.load(),
            Err(ConfigLoadError::ReadFile { .. })
        ));

        let config = ConfigLoader {
            env: Some(HashMap::new()),
            ..Default::default()
        };
        // Only meaningful when no roster.toml sits in the test's cwd.
        if !Path::new(DEFAULT_CONFIG_FILE).exists() {
            let loaded = config.load().unwrap();
            assert_eq!(loaded.api.base_url.as_str(), "http://127.0.0.1:3000/");
            assert_eq!(loaded.api.timeout, None);
            assert_eq!(loaded.view.sort_key, SortKey::Name);
            assert_eq!(loaded.view.sort_direction, SortDirection::Ascending);
            assert_eq!(loaded.logging.filter, "info");
        }
    }

    #[test]
    fn override_beats_environment() {
        let loaded = ConfigLoader::new()
            .with_env([(ENV_API_URL, "http://env.example.com")])
            .api_url(Some("http://flag.example.com".into()))
            .load()
            .unwrap();
        assert_eq!(loaded.api.base_url.as_str(), "http://flag.example.com/");
    }

    #[test]
    fn bad_sort_key_names_its_origin() {
        let err = ConfigLoader::new()
            .with_env([(ENV_SORT_KEY, "created")])
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidSetting {
                key: "sort key",
                origin: "environment",
                ..
            }
        ));
    }
}
