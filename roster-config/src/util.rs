use std::time::Duration;

use url::Url;

use crate::loader::error::ConfigLoadError;

/// Trim and drop empty values so `KEY=` behaves like an unset key.
pub fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse and normalize the directory base URL.
///
/// Only http/https roots without query or fragment are accepted. The path is
/// forced to end in `/` so `Url::join("users")` appends instead of replacing
/// the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let mut url = Url::parse(raw).map_err(|source| {
        ConfigLoadError::InvalidApiUrl {
            value: raw.to_string(),
            source,
        }
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigLoadError::UnsupportedScheme {
            value: raw.to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigLoadError::ApiUrlHasQuery {
            value: raw.to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

pub fn parse_timeout(
    origin: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    let timeout = humantime::parse_duration(raw).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            origin,
            value: raw.to_string(),
            source,
        }
    })?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout { origin });
    }
    Ok(timeout)
}
