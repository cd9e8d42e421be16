//! Defaults and environment keys.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

pub const ENV_API_URL: &str = "ROSTER_API_URL";
pub const ENV_API_TIMEOUT: &str = "ROSTER_API_TIMEOUT";
pub const ENV_SORT_KEY: &str = "ROSTER_SORT_KEY";
pub const ENV_SORT_DIRECTION: &str = "ROSTER_SORT_DIRECTION";
pub const ENV_LOG: &str = "ROSTER_LOG";
