//! Shared configuration library for Roster.
//!
//! Settings are layered: built-in defaults, an optional TOML file, an
//! optional dotenv file, the process environment, and finally explicit
//! overrides supplied by the caller (usually CLI flags). Later layers win.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoader, error::ConfigLoadError};
pub use models::{
    ApiConfig, ConfigMetadata, ConsoleConfig, LoggingConfig, ViewConfig,
};
