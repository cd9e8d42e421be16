//! `rosterctl`: command-line console for a remote user/role directory.

mod cli;
mod commands;
mod render;
mod shell;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use roster_config::{ConfigLoader, ConsoleConfig};
use roster_core::{DirectoryController, HttpDirectory, ViewParams};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

const DEFAULT_ENV_FILE: &str = ".env";

fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let mut loader = ConfigLoader::new().api_url(cli.api_url.clone());
    if let Some(path) = &cli.config {
        loader = loader.config_file(path);
    }
    match &cli.env_file {
        Some(path) => loader = loader.env_file(path),
        None if Path::new(DEFAULT_ENV_FILE).is_file() => {
            loader = loader.env_file(DEFAULT_ENV_FILE)
        }
        None => {}
    }
    loader.load().context("failed to load configuration")
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.logging.filter);
    debug!(
        base_url = %config.api.base_url,
        config_file = ?config.metadata.config_file,
        env_file = ?config.metadata.env_file,
        "configuration resolved"
    );

    let directory =
        HttpDirectory::with_timeout(config.api.base_url.clone(), config.api.timeout)
            .context("failed to build HTTP client")?;
    let params =
        ViewParams::with_sort(config.view.sort_key, config.view.sort_direction);
    let mut controller = DirectoryController::with_params(Arc::new(directory), params);

    match cli.command {
        Command::Users { action } => commands::users(&mut controller, action).await,
        Command::Roles { action } => commands::roles(&mut controller, action).await,
        Command::Shell => shell::run(&mut controller).await,
    }
}
