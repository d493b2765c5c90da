pub mod cli;
pub mod commands;

use anyhow::Result;
use cli::{Cli, Command};
use glide::Config;

/// Execute a parsed command line and return what should be printed.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        Command::Simulate(args) => commands::simulate::run(args, &config),
        Command::Config => commands::config::run(&config),
    }
}
