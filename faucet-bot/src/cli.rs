//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "faucet-bot")]
#[command(about = "Matrix faucet bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Connect to Matrix and serve commands (config from env).
    Run,
    /// Load and validate config, print it with secrets masked, and exit.
    CheckConfig,
}

/// Load BotConfig from the process environment.
pub fn load_config() -> Result<BotConfig> {
    Ok(BotConfig::load()?)
}
