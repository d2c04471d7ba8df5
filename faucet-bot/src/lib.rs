//! # Faucet bot application
//!
//! Loads config from env, wires the backend client, the Matrix transport and the handler chain, then syncs.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::build_handler_chain;
pub use config::{BotConfig, ConfigError};
pub use runner::run_bot;
