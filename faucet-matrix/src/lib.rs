//! Matrix transport layer: event adapters, Bot implementation, connection config, sync runner.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::MatrixEventWrapper;
pub use bot_adapter::MatrixBotAdapter;
pub use config::MatrixConfig;
pub use runner::{
    register_auto_join, register_message_handler, run_sync, should_auto_join, SYNC_TIMEOUT,
};
