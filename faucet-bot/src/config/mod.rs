//! Bot configuration: a static env-var schema resolved once at startup into [`BotConfig`].

mod bot_config;
mod error;
mod schema;


pub use bot_config::BotConfig;
pub use error::ConfigError;
pub use schema::{resolve, EnvVar, ResolvedEnv, ValueKind, SCHEMA};
