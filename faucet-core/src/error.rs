//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for the chat side of the bot (transport and identifiers).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
