//! # faucet-core
//!
//! Core types and traits for the faucet bot: [`Bot`], [`Handler`], [`ChatEvent`] and friends,
//! plus tracing initialization. Transport-agnostic; used by faucet-matrix, faucet-handlers and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod secret;
pub mod types;

pub use bot::{send_or_log, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use secret::mask_token;
pub use types::{ChatEvent, Handler, HandlerResponse, MessageKind, Room, ToCoreEvent};
