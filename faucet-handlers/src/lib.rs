//! # Faucet handlers
//!
//! Handlers plugged into the handler chain, in chain order:
//!
//! - [`EventFilterHandler`]: drops non-text events and events without a sender or sent by the bot itself.
//! - [`IgnoreListHandler`]: drops events from ignored senders (logged at warn).
//! - [`LoggingHandler`]: logs accepted events and the final response.
//! - [`FaucetCommandHandler`]: parses `!balance` / `!drip` / `!help`, calls the backend and replies.
//!
//! Parsing and planning ([`Command`], [`plan_command`]) and reply text ([`format`]) are pure,
//! so most behavior is testable without a transport or backend.

pub mod address;
mod command;
mod faucet_handler;
pub mod format;
mod logging_filter;

pub use address::{decode_address, AddressError};
pub use command::{
    plan_command, split_target, Command, CommandPlan, DripSettings, COMMAND_PREFIX,
    TRUSTED_SENDER_SUFFIX,
};
pub use faucet_handler::FaucetCommandHandler;
pub use logging_filter::{EventFilterHandler, IgnoreListHandler, LoggingHandler};
