//! Core types: room, chat event, handler response, and Handler trait.
//!
//! One file per main type, as elsewhere in the workspace.

mod event;
mod handler;
mod response;
mod room;

pub use event::{ChatEvent, MessageKind};
pub use handler::{Handler, ToCoreEvent};
pub use response::HandlerResponse;
pub use room::Room;
