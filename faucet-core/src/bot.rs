//! Bot abstraction for sending messages into rooms.
//!
//! [`Bot`] is transport-agnostic; faucet-matrix implements it on top of matrix-sdk.

use crate::error::Result;
use crate::types::{ChatEvent, Room};
use async_trait::async_trait;
use tracing::{error, info};

/// Abstraction for sending plain-text messages. Implementations map to a transport (e.g. Matrix).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given room.
    async fn send_message(&self, room: &Room, text: &str) -> Result<()>;

    /// Sends a reply into the room the event came from.
    async fn reply_to(&self, event: &ChatEvent, text: &str) -> Result<()> {
        self.send_message(&event.room, text).await
    }
}

/// Replies to `event` and logs the outcome. A failed send is logged and dropped, never retried.
/// Returns whether the message went out.
pub async fn send_or_log(bot: &dyn Bot, event: &ChatEvent, text: &str) -> bool {
    match bot.reply_to(event, text).await {
        Ok(()) => {
            info!(room_id = %event.room.id, reply_len = text.len(), "Reply sent");
            true
        }
        Err(e) => {
            error!(error = %e, room_id = %event.room.id, "Failed to send reply");
            false
        }
    }
}
