//! Wraps a matrix-sdk Client and implements [`faucet_core::Bot`]. Production code sends via the homeserver; tests substitute another Bot impl.

use async_trait::async_trait;
use faucet_core::{Bot, BotError, Result, Room};
use matrix_sdk::{ruma::events::room::message::RoomMessageEventContent, ruma::RoomId, Client};

/// Thin wrapper around matrix_sdk::Client that implements core's Bot trait.
#[derive(Clone)]
pub struct MatrixBotAdapter {
    client: Client,
}

impl MatrixBotAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Bot for MatrixBotAdapter {
    async fn send_message(&self, room: &Room, text: &str) -> Result<()> {
        let room_id = RoomId::parse(room.id.as_str())
            .map_err(|e| BotError::InvalidId(format!("{}: {}", room.id, e)))?;
        let joined = self
            .client
            .get_room(&room_id)
            .ok_or_else(|| BotError::RoomNotFound(room.id.clone()))?;
        joined
            .send(RoomMessageEventContent::text_plain(text))
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
