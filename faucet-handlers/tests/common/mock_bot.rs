//! Mock implementation of [`faucet_core::Bot`] that records every sent message.

use async_trait::async_trait;
use faucet_core::{Bot, Room};
use std::sync::Mutex;

/// One recorded `send_message(room, text)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub room_id: String,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
}

impl MockBot {
    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, room: &Room, text: &str) -> faucet_core::Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            room_id: room.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}
