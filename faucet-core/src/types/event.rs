//! Incoming chat event and its message kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::room::Room;

/// Kind of room message. Only [`MessageKind::Text`] is ever dispatched as a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Notice,
    /// Any other message type, with the transport's type name (e.g. `m.image`).
    Other(String),
}

/// A single room message as seen by handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    pub id: String,
    /// Sender id (e.g. `@alice:matrix.org`). `None` when the transport did not supply one.
    pub sender: Option<String>,
    pub room: Room,
    pub kind: MessageKind,
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl ChatEvent {
    /// Builds a plain text event received now.
    pub fn text(
        id: impl Into<String>,
        sender: impl Into<String>,
        room: Room,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: Some(sender.into()),
            room,
            kind: MessageKind::Text,
            body: body.into(),
            received_at: Utc::now(),
        }
    }

    pub fn sender_or_unknown(&self) -> &str {
        self.sender.as_deref().unwrap_or("unknown")
    }
}
