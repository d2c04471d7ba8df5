//! Adapters from matrix-sdk event types to core types.

use chrono::{DateTime, Utc};
use faucet_core::{ChatEvent, MessageKind, Room, ToCoreEvent};
use matrix_sdk::ruma::{
    events::room::message::{MessageType, OriginalSyncRoomMessageEvent},
    RoomId,
};

/// Wraps a synced room message with the room it arrived in. Implements [`ToCoreEvent`].
pub struct MatrixEventWrapper<'a> {
    pub event: &'a OriginalSyncRoomMessageEvent,
    pub room_id: &'a RoomId,
}

impl<'a> MatrixEventWrapper<'a> {
    pub fn new(event: &'a OriginalSyncRoomMessageEvent, room_id: &'a RoomId) -> Self {
        Self { event, room_id }
    }
}

impl ToCoreEvent for MatrixEventWrapper<'_> {
    fn to_core(&self) -> ChatEvent {
        let (kind, body) = match &self.event.content.msgtype {
            MessageType::Text(text) => (MessageKind::Text, text.body.clone()),
            MessageType::Notice(notice) => (MessageKind::Notice, notice.body.clone()),
            other => (
                MessageKind::Other(other.msgtype().to_string()),
                other.body().to_string(),
            ),
        };

        let millis = u64::from(self.event.origin_server_ts.get());
        let received_at = i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_else(Utc::now);

        ChatEvent {
            id: self.event.event_id.to_string(),
            sender: Some(self.event.sender.to_string()),
            room: Room::new(self.room_id.as_str()),
            kind,
            body,
            received_at,
        }
    }
}
