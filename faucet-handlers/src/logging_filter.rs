//! Handlers that log events and drop the ones the bot must not answer.

use std::collections::HashSet;

use async_trait::async_trait;
use faucet_core::{ChatEvent, Handler, HandlerResponse, MessageKind, Result};
use tracing::{debug, info, instrument, warn};

/// Logs each accepted event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &ChatEvent) -> Result<bool> {
        info!(
            sender = %event.sender_or_unknown(),
            room_id = %event.room.id,
            body = %event.body,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &ChatEvent, response: &HandlerResponse) -> Result<()> {
        debug!(event_id = %event.id, response = ?response, "Processed message");
        Ok(())
    }
}

/// Drops events that are not plain text, have no sender, or were sent by the bot itself.
pub struct EventFilterHandler {
    own_user_id: String,
}

impl EventFilterHandler {
    pub fn new(own_user_id: impl Into<String>) -> Self {
        Self {
            own_user_id: own_user_id.into(),
        }
    }
}

#[async_trait]
impl Handler for EventFilterHandler {
    async fn before(&self, event: &ChatEvent) -> Result<bool> {
        if event.kind != MessageKind::Text {
            debug!(event_id = %event.id, kind = ?event.kind, "Skipping non-text message");
            return Ok(false);
        }
        match event.sender.as_deref() {
            None => {
                debug!(event_id = %event.id, "Skipping message without sender");
                Ok(false)
            }
            Some(sender) if sender == self.own_user_id => Ok(false),
            Some(_) => Ok(true),
        }
    }
}

/// Drops events whose sender is on the ignore list.
pub struct IgnoreListHandler {
    ignored: HashSet<String>,
}

impl IgnoreListHandler {
    pub fn new<I, S>(ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored: ignored.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Handler for IgnoreListHandler {
    async fn before(&self, event: &ChatEvent) -> Result<bool> {
        match event.sender.as_deref() {
            Some(sender) if self.ignored.contains(sender) => {
                warn!(sender = %sender, room_id = %event.room.id, "Sender is on the ignore list, dropping message");
                Ok(false)
            }
            _ => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faucet_core::Room;

    fn event(sender: &str, body: &str) -> ChatEvent {
        ChatEvent::text("$1", sender, Room::new("!r:matrix.org"), body)
    }

    #[tokio::test]
    async fn test_filter_accepts_text_from_others() {
        let filter = EventFilterHandler::new("@faucet:matrix.org");
        assert!(filter.before(&event("@alice:matrix.org", "!help")).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_drops_own_messages() {
        let filter = EventFilterHandler::new("@faucet:matrix.org");
        assert!(!filter.before(&event("@faucet:matrix.org", "!help")).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_drops_missing_sender_and_non_text() {
        let filter = EventFilterHandler::new("@faucet:matrix.org");

        let mut no_sender = event("@alice:matrix.org", "!help");
        no_sender.sender = None;
        assert!(!filter.before(&no_sender).await.unwrap());

        let mut notice = event("@alice:matrix.org", "!help");
        notice.kind = MessageKind::Notice;
        assert!(!filter.before(&notice).await.unwrap());

        let mut image = event("@alice:matrix.org", "cat.png");
        image.kind = MessageKind::Other("m.image".to_string());
        assert!(!filter.before(&image).await.unwrap());
    }

    #[tokio::test]
    async fn test_ignore_list() {
        let handler = IgnoreListHandler::new(["@spam:matrix.org"]);
        assert!(!handler.before(&event("@spam:matrix.org", "!drip x")).await.unwrap());
        assert!(handler.before(&event("@alice:matrix.org", "!drip x")).await.unwrap());
    }

    #[tokio::test]
    async fn test_logging_handler_continues() {
        let event = event("@alice:matrix.org", "hello");
        assert!(LoggingHandler.before(&event).await.unwrap());
        assert!(LoggingHandler
            .after(&event, &HandlerResponse::Continue)
            .await
            .is_ok());
    }
}
