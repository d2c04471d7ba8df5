//! Sync runner: converts room messages to core events and passes them to the HandlerChain;
//! auto-joins rooms the bot is invited to.

use std::time::Duration;

use anyhow::{Context, Result};
use faucet_core::ToCoreEvent;
use handler_chain::HandlerChain;
use matrix_sdk::{
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::OriginalSyncRoomMessageEvent,
    },
    Client,
};
use tracing::{error, info, instrument, warn};

use super::adapters::MatrixEventWrapper;

/// Long-poll timeout for each sync request.
pub const SYNC_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether a membership change is an invitation addressed to the bot.
pub fn should_auto_join(membership: &MembershipState, invited_user: &str, own_user_id: &str) -> bool {
    *membership == MembershipState::Invite && invited_user == own_user_id
}

/// Joins every room the bot is invited to, including invites delivered by the first sync.
pub fn register_auto_join(client: &Client, own_user_id: String) {
    client.add_event_handler(move |ev: StrippedRoomMemberEvent, room: Room| {
        let own_user_id = own_user_id.clone();
        async move {
            if !should_auto_join(&ev.content.membership, ev.state_key.as_str(), &own_user_id) {
                return;
            }
            match room.join().await {
                Ok(_) => info!(room_id = %room.room_id(), "Auto-joined invited room"),
                Err(e) => warn!(error = %e, room_id = %room.room_id(), "Failed to accept invite"),
            }
        }
    });
}

/// Forwards room messages to the handler chain. Each message is converted to a core event and
/// handled in a spawned task, so the sync loop never waits on the backend.
pub fn register_message_handler(client: &Client, handler_chain: HandlerChain) {
    client.add_event_handler(move |ev: OriginalSyncRoomMessageEvent, room: Room| {
        let chain = handler_chain.clone();
        async move {
            let core_event = MatrixEventWrapper::new(&ev, room.room_id()).to_core();

            // Run handler chain in a spawned task so the event handler returns immediately
            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_event).await {
                    error!(error = %e, event_id = %core_event.id, "Handler chain failed");
                }
            });
        }
    });
}

/// Registers the invite and message handlers and syncs until the connection fails.
///
/// The invite handler is registered before the initial `sync_once`, so invites received while
/// offline are accepted. The message handler is registered after it, so messages from before
/// startup are not dispatched.
#[instrument(skip(client, handler_chain))]
pub async fn run_sync(client: Client, handler_chain: HandlerChain, own_user_id: String) -> Result<()> {
    register_auto_join(&client, own_user_id.clone());

    let initial = client
        .sync_once(SyncSettings::default())
        .await
        .context("initial sync")?;
    info!("Initial sync done, backlog skipped");

    register_message_handler(&client, handler_chain);

    info!(user_id = %own_user_id, timeout_secs = SYNC_TIMEOUT.as_secs(), "Starting sync");
    let settings = SyncSettings::default()
        .token(initial.next_batch)
        .timeout(SYNC_TIMEOUT);
    client
        .sync(settings)
        .await
        .map_err(|e| anyhow::anyhow!("sync terminated: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatrixConfig;
    use mockito::Matcher;
    use serde_json::json;

    const OWN_ID: &str = "@faucet:example.org";
    const INVITED_ROOM: &str = "!invited:example.org";

    #[test]
    fn test_joins_only_own_invites() {
        let own = "@faucet:matrix.org";
        assert!(should_auto_join(&MembershipState::Invite, own, own));
        assert!(!should_auto_join(&MembershipState::Invite, "@alice:matrix.org", own));
        assert!(!should_auto_join(&MembershipState::Join, own, own));
        assert!(!should_auto_join(&MembershipState::Leave, own, own));
    }

    /// Homeserver whose first sync carries an invite for the bot into `INVITED_ROOM`.
    async fn homeserver_with_pending_invite() -> (mockito::ServerGuard, mockito::Mock) {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex(r"^/_matrix/client/versions".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"versions": ["r0.6.1", "v1.1", "v1.2", "v1.3"]}).to_string())
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"^/_matrix/client/(r0|v3)/sync".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "next_batch": "s1",
                    "rooms": {
                        "invite": {
                            (INVITED_ROOM): {
                                "invite_state": {
                                    "events": [{
                                        "type": "m.room.member",
                                        "state_key": OWN_ID,
                                        "sender": "@alice:example.org",
                                        "content": { "membership": "invite" }
                                    }]
                                }
                            }
                        }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;
        let join = server
            .mock("POST", Matcher::Regex(r"^/_matrix/client/(r0|v3)/join/".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"room_id": INVITED_ROOM}).to_string())
            .expect(1)
            .create_async()
            .await;
        (server, join)
    }

    async fn client_for(server: &mockito::ServerGuard) -> Client {
        MatrixConfig {
            homeserver_url: server.url(),
            user_id: OWN_ID.to_string(),
            device_id: "FAUCETBOT".to_string(),
            access_token: "syt_test_access_token_0123".to_string(),
        }
        .connect()
        .await
        .unwrap()
    }

    /// **Test: an invite delivered by the first sync is joined when auto-join is registered first.**
    #[tokio::test]
    async fn test_invite_in_initial_sync_is_joined() {
        let (server, join) = homeserver_with_pending_invite().await;
        let client = client_for(&server).await;

        register_auto_join(&client, OWN_ID.to_string());
        client.sync_once(SyncSettings::default()).await.unwrap();

        for _ in 0..50 {
            if join.matched_async().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        join.assert_async().await;
    }
}
