//! Matrix connection settings and session restore.

use std::fmt;

use anyhow::{Context, Result};
use faucet_core::mask_token;
use matrix_sdk::{
    authentication::{matrix::MatrixSession, SessionTokens},
    Client, SessionMeta,
};
use tracing::info;

/// Credentials and endpoint of the bot account. The access token is never printed in full.
#[derive(Clone)]
pub struct MatrixConfig {
    pub homeserver_url: String,
    pub user_id: String,
    pub device_id: String,
    pub access_token: String,
}

impl fmt::Debug for MatrixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixConfig")
            .field("homeserver_url", &self.homeserver_url)
            .field("user_id", &self.user_id)
            .field("device_id", &self.device_id)
            .field("access_token", &mask_token(&self.access_token))
            .finish()
    }
}

impl MatrixConfig {
    /// Builds a client for the homeserver and restores the bot session from the access token (no password login).
    pub async fn connect(&self) -> Result<Client> {
        let client = Client::builder()
            .homeserver_url(&self.homeserver_url)
            .build()
            .await
            .context("building matrix client")?;

        let session = MatrixSession {
            meta: SessionMeta {
                user_id: self
                    .user_id
                    .parse()
                    .with_context(|| format!("invalid MATRIX_BOT_USER_ID: {}", self.user_id))?,
                device_id: self.device_id.clone().into(),
            },
            tokens: SessionTokens {
                access_token: self.access_token.clone(),
                refresh_token: None,
            },
        };
        client
            .restore_session(session)
            .await
            .context("restoring matrix session")?;

        info!(
            homeserver = %self.homeserver_url,
            user_id = %self.user_id,
            access_token = %mask_token(&self.access_token),
            "Matrix session restored"
        );
        Ok(client)
    }
}
