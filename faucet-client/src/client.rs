//! reqwest-based implementation of [`FaucetApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::error::ClientError;
use crate::types::{BalanceResponse, DripRequest, DripResponse};

/// Per-request timeout enforced by the HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend operations the bot needs. Handlers depend on this trait so tests can substitute a fake.
#[async_trait]
pub trait FaucetApi: Send + Sync {
    /// `GET /balance`.
    async fn balance(&self) -> Result<BalanceResponse, ClientError>;
    /// `POST /bot-endpoint`.
    async fn drip(&self, request: &DripRequest) -> Result<DripResponse, ClientError>;
}

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    client: Client,
    base_url: String,
}

impl FaucetClient {
    /// Builds a client for `base_url` with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Builds a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Rejects non-2xx responses, then decodes the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FaucetApi for FaucetClient {
    #[instrument(skip(self))]
    async fn balance(&self) -> Result<BalanceResponse, ClientError> {
        let url = self.endpoint("balance");
        debug!(url = %url, "GET balance");
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, request), fields(sender = %request.sender))]
    async fn drip(&self, request: &DripRequest) -> Result<DripResponse, ClientError> {
        let url = self.endpoint("bot-endpoint");
        info!(
            url = %url,
            address = %request.address,
            amount = request.amount,
            parachain_id = %request.parachain_id,
            "POST drip"
        );
        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }
}
