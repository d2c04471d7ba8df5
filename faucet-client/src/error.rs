//! Errors returned by the backend client.

use thiserror::Error;

/// Failure talking to the faucet backend. `Display` is the message shown to chat users on drip failures.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout, or body read failure.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }
}
