//! Request and response bodies of the faucet backend.

use serde::{Deserialize, Serialize};

/// Balance as sent by the backend: a JSON string or number, in base units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawBalance {
    Number(f64),
    Text(String),
}

impl RawBalance {
    /// Numeric value in base units, `None` if the string form is not a number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            RawBalance::Number(n) => Some(*n),
            RawBalance::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `GET /balance` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceResponse {
    pub balance: RawBalance,
}

/// `POST /bot-endpoint` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DripRequest {
    pub address: String,
    pub amount: f64,
    /// Empty when the drip is a plain transfer rather than a teleport.
    pub parachain_id: String,
    pub sender: String,
}

/// `POST /bot-endpoint` response. Either field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DripResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpreted drip result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DripOutcome {
    /// Extrinsic hash of the submitted transfer.
    Sent(String),
    /// Backend-supplied error, if any.
    Failed(Option<String>),
}

impl DripResponse {
    /// Success iff `hash` is present and non-empty; an empty or null hash is a failure even without `error`.
    pub fn outcome(&self) -> DripOutcome {
        match self.hash.as_deref() {
            Some(hash) if !hash.is_empty() => DripOutcome::Sent(hash.to_string()),
            _ => DripOutcome::Failed(self.error.clone().filter(|e| !e.is_empty())),
        }
    }
}
