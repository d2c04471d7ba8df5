//! Scripted [`faucet_client::FaucetApi`] that records drip requests.

use async_trait::async_trait;
use faucet_client::{BalanceResponse, ClientError, DripRequest, DripResponse, FaucetApi, RawBalance};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned answer for one endpoint.
pub enum Scripted<T> {
    Ok(T),
    Status(u16),
}

pub struct MockFaucetApi {
    balance: Scripted<BalanceResponse>,
    drip: Scripted<DripResponse>,
    balance_calls: AtomicUsize,
    drip_requests: Mutex<Vec<DripRequest>>,
}

impl MockFaucetApi {
    pub fn new(balance: Scripted<BalanceResponse>, drip: Scripted<DripResponse>) -> Self {
        Self {
            balance,
            drip,
            balance_calls: AtomicUsize::new(0),
            drip_requests: Mutex::new(Vec::new()),
        }
    }

    /// Balance `"5000000000000"`, drip answers with `hash`.
    pub fn healthy(hash: &str) -> Self {
        Self::new(
            Scripted::Ok(BalanceResponse {
                balance: RawBalance::Text("5000000000000".to_string()),
            }),
            Scripted::Ok(DripResponse {
                hash: Some(hash.to_string()),
                error: None,
            }),
        )
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst)
    }

    pub fn drip_requests(&self) -> Vec<DripRequest> {
        self.drip_requests.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.balance_calls() + self.drip_requests().len()
    }
}

fn answer<T: Clone>(scripted: &Scripted<T>) -> Result<T, ClientError> {
    match scripted {
        Scripted::Ok(value) => Ok(value.clone()),
        Scripted::Status(status) => Err(ClientError::Status {
            status: *status,
            body: String::new(),
        }),
    }
}

#[async_trait]
impl FaucetApi for MockFaucetApi {
    async fn balance(&self) -> Result<BalanceResponse, ClientError> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        answer(&self.balance)
    }

    async fn drip(&self, request: &DripRequest) -> Result<DripResponse, ClientError> {
        self.drip_requests.lock().unwrap().push(request.clone());
        answer(&self.drip)
    }
}
