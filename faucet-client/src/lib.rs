//! # Faucet backend client
//!
//! Thin wrapper around [reqwest] for the two faucet backend endpoints:
//!
//! - `GET {base}/balance` → [`BalanceResponse`]
//! - `POST {base}/bot-endpoint` with [`DripRequest`] → [`DripResponse`]
//!
//! [`FaucetApi`] is the seam handlers depend on; [`FaucetClient`] is the HTTP implementation.
//! Every request carries a fixed timeout ([`DEFAULT_TIMEOUT`]); nothing is retried.
//!
//! ## Example
//!
//! ```rust,no_run
//! use faucet_client::{FaucetApi, FaucetClient};
//!
//! async fn example() -> Result<(), faucet_client::ClientError> {
//!     let client = FaucetClient::new("http://localhost:5555")?;
//!     let balance = client.balance().await?;
//!     println!("raw balance: {:?}", balance.balance);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{FaucetApi, FaucetClient, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use types::{BalanceResponse, DripOutcome, DripRequest, DripResponse, RawBalance};
