//! Test doubles shared by faucet-handlers integration tests.

pub mod mock_api;
pub mod mock_bot;
