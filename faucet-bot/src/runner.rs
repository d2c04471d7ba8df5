//! Bot entry: validate config, init logging, connect to the backend and the homeserver, then sync.

use std::sync::Arc;

use anyhow::{Context, Result};
use faucet_client::{FaucetApi, FaucetClient};
use faucet_core::{init_tracing, Bot};
use faucet_matrix::{run_sync, MatrixBotAdapter};
use tracing::{error, info, instrument};

use super::components::build_handler_chain;
use super::config::BotConfig;

/// Main entry: validate config, init logging, build the handler chain, then sync until the connection drops.
///
/// Returns an error when startup fails (bad config, rejected token, unreachable homeserver)
/// or when the sync loop terminates.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    config.log_summary();

    info!(
        backend_url = %config.backend_url,
        homeserver = %config.matrix_homeserver_url,
        user_id = %config.matrix_bot_user_id,
        "Initializing bot"
    );

    let api: Arc<dyn FaucetApi> = Arc::new(
        FaucetClient::new(&config.backend_url).context("building faucet backend client")?,
    );

    let client = config.matrix_config().connect().await.map_err(|e| {
        error!(error = %e, "Failed to connect to the homeserver");
        e
    })?;
    let bot: Arc<dyn Bot> = Arc::new(MatrixBotAdapter::new(client.clone()));

    let handler_chain = build_handler_chain(&config, api, bot);

    info!("Bot started successfully");

    run_sync(client, handler_chain, config.matrix_bot_user_id.clone()).await
}
