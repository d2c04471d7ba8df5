//! Component factory: builds the handler chain from config. Isolates assembly logic from runner.

use std::sync::Arc;

use faucet_client::FaucetApi;
use faucet_core::Bot;
use faucet_handlers::{EventFilterHandler, FaucetCommandHandler, IgnoreListHandler, LoggingHandler};
use handler_chain::HandlerChain;
use tracing::instrument;

use super::config::BotConfig;

/// Filter (non-text, own messages) -> ignore list -> logging -> command handler.
///
/// `api` and `bot` are injected so integration tests can swap in a mock backend or a recording bot.
#[instrument(skip_all)]
pub fn build_handler_chain(
    config: &BotConfig,
    api: Arc<dyn FaucetApi>,
    bot: Arc<dyn Bot>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(EventFilterHandler::new(
            config.matrix_bot_user_id.clone(),
        )))
        .add_handler(Arc::new(IgnoreListHandler::new(config.ignore_list.iter().cloned())))
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(FaucetCommandHandler::new(
            api,
            bot,
            config.drip_settings(),
        )))
}
