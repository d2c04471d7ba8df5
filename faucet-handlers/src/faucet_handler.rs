//! Terminal handler: executes the [`CommandPlan`] for an event and replies in its room.

use std::sync::Arc;

use async_trait::async_trait;
use faucet_client::{DripRequest, FaucetApi};
use faucet_core::{send_or_log, Bot, ChatEvent, Handler, HandlerResponse, Result};
use tracing::{error, info, instrument};

use crate::command::{plan_command, CommandPlan, DripSettings};
use crate::format;

/// Handles `!balance`, `!drip`, `!help` and unknown commands. Backend failures become chat
/// replies and logs; this handler never returns an error for them.
pub struct FaucetCommandHandler {
    api: Arc<dyn FaucetApi>,
    bot: Arc<dyn Bot>,
    settings: DripSettings,
}

impl FaucetCommandHandler {
    pub fn new(api: Arc<dyn FaucetApi>, bot: Arc<dyn Bot>, settings: DripSettings) -> Self {
        Self { api, bot, settings }
    }

    async fn balance_reply(&self) -> String {
        match self.api.balance().await {
            Ok(response) => match response.balance.to_f64() {
                Some(base_units) => {
                    format::format_balance(base_units, self.settings.decimals, &self.settings.unit)
                }
                None => {
                    error!(balance = ?response.balance, "Backend returned a non-numeric balance");
                    format::GENERIC_BALANCE_ERROR.to_string()
                }
            },
            Err(e) => {
                error!(error = %e, "Balance request failed");
                format::GENERIC_BALANCE_ERROR.to_string()
            }
        }
    }

    async fn drip_reply(&self, request: &DripRequest) -> String {
        match self.api.drip(request).await {
            Ok(response) => {
                let outcome = response.outcome();
                info!(sender = %request.sender, outcome = ?outcome, "Drip request finished");
                format::format_drip_outcome(
                    &outcome,
                    &request.sender,
                    request.amount,
                    &self.settings.unit,
                )
            }
            Err(e) => {
                error!(error = %e, sender = %request.sender, timeout = e.is_timeout(), "Drip request failed");
                format::format_transport_failure(&e)
            }
        }
    }
}

#[async_trait]
impl Handler for FaucetCommandHandler {
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn handle(&self, event: &ChatEvent) -> Result<HandlerResponse> {
        let reply = match plan_command(event, &self.settings) {
            CommandPlan::Nothing => return Ok(HandlerResponse::Continue),
            CommandPlan::Reply(text) => text,
            CommandPlan::FetchBalance => self.balance_reply().await,
            CommandPlan::Drip(request) => self.drip_reply(&request).await,
        };

        send_or_log(self.bot.as_ref(), event, &reply).await;
        Ok(HandlerResponse::Reply(reply))
    }
}
