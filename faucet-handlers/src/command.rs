//! Command parsing and planning.
//!
//! [`plan_command`] turns an event into a [`CommandPlan`] without any I/O; the handler then
//! executes the plan against the backend and the chat transport.

use faucet_client::DripRequest;
use faucet_core::ChatEvent;
use tracing::{info, warn};

use crate::address::decode_address;
use crate::format;

pub const COMMAND_PREFIX: char = '!';

/// Senders whose id ends with this suffix may override the drip amount.
pub const TRUSTED_SENDER_SUFFIX: &str = ":matrix.parity.io";

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Balance,
    Drip {
        /// `<address>[:parachainId]`, if given.
        target: Option<String>,
        override_amount: Option<String>,
    },
    Help,
    /// A `!`-prefixed token that is not a known command.
    Unknown(String),
}

impl Command {
    /// Parses a message body; `None` when the first whitespace-delimited token is not a command.
    pub fn parse(body: &str) -> Option<Self> {
        let mut tokens = body.split_whitespace();
        let action = tokens.next()?;
        let command = match action {
            "!balance" => Command::Balance,
            "!drip" => Command::Drip {
                target: tokens.next().map(str::to_string),
                override_amount: tokens.next().map(str::to_string),
            },
            "!help" => Command::Help,
            other if other.starts_with(COMMAND_PREFIX) => Command::Unknown(other.to_string()),
            _ => return None,
        };
        Some(command)
    }
}

/// Splits `<address>[:parachainId]`. Segments after the second are ignored.
pub fn split_target(target: &str) -> (&str, &str) {
    let mut parts = target.split(':');
    let address = parts.next().unwrap_or_default();
    let parachain_id = parts.next().unwrap_or_default();
    (address, parachain_id)
}

/// Static faucet settings the dispatcher needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DripSettings {
    pub drip_amount: f64,
    pub decimals: u32,
    pub unit: String,
    pub trusted_suffix: String,
}

impl DripSettings {
    pub fn new(drip_amount: f64, decimals: u32, unit: impl Into<String>) -> Self {
        Self {
            drip_amount,
            decimals,
            unit: unit.into(),
            trusted_suffix: TRUSTED_SENDER_SUFFIX.to_string(),
        }
    }

    /// Amount to drip for `sender`: the override when the sender is trusted and it parses as a
    /// finite number, otherwise the configured default.
    pub fn amount_for(&self, sender: &str, override_amount: Option<&str>) -> f64 {
        let Some(raw) = override_amount else {
            return self.drip_amount;
        };
        if !sender.ends_with(&self.trusted_suffix) {
            return self.drip_amount;
        }
        match raw.parse::<f64>() {
            Ok(amount) if amount.is_finite() => amount,
            _ => {
                warn!(sender = %sender, amount = %raw, "Ignoring unparsable drip amount override");
                self.drip_amount
            }
        }
    }
}

/// What to do for one event.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandPlan {
    /// Not a command, or a command that is dropped without a reply.
    Nothing,
    /// Reply with fixed text; no backend call.
    Reply(String),
    /// Call `GET /balance` and reply with the formatted balance.
    FetchBalance,
    /// Call `POST /bot-endpoint` with this body and reply with the outcome.
    Drip(DripRequest),
}

/// Plans the response to `event`. Assumes filters already ran; an event without a sender plans nothing.
pub fn plan_command(event: &ChatEvent, settings: &DripSettings) -> CommandPlan {
    let Some(command) = Command::parse(&event.body) else {
        return CommandPlan::Nothing;
    };
    let Some(sender) = event.sender.as_deref() else {
        return CommandPlan::Nothing;
    };

    match command {
        Command::Balance => CommandPlan::FetchBalance,
        Command::Help => CommandPlan::Reply(format::help_message(&settings.unit)),
        Command::Unknown(token) => {
            info!(sender = %sender, command = %token, "Unknown command");
            CommandPlan::Reply(format::unknown_command_message(&settings.unit))
        }
        Command::Drip {
            target,
            override_amount,
        } => {
            let Some(target) = target else {
                warn!(sender = %sender, "Address not provided, skipping");
                return CommandPlan::Nothing;
            };
            let (address, parachain_id) = split_target(&target);

            if let Err(e) = decode_address(address) {
                info!(sender = %sender, address = %address, error = %e, "Incompatible address");
                return CommandPlan::Reply(format::incompatible_address_message(sender));
            }

            CommandPlan::Drip(DripRequest {
                address: address.to_string(),
                amount: settings.amount_for(sender, override_amount.as_deref()),
                parachain_id: parachain_id.to_string(),
                sender: sender.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faucet_core::Room;

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    fn settings() -> DripSettings {
        DripSettings::new(0.5, 12, "UNIT")
    }

    fn event_from(sender: &str, body: &str) -> ChatEvent {
        ChatEvent::text("$1", sender, Room::new("!faucet:matrix.org"), body)
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("!balance"), Some(Command::Balance));
        assert_eq!(Command::parse("!help please"), Some(Command::Help));
        assert_eq!(
            Command::parse("!drip  addr:1000   3"),
            Some(Command::Drip {
                target: Some("addr:1000".to_string()),
                override_amount: Some("3".to_string()),
            })
        );
        assert_eq!(
            Command::parse("!drip"),
            Some(Command::Drip {
                target: None,
                override_amount: None
            })
        );
    }

    #[test]
    fn test_parse_unknown_and_non_commands() {
        assert_eq!(Command::parse("!foo bar"), Some(Command::Unknown("!foo".to_string())));
        assert_eq!(Command::parse("hello !balance"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_split_target() {
        assert_eq!(split_target("addr"), ("addr", ""));
        assert_eq!(split_target("addr:2000"), ("addr", "2000"));
        assert_eq!(split_target("addr:2000:extra"), ("addr", "2000"));
    }

    #[test]
    fn test_plan_non_command_is_nothing() {
        let plan = plan_command(&event_from("@alice:matrix.org", "gm everyone"), &settings());
        assert_eq!(plan, CommandPlan::Nothing);
    }

    #[test]
    fn test_plan_balance_and_help() {
        let s = settings();
        assert_eq!(
            plan_command(&event_from("@a:matrix.org", "!balance"), &s),
            CommandPlan::FetchBalance
        );
        assert_eq!(
            plan_command(&event_from("@a:matrix.org", "!help"), &s),
            CommandPlan::Reply(format::help_message("UNIT"))
        );
        assert_eq!(
            plan_command(&event_from("@a:matrix.org", "!faucet"), &s),
            CommandPlan::Reply(format::unknown_command_message("UNIT"))
        );
    }

    #[test]
    fn test_plan_drip_without_address_is_silent() {
        let plan = plan_command(&event_from("@a:matrix.org", "!drip"), &settings());
        assert_eq!(plan, CommandPlan::Nothing);
    }

    #[test]
    fn test_plan_drip_invalid_address_replies() {
        let plan = plan_command(&event_from("@a:matrix.org", "!drip 5ABCnotvalid"), &settings());
        assert_eq!(
            plan,
            CommandPlan::Reply("@a:matrix.org provided an incompatible address.".to_string())
        );
    }

    #[test]
    fn test_plan_drip_with_parachain_id() {
        let plan = plan_command(
            &event_from("@a:matrix.org", &format!("!drip {}:2000", ALICE)),
            &settings(),
        );
        assert_eq!(
            plan,
            CommandPlan::Drip(DripRequest {
                address: ALICE.to_string(),
                amount: 0.5,
                parachain_id: "2000".to_string(),
                sender: "@a:matrix.org".to_string(),
            })
        );
    }

    #[test]
    fn test_override_amount_only_for_trusted_sender() {
        let s = settings();
        let body = format!("!drip {} 10", ALICE);

        let trusted = plan_command(&event_from("@ops:matrix.parity.io", &body), &s);
        let untrusted = plan_command(&event_from("@eve:matrix.org", &body), &s);

        match (trusted, untrusted) {
            (CommandPlan::Drip(t), CommandPlan::Drip(u)) => {
                assert_eq!(t.amount, 10.0);
                assert_eq!(u.amount, 0.5);
            }
            other => panic!("unexpected plans: {:?}", other),
        }
    }

    #[test]
    fn test_override_amount_unparsable_falls_back() {
        let s = settings();
        assert_eq!(s.amount_for("@ops:matrix.parity.io", Some("lots")), 0.5);
        assert_eq!(s.amount_for("@ops:matrix.parity.io", Some("inf")), 0.5);
        assert_eq!(s.amount_for("@ops:matrix.parity.io", None), 0.5);
        assert_eq!(s.amount_for("@ops:matrix.parity.io", Some("2.5")), 2.5);
    }
}
