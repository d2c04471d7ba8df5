//! Reply text. Pure functions, no side effects.

use faucet_client::{ClientError, DripOutcome};

pub const GENERIC_BALANCE_ERROR: &str = "An error occurred, please check the server logs.";
pub const GENERIC_DRIP_ERROR: &str = "An unexpected error occurred, please check the server logs";

/// Static command list.
pub fn help_message(unit: &str) -> String {
    format!(
        "The following commands are supported:\n\
         !balance - Get the faucet's balance.\n\
         !drip <Address>[:ParachainId] - Send {unit}s to <Address>, if the optional suffix `:SomeParachainId` is given a teleport will be issued.\n\
         !help - Print this message"
    )
}

pub fn unknown_command_message(unit: &str) -> String {
    format!("Unknown command.\n{}", help_message(unit))
}

/// Converts base units to display units by dividing by `10^decimals`.
/// Exponents beyond `i32::MAX` divide by infinity and yield zero.
pub fn to_display_units(base_units: f64, decimals: u32) -> f64 {
    match i32::try_from(decimals) {
        Ok(exp) => base_units / 10f64.powi(exp),
        Err(_) => 0.0,
    }
}

pub fn format_balance(base_units: f64, decimals: u32, unit: &str) -> String {
    format!(
        "The faucet has {} {}s remaining.",
        to_display_units(base_units, decimals),
        unit
    )
}

pub fn incompatible_address_message(sender: &str) -> String {
    format!("{} provided an incompatible address.", sender)
}

pub fn format_drip_outcome(outcome: &DripOutcome, sender: &str, amount: f64, unit: &str) -> String {
    match outcome {
        DripOutcome::Sent(hash) => {
            format!("Sent {} {} {}s. Extrinsic hash: {}", sender, amount, unit, hash)
        }
        DripOutcome::Failed(Some(error)) => error.clone(),
        DripOutcome::Failed(None) => GENERIC_DRIP_ERROR.to_string(),
    }
}

/// Text for a drip whose HTTP call itself failed: the error's message, or the generic fallback.
pub fn format_transport_failure(error: &ClientError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        GENERIC_DRIP_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_divides_by_decimals() {
        assert_eq!(
            format_balance(5_000_000_000_000.0, 12, "UNIT"),
            "The faucet has 5 UNITs remaining."
        );
        assert_eq!(
            format_balance(1_500_000_000.0, 10, "DOT"),
            "The faucet has 0.15 DOTs remaining."
        );
    }

    #[test]
    fn test_balance_with_out_of_range_decimals_is_zero() {
        assert_eq!(
            format_balance(5.0, u32::MAX, "UNIT"),
            "The faucet has 0 UNITs remaining."
        );
        assert_eq!(to_display_units(5.0, i32::MAX as u32 + 1), 0.0);
    }

    #[test]
    fn test_drip_success_text() {
        let text = format_drip_outcome(
            &DripOutcome::Sent("0xabc".to_string()),
            "@alice:matrix.org",
            0.5,
            "UNIT",
        );
        assert_eq!(text, "Sent @alice:matrix.org 0.5 UNITs. Extrinsic hash: 0xabc");
    }

    #[test]
    fn test_drip_failure_text() {
        assert_eq!(
            format_drip_outcome(&DripOutcome::Failed(Some("quota".to_string())), "@a:b", 1.0, "UNIT"),
            "quota"
        );
        assert_eq!(
            format_drip_outcome(&DripOutcome::Failed(None), "@a:b", 1.0, "UNIT"),
            GENERIC_DRIP_ERROR
        );
    }

    #[test]
    fn test_transport_failure_uses_error_message() {
        let err = ClientError::Status {
            status: 502,
            body: String::new(),
        };
        assert_eq!(format_transport_failure(&err), "Request failed with status code 502");
    }

    #[test]
    fn test_help_mentions_unit() {
        let help = help_message("ROC");
        assert!(help.contains("Send ROCs to <Address>"));
        assert!(unknown_command_message("ROC").starts_with("Unknown command.\n"));
    }
}
