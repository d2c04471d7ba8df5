//! Env-var schema: name, default, required and secret flags, expected kind.

use std::collections::HashMap;
use std::str::FromStr;

use faucet_core::mask_token;

use super::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    /// Comma-separated strings.
    List,
}

/// One environment variable the bot reads.
#[derive(Debug, Clone, Copy)]
pub struct EnvVar {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub required: bool,
    pub secret: bool,
    pub kind: ValueKind,
}

impl EnvVar {
    const fn optional(name: &'static str, default: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            default: Some(default),
            required: false,
            secret: false,
            kind,
        }
    }

    const fn required(name: &'static str, secret: bool) -> Self {
        Self {
            name,
            default: None,
            required: true,
            secret,
            kind: ValueKind::String,
        }
    }
}

pub const SCHEMA: &[EnvVar] = &[
    EnvVar::optional("BACKEND_URL", "http://localhost:5555", ValueKind::String),
    EnvVar::optional("DRIP_AMOUNT", "0.5", ValueKind::Number),
    EnvVar::optional("FAUCET_IGNORE_LIST", "", ValueKind::List),
    EnvVar::required("MATRIX_ACCESS_TOKEN", true),
    EnvVar::required("MATRIX_BOT_USER_ID", false),
    EnvVar::optional("NETWORK_DECIMALS", "12", ValueKind::Number),
    EnvVar::optional("NETWORK_UNIT", "UNIT", ValueKind::String),
    EnvVar::optional("MATRIX_HOMESERVER_URL", "https://matrix.org", ValueKind::String),
    EnvVar::optional("MATRIX_DEVICE_ID", "FAUCETBOT", ValueKind::String),
    EnvVar::optional("LOG_FILE", "logs/faucet-bot.log", ValueKind::String),
];

/// Values for every schema entry, after defaults were applied.
#[derive(Debug, Clone)]
pub struct ResolvedEnv {
    values: HashMap<&'static str, String>,
    secrets: Vec<&'static str>,
}

/// Reads every variable in `schema` through `lookup`. Absent or blank values take the default;
/// required ones without a value are all reported together. Number values must parse as finite numbers.
pub fn resolve<F>(schema: &[EnvVar], lookup: F) -> Result<ResolvedEnv, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = HashMap::new();
    let mut missing = Vec::new();

    for var in schema {
        let value = lookup(var.name).filter(|v| !v.trim().is_empty());
        let value = match (value, var.default) {
            (Some(v), _) => v.trim().to_string(),
            (None, _) if var.required => {
                missing.push(var.name.to_string());
                continue;
            }
            (None, default) => default.unwrap_or_default().to_string(),
        };

        if var.kind == ValueKind::Number && !value.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(ConfigError::Invalid {
                name: var.name.to_string(),
                value,
                expected: "a finite number",
            });
        }
        values.insert(var.name, value);
    }

    if !missing.is_empty() {
        return Err(ConfigError::Missing(missing));
    }

    let secrets = schema.iter().filter(|v| v.secret).map(|v| v.name).collect();
    Ok(ResolvedEnv { values, secrets })
}

impl ResolvedEnv {
    /// Raw value; empty for names outside the schema.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn parse<T: FromStr>(&self, name: &str, expected: &'static str) -> Result<T, ConfigError> {
        let raw = self.get(name);
        raw.parse().map_err(|_| ConfigError::Invalid {
            name: name.to_string(),
            value: raw.to_string(),
            expected,
        })
    }

    pub fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Value as it may be logged: secrets are masked.
    pub fn display(&self, name: &str) -> String {
        if self.secrets.iter().any(|s| *s == name) {
            mask_token(self.get(name))
        } else {
            self.get(name).to_string()
        }
    }
}
