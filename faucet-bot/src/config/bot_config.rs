//! BotConfig: typed view of the resolved env schema. Use load() for env-based loading.

use std::collections::HashSet;
use std::env;
use std::fmt;

use faucet_core::mask_token;
use faucet_handlers::DripSettings;
use faucet_matrix::MatrixConfig;
use tracing::info;

use super::error::ConfigError;
use super::schema::{resolve, SCHEMA};

/// Process-wide settings, resolved once at startup and never mutated.
#[derive(Clone)]
pub struct BotConfig {
    pub backend_url: String,
    pub drip_amount: f64,
    pub ignore_list: HashSet<String>,
    pub matrix_access_token: String,
    pub matrix_bot_user_id: String,
    pub network_decimals: u32,
    pub network_unit: String,
    pub matrix_homeserver_url: String,
    pub matrix_device_id: String,
    pub log_file: String,
    /// `(name, loggable value)` for every schema entry, secrets masked.
    pub(super) summary: Vec<(&'static str, String)>,
}

impl BotConfig {
    /// Load from process environment variables. Load `.env` (dotenvy) before calling.
    /// Call validate() after load to fail fast before connecting.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load through an arbitrary lookup (tests use a map instead of the process env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = resolve(SCHEMA, lookup)?;

        let network_decimals: u32 = env.parse("NETWORK_DECIMALS", "a non-negative integer")?;
        // Display conversion raises 10 to an i32 exponent.
        if i32::try_from(network_decimals).is_err() {
            return Err(ConfigError::Invalid {
                name: "NETWORK_DECIMALS".to_string(),
                value: network_decimals.to_string(),
                expected: "an integer no larger than 2147483647",
            });
        }

        Ok(Self {
            backend_url: env.get("BACKEND_URL").to_string(),
            drip_amount: env.parse("DRIP_AMOUNT", "a finite number")?,
            ignore_list: env.list("FAUCET_IGNORE_LIST").into_iter().collect(),
            matrix_access_token: env.get("MATRIX_ACCESS_TOKEN").to_string(),
            matrix_bot_user_id: env.get("MATRIX_BOT_USER_ID").to_string(),
            network_decimals,
            network_unit: env.get("NETWORK_UNIT").to_string(),
            matrix_homeserver_url: env.get("MATRIX_HOMESERVER_URL").to_string(),
            matrix_device_id: env.get("MATRIX_DEVICE_ID").to_string(),
            log_file: env.get("LOG_FILE").to_string(),
            summary: SCHEMA.iter().map(|v| (v.name, env.display(v.name))).collect(),
        })
    }

    /// Validate URLs. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("BACKEND_URL", &self.backend_url),
            ("MATRIX_HOMESERVER_URL", &self.matrix_homeserver_url),
        ] {
            if reqwest::Url::parse(value).is_err() {
                return Err(ConfigError::InvalidUrl {
                    name: name.to_string(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Logs every resolved value at info; secrets are masked. Call after tracing is initialized.
    pub fn log_summary(&self) {
        for (name, value) in &self.summary {
            info!(name = %name, value = %value, "config");
        }
    }

    pub fn drip_settings(&self) -> DripSettings {
        DripSettings::new(self.drip_amount, self.network_decimals, self.network_unit.clone())
    }

    pub fn matrix_config(&self) -> MatrixConfig {
        MatrixConfig {
            homeserver_url: self.matrix_homeserver_url.clone(),
            user_id: self.matrix_bot_user_id.clone(),
            device_id: self.matrix_device_id.clone(),
            access_token: self.matrix_access_token.clone(),
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ignore_list: Vec<&String> = self.ignore_list.iter().collect();
        ignore_list.sort();
        f.debug_struct("BotConfig")
            .field("backend_url", &self.backend_url)
            .field("drip_amount", &self.drip_amount)
            .field("ignore_list", &ignore_list)
            .field("matrix_access_token", &mask_token(&self.matrix_access_token))
            .field("matrix_bot_user_id", &self.matrix_bot_user_id)
            .field("network_decimals", &self.network_decimals)
            .field("network_unit", &self.network_unit)
            .field("matrix_homeserver_url", &self.matrix_homeserver_url)
            .field("matrix_device_id", &self.matrix_device_id)
            .field("log_file", &self.log_file)
            .finish()
    }
}
