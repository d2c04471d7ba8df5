//! Configuration errors. All of them are fatal at startup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Every required variable that was absent or empty.
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: String, value: String },
}
