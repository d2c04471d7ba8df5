//! Room identity.

use serde::{Deserialize, Serialize};

/// A chat room, identified by the transport's opaque room id (e.g. `!abc:matrix.org`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
}

impl Room {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
