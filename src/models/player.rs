//! Player identity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A registered tournament player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier, assigned by the registry and immutable afterwards
    pub id: PlayerId,

    /// Display name; need not be unique across players
    pub name: String,

    /// When this player was registered
    pub registered_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player with the given registry-assigned ID.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            registered_at: Utc::now(),
        }
    }
}
