//! In-memory player registry.
//!
//! Holds the identity records for every registered player and assigns their
//! unique ids. Kept in registration order: that order is the stable
//! tie-break used when ranking players with equal wins.

use tracing::debug;

use crate::models::{Player, PlayerId};

/// The set of registered players, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    next_id: u64,
}

impl PlayerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a player and return their newly assigned ID.
    ///
    /// Names are not a uniqueness key; registering the same name twice
    /// creates two distinct players. Ids are never reused, even after
    /// removal.
    pub fn register(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;

        let player = Player::new(id, name);
        debug!(id = %player.id, name = %player.name, "registered player");
        self.players.push(player);
        id
    }

    /// Remove a player, returning their record, or `None` if the ID is
    /// unknown.
    ///
    /// Removing a player that the match log still references is a caller
    /// responsibility to avoid: later standings computations over that log
    /// will fail their integrity check.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let pos = self.players.iter().position(|p| p.id == id)?;
        let player = self.players.remove(pos);
        debug!(id = %id, "removed player");
        Some(player)
    }

    /// Number of currently registered players.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by ID.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Whether the given ID belongs to a registered player.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// All registered players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Remove all players. Previously assigned ids stay retired.
    pub fn clear(&mut self) {
        debug!(count = self.players.len(), "clearing player registry");
        self.players.clear();
    }
}
