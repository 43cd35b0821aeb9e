//! Match outcome model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// The recorded outcome of a single match between two players.
///
/// Matches are directed: exactly one winner and one loser, no draw
/// representation. Once appended to the log a record is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Winner's player ID
    pub winner: PlayerId,

    /// Loser's player ID
    pub loser: PlayerId,

    /// When this outcome was recorded
    pub recorded_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Create a new record for the given outcome.
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }

    /// Whether the given player took part in this match.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.winner == id || self.loser == id
    }
}
