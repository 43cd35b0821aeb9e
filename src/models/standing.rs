//! Derived standings model.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player's win record at a point in the tournament.
///
/// Standings are derived, not stored: they are computed fresh from the
/// current match log for a given player set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    /// Player's unique ID
    pub id: PlayerId,

    /// Player's display name
    pub name: String,

    /// Matches won
    pub wins: u32,

    /// Matches played (won or lost)
    pub matches_played: u32,
}

impl Standing {
    /// Create a new Standing.
    pub fn new(id: PlayerId, name: impl Into<String>, wins: u32, matches_played: u32) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            matches_played,
        }
    }

    /// Matches lost, by symmetry with the match log.
    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_losses() {
        let standing = Standing::new(PlayerId::new(1), "Ann", 3, 5);
        assert_eq!(standing.losses(), 2);
    }

    #[test]
    fn test_standing_zero_games() {
        let standing = Standing::new(PlayerId::new(1), "Ann", 0, 0);
        assert_eq!(standing.wins, 0);
        assert_eq!(standing.losses(), 0);
    }

    #[test]
    fn test_standing_serialization() {
        let standing = Standing::new(PlayerId::new(1), "Ann", 2, 3);
        let json = serde_json::to_string(&standing).unwrap();
        let deserialized: Standing = serde_json::from_str(&json).unwrap();
        assert_eq!(standing.id, deserialized.id);
        assert_eq!(standing.wins, deserialized.wins);
        assert_eq!(standing.matches_played, deserialized.matches_played);
    }
}
