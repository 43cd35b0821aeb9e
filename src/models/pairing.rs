//! Pairing model — the next round's matchups between two players.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Standing};

/// An assignment of two players to play each other next round.
///
/// Built from a standings snapshot; slot 1 is the higher-ranked player of
/// the pair. Both slots carry the matching player's own id and name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pairing {
    /// First player's unique ID
    pub id1: PlayerId,

    /// First player's name
    pub name1: String,

    /// Second player's unique ID
    pub id2: PlayerId,

    /// Second player's name
    pub name2: String,
}

impl Pairing {
    /// Create a pairing from two adjacent standings.
    pub fn new(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    /// Whether the given player is one of the pair.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}
