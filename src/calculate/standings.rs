//! Standings calculation.
//!
//! Derives the ranked win/loss summary for a player set from the match log.
//! Pure function over read-only snapshots: no side effects, deterministic
//! for identical inputs.

use std::cmp::Reverse;
use std::collections::HashMap;

use thiserror::Error;

use crate::models::{MatchRecord, Player, PlayerId, Standing};

/// The match log references a player absent from the player set.
///
/// The recorder validates reports before logging, so this indicates the two
/// snapshots are inconsistent (for example a player removed while matches
/// still reference them).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("match log references player {id} absent from the player set")]
pub struct IntegrityError {
    /// The unknown player ID encountered in the log
    pub id: PlayerId,
}

/// Compute ranked standings for the given players from the given match log.
///
/// Output is ordered by wins descending. Players with equal wins keep their
/// relative order in the input sequence (registration order) — there is no
/// secondary tie-break such as opponent strength; this is a known
/// simplification of full Swiss ranking.
///
/// All-or-nothing: if any match references an unknown player, no standings
/// are returned.
pub fn compute_standings(
    players: &[Player],
    matches: &[MatchRecord],
) -> Result<Vec<Standing>, IntegrityError> {
    let mut wins: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, 0)).collect();
    let mut played: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, 0)).collect();

    for record in matches {
        for id in [record.winner, record.loser] {
            match played.get_mut(&id) {
                Some(count) => *count += 1,
                None => return Err(IntegrityError { id }),
            }
        }
        // Winner presence was just checked above.
        *wins.get_mut(&record.winner).unwrap() += 1;
    }

    let mut standings: Vec<Standing> = players
        .iter()
        .map(|p| Standing::new(p.id, p.name.clone(), wins[&p.id], played[&p.id]))
        .collect();

    // Stable sort: equal-wins players keep registration order.
    standings.sort_by_key(|s| Reverse(s.wins));

    Ok(standings)
}
