//! Validated match recording.
//!
//! The gate between raw outcome reports and the append-only log: checks that
//! a report names two distinct, registered players before it is recorded.
//! The standings calculator re-checks log integrity anyway, but validating
//! here keeps bad references out of the log in the first place.

use thiserror::Error;
use tracing::warn;

use crate::log::MatchLog;
use crate::models::{MatchRecord, PlayerId};
use crate::registry::PlayerRegistry;

/// Errors that can occur when recording a match outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("player {0} cannot play themselves")]
    InvalidMatch(PlayerId),

    #[error("no registered player with id {0}")]
    UnknownPlayer(PlayerId),
}

/// Record the outcome of a single match between two registered players.
///
/// Appends one immutable record to the log. Identical re-reports are not
/// deduplicated; each call adds a new entry.
pub fn record_match(
    registry: &PlayerRegistry,
    log: &mut MatchLog,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), MatchError> {
    if winner == loser {
        warn!(id = %winner, "rejected self-match report");
        return Err(MatchError::InvalidMatch(winner));
    }

    for id in [winner, loser] {
        if !registry.contains(id) {
            warn!(id = %id, "rejected match report for unknown player");
            return Err(MatchError::UnknownPlayer(id));
        }
    }

    log.append(MatchRecord::new(winner, loser));
    Ok(())
}
