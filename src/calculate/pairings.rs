//! Swiss pairing generation.
//!
//! Partitions a rank-sorted standings list into adjacent pairs, so each
//! player meets an opponent with an equal or nearly-equal win record.

use thiserror::Error;

use crate::models::{Pairing, Standing};

/// Pairing requires an even number of players.
///
/// Odd counts would need a bye, which this core does not support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot pair an odd number of players ({player_count})")]
pub struct PairingError {
    /// Number of players in the standings snapshot
    pub player_count: usize,
}

/// Generate next-round pairings from rank-sorted standings.
///
/// Pair `k` holds the players at ranks `2k` and `2k+1`, so output order
/// follows rank order with the top bracket first. Every player appears in
/// exactly one pair. No rematch-avoidance is performed: two players who
/// already met this tournament may be paired again; this is a known
/// simplification.
///
/// Zero players is a valid (empty) round; an odd count is an error, never a
/// partial result.
pub fn generate_pairings(standings: &[Standing]) -> Result<Vec<Pairing>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError {
            player_count: standings.len(),
        });
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|bracket| Pairing::new(&bracket[0], &bracket[1]))
        .collect();

    Ok(pairings)
}
