//! Append-only match log.
//!
//! Records match outcomes in the order they were reported. Individual
//! entries are never edited or deleted; the only mutations are appending a
//! new record and resetting the whole log.

use tracing::debug;

use crate::models::{MatchRecord, PlayerId};

/// The append-only record of match outcomes.
#[derive(Debug, Clone, Default)]
pub struct MatchLog {
    matches: Vec<MatchRecord>,
}

impl MatchLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    /// Append one outcome record.
    ///
    /// Re-reporting an identical outcome is not deduplicated: each call adds
    /// a new entry. Rematches within a tournament are legal data.
    pub fn append(&mut self, record: MatchRecord) {
        debug!(winner = %record.winner, loser = %record.loser, "recorded match");
        self.matches.push(record);
    }

    /// All recorded matches, oldest first.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Number of recorded matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no matches have been recorded.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of wins recorded for the given player.
    pub fn wins_for(&self, id: PlayerId) -> u32 {
        self.matches.iter().filter(|m| m.winner == id).count() as u32
    }

    /// Number of matches the given player took part in.
    pub fn matches_for(&self, id: PlayerId) -> u32 {
        self.matches.iter().filter(|m| m.involves(id)).count() as u32
    }

    /// Remove all match records. The only permitted mutation besides append.
    pub fn clear(&mut self) {
        debug!(count = self.matches.len(), "clearing match log");
        self.matches.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_len() {
        let mut log = MatchLog::new();
        assert!(log.is_empty());

        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_identical_reports_not_deduplicated() {
        let mut log = MatchLog::new();
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));

        assert_eq!(log.len(), 2);
        assert_eq!(log.wins_for(PlayerId::new(1)), 2);
    }

    #[test]
    fn test_wins_and_matches_counts() {
        let mut log = MatchLog::new();
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));
        log.append(MatchRecord::new(PlayerId::new(2), PlayerId::new(1)));
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(3)));

        assert_eq!(log.wins_for(PlayerId::new(1)), 2);
        assert_eq!(log.matches_for(PlayerId::new(1)), 3);
        assert_eq!(log.wins_for(PlayerId::new(2)), 1);
        assert_eq!(log.matches_for(PlayerId::new(2)), 2);
        assert_eq!(log.wins_for(PlayerId::new(3)), 0);
        assert_eq!(log.matches_for(PlayerId::new(3)), 1);
    }

    #[test]
    fn test_clear() {
        let mut log = MatchLog::new();
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.wins_for(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_matches_preserve_insertion_order() {
        let mut log = MatchLog::new();
        log.append(MatchRecord::new(PlayerId::new(1), PlayerId::new(2)));
        log.append(MatchRecord::new(PlayerId::new(3), PlayerId::new(4)));

        let winners: Vec<PlayerId> = log.matches().iter().map(|m| m.winner).collect();
        assert_eq!(winners, vec![PlayerId::new(1), PlayerId::new(3)]);
    }
}
