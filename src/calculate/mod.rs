//! Pure ranking and pairing computations.
//!
//! Both functions consume read-only snapshots and hold no state:
//! - `compute_standings`: player set + match log → ranked win records
//! - `generate_pairings`: ranked standings → next round's matchups

pub mod pairings;
pub mod standings;

pub use pairings::{generate_pairings, PairingError};
pub use standings::{compute_standings, IntegrityError};
