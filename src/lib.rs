//! # Swiss Rounds
//!
//! Swiss-system tournament core: ranked standings and next-round pairings.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, match records, standings, pairings)
//! - **registry**: Player identity store; assigns unique ids
//! - **log**: Append-only match outcome record
//! - **recorder**: Validated match reporting into the log
//! - **calculate**: Pure standings and pairing computations
//!
//! Data flows one way: registry + log → standings → pairings. The
//! computations in `calculate` are pure functions over snapshots; the
//! registry and log are plain in-memory collaborators an orchestration
//! layer (CLI, scheduler, test harness) sequences between rounds.
//!
//! Known simplifications, kept deliberately: ties are broken by
//! registration order rather than a real Swiss tie-break, odd player
//! counts (byes) are rejected, and pairing does not avoid rematches.
//!
//! ## Quick start
//!
//! ```rust
//! use swiss_rounds::{compute_standings, generate_pairings, record_match};
//! use swiss_rounds::{MatchLog, PlayerRegistry};
//!
//! let mut registry = PlayerRegistry::new();
//! let mut log = MatchLog::new();
//!
//! let ann = registry.register("Ann");
//! let bob = registry.register("Bob");
//!
//! record_match(&registry, &mut log, ann, bob)?;
//!
//! let standings = compute_standings(registry.players(), log.matches())?;
//! let pairings = generate_pairings(&standings)?;
//!
//! assert_eq!(pairings.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculate;
pub mod log;
pub mod models;
pub mod recorder;
pub mod registry;

pub use calculate::{compute_standings, generate_pairings, IntegrityError, PairingError};
pub use log::MatchLog;
pub use models::*;
pub use recorder::{record_match, MatchError};
pub use registry::PlayerRegistry;
