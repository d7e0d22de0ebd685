//! Game layer for Crib.
//!
//! Implements the pegboard rules:
//! - Players and their cumulative scores
//! - The fixed tally catalog (fifteens, pairs, runs, flushes, go, nibs, nobs)
//! - Per-turn tally accumulation and commit
//! - Sessions that turn user actions into successive states
//! - Invariant checks for the whole session

mod invariants;
mod player;
mod scoreboard;
mod session;
mod tally;
mod turn;

pub use invariants::{check_invariants, InvariantViolation};
pub use player::Player;
pub use scoreboard::{Scoreboard, MIN_SCORE, WINNING_SCORE};
pub use session::{Action, MatchRecord, Session};
pub use tally::TallyCategory;
pub use turn::TurnTally;
