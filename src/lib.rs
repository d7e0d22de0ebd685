// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Crib: a two-player cribbage pegboard.
//!
//! This crate tracks a cribbage game the way a physical pegboard does:
//! - Cumulative scores clamped to `[0, 121]`
//! - A winner declared the moment a player pegs out at 121
//! - Per-player turn tallies built from scoring claims and committed in one go
//!
//! Claims are trusted; nothing here deals cards or validates a hand.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Terminal board / action scripts   │
//! ├─────────────────────────────────────┤
//! │     Session (actions -> state)      │
//! ├──────────────────┬──────────────────┤
//! │    Scoreboard    │    Turn tally    │
//! └──────────────────┴──────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod script;

pub use error::{ParseCategoryError, ParsePlayerError};

// Re-export key game types at crate root for convenience
pub use game::{
    Action, MatchRecord, Player, Scoreboard, Session, TallyCategory, TurnTally, MIN_SCORE,
    WINNING_SCORE,
};
