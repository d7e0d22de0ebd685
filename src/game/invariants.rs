//! Session invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger: the scoreboard clamps every adjustment and
//! declares the winner in the same step. A violation means the state was
//! built some other way.

use crate::game::{Player, Session, MIN_SCORE, WINNING_SCORE};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all session invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(session: &Session) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = session.board();

    for player in Player::BOTH {
        let score = board.score(player);

        // Score bounds
        if !(MIN_SCORE..=WINNING_SCORE).contains(&score) {
            violations.push(InvariantViolation {
                message: format!(
                    "{player} score {score} outside [{MIN_SCORE}, {WINNING_SCORE}]"
                ),
            });
        }

        // Pegging out always declares a winner
        if score == WINNING_SCORE && board.winner().is_none() {
            violations.push(InvariantViolation {
                message: format!("{player} reached {WINNING_SCORE} but no winner is set"),
            });
        }
    }

    // The winner holds the winning score
    if let Some(winner) = board.winner() {
        let score = board.score(winner);
        if score != WINNING_SCORE {
            violations.push(InvariantViolation {
                message: format!("{winner} declared winner with score {score}"),
            });
        }
    }

    // A current winner is always counted in the record
    if board.winner().is_some() && session.record().games_played() == 0 {
        violations.push(InvariantViolation {
            message: "winner declared but match record is empty".to_string(),
        });
    }

    violations
}
