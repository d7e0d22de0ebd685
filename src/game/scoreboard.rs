//! Cumulative scores and the winner.

use log::debug;

use crate::game::Player;

/// Lowest score a player can hold.
pub const MIN_SCORE: u8 = 0;

/// Score at which a player pegs out and wins the game.
pub const WINNING_SCORE: u8 = 121;

/// Both players' cumulative scores plus the winner, if any.
///
/// Scores always stay within `[MIN_SCORE, WINNING_SCORE]`. Once a winner is
/// declared the board is locked: every adjustment is ignored until
/// [`Scoreboard::reset_game`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Scores indexed by player.
    scores: [u8; 2],
    /// Winner, set once a score reaches `WINNING_SCORE`.
    winner: Option<Player>,
}

impl Scoreboard {
    /// Create a fresh board with both players at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scores: [MIN_SCORE; 2],
            winner: None,
        }
    }

    /// Current score for a player.
    #[must_use]
    #[inline]
    pub const fn score(&self, player: Player) -> u8 {
        self.scores[player.index()]
    }

    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether scoring is locked because a winner has been declared.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.winner.is_some()
    }

    /// How far `player` is ahead of the opponent (negative when behind).
    #[must_use]
    pub fn lead(&self, player: Player) -> i16 {
        i16::from(self.score(player)) - i16::from(self.score(player.opponent()))
    }

    /// Move a player's peg by `delta` points.
    ///
    /// The new score is clamped to `[MIN_SCORE, WINNING_SCORE]`; points past
    /// 121 are discarded. Reaching 121 declares `player` the winner. Does
    /// nothing once a winner exists.
    ///
    /// Returns `true` if the board changed.
    pub fn adjust_score(&mut self, player: Player, delta: i32) -> bool {
        if self.is_locked() {
            debug!("{player} adjustment of {delta:+} ignored, board is locked");
            return false;
        }

        let current = self.score(player);
        let next = i32::from(current)
            .saturating_add(delta)
            .clamp(i32::from(MIN_SCORE), i32::from(WINNING_SCORE));
        let next = u8::try_from(next).unwrap_or(WINNING_SCORE);
        self.scores[player.index()] = next;

        if next >= WINNING_SCORE {
            debug!("{player} pegged out at {next}");
            self.winner = Some(player);
        }

        next != current
    }

    /// Start a new game: both scores back to zero and no winner.
    pub fn reset_game(&mut self) {
        *self = Self::new();
    }

    /// Build a board directly, bypassing the clamp and winner rules.
    #[cfg(test)]
    pub(crate) const fn from_parts(scores: [u8; 2], winner: Option<Player>) -> Self {
        Self { scores, winner }
    }
}
