//! Session state: the scoreboard, both turn tallies, and the match record.
//!
//! Every user action is an [`Action`]. [`Session::next`] builds the following
//! state from the current one without touching it, and [`Session::dispatch`]
//! swaps that new state in. The session is a small `Copy` value, so a
//! front end can keep the previous state around for free.

use log::{debug, warn};

use crate::game::{check_invariants, Player, Scoreboard, TallyCategory, TurnTally};

/// A single user action at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a player's peg directly, bypassing the tally.
    Adjust {
        /// Player whose score changes.
        player: Player,
        /// Points to add (negative to subtract).
        delta: i32,
    },
    /// Claim one instance of a category on the player's turn tally.
    AddTally {
        /// Player building the turn.
        player: Player,
        /// Category claimed.
        category: TallyCategory,
    },
    /// Withdraw one instance of a category from the player's turn tally.
    RemoveTally {
        /// Player building the turn.
        player: Player,
        /// Category withdrawn.
        category: TallyCategory,
    },
    /// Discard the player's turn tally.
    ResetTurn {
        /// Player whose tally is discarded.
        player: Player,
    },
    /// Peg the player's turn total and clear the tally.
    ///
    /// Ignored while the turn total is zero.
    SubmitTurn {
        /// Player submitting.
        player: Player,
    },
    /// Start a new game.
    ResetGame,
}

/// Games won per player since the session started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchRecord {
    /// Wins indexed by player.
    wins: [u32; 2],
}

impl MatchRecord {
    /// Games `player` has won.
    #[must_use]
    pub const fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Total finished games.
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.wins[0].saturating_add(self.wins[1])
    }

    fn record_win(&mut self, player: Player) {
        let wins = &mut self.wins[player.index()];
        *wins = wins.saturating_add(1);
    }
}

/// Complete pegboard state for one sitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Cumulative scores and winner.
    board: Scoreboard,
    /// Uncommitted turn tallies indexed by player.
    tallies: [TurnTally; 2],
    /// Games won so far.
    record: MatchRecord,
}

impl Session {
    /// Create a session with a fresh board and empty tallies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Scoreboard::new(),
            tallies: [TurnTally::new(); 2],
            record: MatchRecord { wins: [0; 2] },
        }
    }

    /// The scoreboard.
    #[must_use]
    pub const fn board(&self) -> &Scoreboard {
        &self.board
    }

    /// A player's uncommitted turn tally.
    #[must_use]
    pub const fn tally(&self, player: Player) -> &TurnTally {
        &self.tallies[player.index()]
    }

    /// Games won so far.
    #[must_use]
    pub const fn record(&self) -> &MatchRecord {
        &self.record
    }

    /// Whether `player` may submit their turn (its total is above zero).
    #[must_use]
    pub fn can_submit(&self, player: Player) -> bool {
        self.tally(player).total() > 0
    }

    /// Compute the state that follows `action`, leaving `self` untouched.
    #[must_use]
    pub fn next(&self, action: Action) -> Self {
        let mut next = *self;

        match action {
            Action::Adjust { player, delta } => {
                next.board.adjust_score(player, delta);
            }
            Action::AddTally { player, category } => {
                next.tallies[player.index()].add(category);
            }
            Action::RemoveTally { player, category } => {
                next.tallies[player.index()].remove(category);
            }
            Action::ResetTurn { player } => {
                next.tallies[player.index()].reset();
            }
            Action::SubmitTurn { player } => {
                if next.can_submit(player) {
                    next.tallies[player.index()].commit(&mut next.board, player);
                }
            }
            Action::ResetGame => {
                next.board.reset_game();
            }
        }

        if self.board.winner().is_none()
            && let Some(winner) = next.board.winner()
        {
            next.record.record_win(winner);
        }

        next
    }

    /// Apply `action`, replacing the current state with the next one.
    ///
    /// Returns `true` if anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.next(action);
        let changed = next != *self;
        debug!("{action:?} -> {}", if changed { "applied" } else { "no change" });

        if let Some(winner) = next.board.winner()
            && self.board.winner().is_none()
        {
            debug!(
                "{winner} wins, match now {}-{}",
                next.record.wins(Player::One),
                next.record.wins(Player::Two)
            );
        }

        *self = next;

        if cfg!(debug_assertions) {
            for violation in check_invariants(self) {
                warn!("{violation}");
            }
        }

        changed
    }

    /// Build a session directly from a board and match record, with empty tallies.
    #[cfg(test)]
    pub(crate) const fn from_parts(board: Scoreboard, wins: [u32; 2]) -> Self {
        Self {
            board,
            tallies: [TurnTally::new(); 2],
            record: MatchRecord { wins },
        }
    }

    /// Apply a sequence of actions in order.
    ///
    /// Returns how many of them changed the session.
    pub fn dispatch_all<I>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .filter(|&action| self.dispatch(action))
            .count()
    }
}
