//! Player identity.

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePlayerError;

/// One of the two players at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Both players, in seat order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Look up a player by its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The 1-based player number shown on the board.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays.
    #[must_use]
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "p1" | "one" | "player1" => Ok(Player::One),
            "2" | "p2" | "two" | "player2" => Ok(Player::Two),
            _ => Err(ParsePlayerError {
                input: s.to_string(),
            }),
        }
    }
}
