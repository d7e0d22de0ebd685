//! Serializable session snapshot.

use serde::Serialize;

use crate::game::{Player, Session};

/// JSON-serializable view of a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Winner player number (null while the game is running).
    pub winner: Option<u8>,
    /// Per-player state, player 1 first.
    pub players: Vec<PlayerSummary>,
}

/// JSON-serializable per-player state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    /// Player number (1 or 2).
    pub player: u8,
    /// Cumulative score.
    pub score: u8,
    /// Points ahead of the opponent (negative when behind).
    pub lead: i16,
    /// Games won this session.
    pub games_won: u32,
    /// Total of the uncommitted turn.
    pub turn_total: u32,
    /// Uncommitted claims in catalog order.
    pub tally: Vec<TallyEntrySummary>,
}

/// JSON-serializable tally entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TallyEntrySummary {
    /// Category label.
    pub category: &'static str,
    /// Points per claim.
    pub points: u32,
    /// Times claimed.
    pub quantity: u32,
}

impl SessionSummary {
    /// Snapshot a session.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let board = session.board();
        let players = Player::BOTH
            .into_iter()
            .map(|player| {
                let tally = session.tally(player);
                PlayerSummary {
                    player: player.number(),
                    score: board.score(player),
                    lead: board.lead(player),
                    games_won: session.record().wins(player),
                    turn_total: tally.total(),
                    tally: tally
                        .entries()
                        .map(|(category, quantity)| TallyEntrySummary {
                            category: category.label(),
                            points: category.point_value(),
                            quantity,
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            winner: board.winner().map(Player::number),
            players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, TallyCategory};

    #[test]
    fn test_summary_fields() {
        let mut session = Session::new();
        session.dispatch_all([
            Action::Adjust {
                player: Player::Two,
                delta: 10,
            },
            Action::AddTally {
                player: Player::One,
                category: TallyCategory::Run3,
            },
        ]);

        let summary = SessionSummary::from_session(&session);
        assert_eq!(summary.winner, None);
        assert_eq!(summary.players.len(), 2);

        let p1 = &summary.players[0];
        assert_eq!(p1.player, 1);
        assert_eq!(p1.score, 0);
        assert_eq!(p1.lead, -10);
        assert_eq!(p1.turn_total, 3);
        assert_eq!(
            p1.tally,
            vec![TallyEntrySummary {
                category: "R3",
                points: 3,
                quantity: 1
            }]
        );

        let p2 = &summary.players[1];
        assert_eq!(p2.score, 10);
        assert!(p2.tally.is_empty());
    }

    #[test]
    fn test_summary_json() {
        let mut session = Session::new();
        session.dispatch(Action::Adjust {
            player: Player::One,
            delta: 121,
        });

        let json = serde_json::to_value(SessionSummary::from_session(&session)).unwrap();
        assert_eq!(json["winner"], 1);
        assert_eq!(json["players"][0]["score"], 121);
        assert_eq!(json["players"][0]["games_won"], 1);
        assert_eq!(json["players"][1]["tally"], serde_json::json!([]));
    }
}
