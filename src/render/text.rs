//! Plain-text board.

// Allow format! with push_str for readability - the allocation overhead is negligible for text rendering
#![allow(clippy::format_push_string)]

use crate::game::{Player, Session, TurnTally};

/// Render the session as a plain-text board.
///
/// Output format:
/// ```text
/// === CRIBBAGE ===
///
/// Player 1  Score: 45 - 30
///   Turn score: 5 (15 x2, Nobs x1)
///
/// Player 2  Score: 30 - 45
///   Turn score: 0
///
/// Winner: none
/// Games won: 0 - 0
/// ```
#[must_use]
pub fn render_text(session: &Session) -> String {
    let mut output = String::new();

    output.push_str("=== CRIBBAGE ===\n\n");

    for player in Player::BOTH {
        render_player(&mut output, session, player);
    }

    match session.board().winner() {
        Some(winner) => output.push_str(&format!("Winner: {winner} wins!\n")),
        None => output.push_str("Winner: none\n"),
    }

    let record = session.record();
    output.push_str(&format!(
        "Games won: {} - {}\n",
        record.wins(Player::One),
        record.wins(Player::Two)
    ));

    output
}

fn render_player(output: &mut String, session: &Session, player: Player) {
    let board = session.board();
    output.push_str(&format!(
        "{player}  Score: {} - {}\n",
        board.score(player),
        board.score(player.opponent())
    ));

    let tally = session.tally(player);
    output.push_str(&format!("  Turn score: {}", tally.total()));
    if !tally.is_empty() {
        output.push_str(&format!(" ({})", describe_tally(tally)));
    }
    output.push_str("\n\n");
}

/// Comma-separated `label xN` entries in catalog order, e.g. `15 x2, Nobs x1`.
#[must_use]
pub fn describe_tally(tally: &TurnTally) -> String {
    tally
        .entries()
        .map(|(category, quantity)| format!("{category} x{quantity}"))
        .collect::<Vec<_>>()
        .join(", ")
}
