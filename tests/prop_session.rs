//! Property-based tests for the pegboard.
//!
//! These tests verify score bounds, the winner lockout, and tally arithmetic.
//! Run with: cargo test --release prop_session

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use crib::game::check_invariants;
use crib::{Action, Player, Scoreboard, Session, TallyCategory, TurnTally, WINNING_SCORE};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

fn category() -> impl Strategy<Value = TallyCategory> {
    (0..TallyCategory::COUNT).prop_map(|i| TallyCategory::ALL[i])
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (player(), -200i32..200).prop_map(|(player, delta)| Action::Adjust { player, delta }),
        (player(), category()).prop_map(|(player, category)| Action::AddTally { player, category }),
        (player(), category())
            .prop_map(|(player, category)| Action::RemoveTally { player, category }),
        player().prop_map(|player| Action::ResetTurn { player }),
        player().prop_map(|player| Action::SubmitTurn { player }),
        Just(Action::ResetGame),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Scores stay within [0, 121] for any sequence of adjustments.
    #[test]
    fn prop_scores_bounded(deltas in prop::collection::vec((player(), any::<i32>()), 0..100)) {
        let mut board = Scoreboard::new();
        for (player, delta) in deltas {
            board.adjust_score(player, delta);
            for p in Player::BOTH {
                prop_assert!(board.score(p) <= WINNING_SCORE);
            }
        }
    }

    /// Once a player reaches 121 the board is frozen until reset.
    #[test]
    fn prop_winner_is_sticky(
        setup in prop::collection::vec((player(), -10i32..40), 0..50),
        after in prop::collection::vec((player(), any::<i32>()), 1..30)
    ) {
        let mut board = Scoreboard::new();
        for (player, delta) in setup {
            board.adjust_score(player, delta);
        }

        let Some(winner) = board.winner() else {
            return Ok(());
        };
        prop_assert_eq!(board.score(winner), WINNING_SCORE);

        let frozen = board;
        for (player, delta) in after {
            prop_assert!(!board.adjust_score(player, delta));
            prop_assert_eq!(board, frozen);
        }
    }

    /// Reset always returns to a fresh board.
    #[test]
    fn prop_reset_clears_board(deltas in prop::collection::vec((player(), any::<i32>()), 0..50)) {
        let mut board = Scoreboard::new();
        for (player, delta) in deltas {
            board.adjust_score(player, delta);
        }

        board.reset_game();
        prop_assert_eq!(board.score(Player::One), 0);
        prop_assert_eq!(board.score(Player::Two), 0);
        prop_assert_eq!(board.winner(), None);
    }

    /// The turn total does not depend on the order claims were added.
    #[test]
    fn prop_total_commutative(claims in prop::collection::vec(category(), 0..40)) {
        let mut forward = TurnTally::new();
        for &c in &claims {
            forward.add(c);
        }

        let mut backward = TurnTally::new();
        for &c in claims.iter().rev() {
            backward.add(c);
        }

        let expected: u32 = claims.iter().map(|c| c.point_value()).sum();
        prop_assert_eq!(forward.total(), expected);
        prop_assert_eq!(backward.total(), expected);
    }

    /// Commit pegs exactly the (clamped) total and leaves an empty tally.
    #[test]
    fn prop_commit_clears(start in 0i32..121, claims in prop::collection::vec(category(), 0..20)) {
        let mut board = Scoreboard::new();
        board.adjust_score(Player::Two, start);

        let mut tally = TurnTally::new();
        for c in claims {
            tally.add(c);
        }
        let total = tally.total();

        let committed = tally.commit(&mut board, Player::Two);
        prop_assert_eq!(committed, total);
        prop_assert_eq!(tally.total(), 0);

        let expected = (start + i32::try_from(total).unwrap()).min(121);
        prop_assert_eq!(i32::from(board.score(Player::Two)), expected);
    }

    /// Any action sequence keeps the whole session consistent.
    #[test]
    fn prop_session_invariants(actions in prop::collection::vec(action(), 0..200)) {
        let mut session = Session::new();
        for action in actions {
            let before = session;
            session.dispatch(action);

            let violations = check_invariants(&session);
            prop_assert!(violations.is_empty(), "{:?} after {:?}", violations, action);

            // A locked board never moves except by reset
            if before.board().is_locked() && action != Action::ResetGame {
                prop_assert_eq!(session.board(), before.board());
            }
        }
    }
}
