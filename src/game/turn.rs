//! Per-player turn tally.

use log::{debug, trace};

use crate::game::{Player, Scoreboard, TallyCategory};

/// Scoring claims gathered during one uncommitted turn.
///
/// Uses a fixed-size array indexed by category to avoid heap allocation.
/// A category with quantity 0 is absent from the tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnTally {
    /// Quantities indexed by `TallyCategory::index`.
    quantities: [u32; TallyCategory::COUNT],
}

impl TurnTally {
    /// Create an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quantities: [0; TallyCategory::COUNT],
        }
    }

    /// Claim one more instance of `category`.
    pub fn add(&mut self, category: TallyCategory) {
        let quantity = &mut self.quantities[category.index()];
        *quantity = quantity.saturating_add(1);
        trace!("tally {category} now x{quantity}");
    }

    /// Withdraw one instance of `category`. Does nothing if it is absent.
    pub fn remove(&mut self, category: TallyCategory) {
        let quantity = &mut self.quantities[category.index()];
        *quantity = quantity.saturating_sub(1);
        trace!("tally {category} now x{quantity}");
    }

    /// How many times `category` has been claimed this turn.
    #[must_use]
    #[inline]
    pub const fn quantity(&self, category: TallyCategory) -> u32 {
        self.quantities[category.index()]
    }

    /// Present entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (TallyCategory, u32)> + '_ {
        TallyCategory::ALL
            .into_iter()
            .map(|category| (category, self.quantity(category)))
            .filter(|&(_, quantity)| quantity > 0)
    }

    /// Whether nothing has been claimed this turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.iter().all(|&q| q == 0)
    }

    /// Points for the turn: the sum of `point_value * quantity`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries().fold(0u32, |total, (category, quantity)| {
            total.saturating_add(category.point_value().saturating_mul(quantity))
        })
    }

    /// Discard the turn.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Peg the turn total for `player` and clear the tally.
    ///
    /// The total goes through [`Scoreboard::adjust_score`], so it is clamped
    /// and ignored on a locked board like any other adjustment. Callers
    /// decide whether an empty turn may be committed.
    ///
    /// Returns the total that was pegged.
    pub fn commit(&mut self, board: &mut Scoreboard, player: Player) -> u32 {
        let total = self.total();
        debug!("{player} commits turn worth {total}");
        board.adjust_score(player, i32::try_from(total).unwrap_or(i32::MAX));
        self.reset();
        total
    }
}
