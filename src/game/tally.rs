//! The fixed catalog of scoring claims.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCategoryError;

/// A scoring claim a player can add to their turn tally.
///
/// The catalog is closed: every variant carries a fixed label and point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TallyCategory {
    /// Cards summing to fifteen.
    Fifteen = 0,
    /// Two cards of the same rank.
    Pair = 1,
    /// Run of three.
    Run3 = 2,
    /// Run of four.
    Run4 = 3,
    /// Run of five.
    Run5 = 4,
    /// Four-card flush.
    Flush4 = 5,
    /// Five-card flush.
    Flush5 = 6,
    /// Go during the play.
    Go = 7,
    /// Jack turned as the starter.
    Nibs = 8,
    /// Jack of the starter's suit in hand.
    Nobs = 9,
}

impl TallyCategory {
    /// Number of categories in the catalog.
    pub const COUNT: usize = 10;

    /// Every category in catalog order.
    pub const ALL: [TallyCategory; Self::COUNT] = [
        TallyCategory::Fifteen,
        TallyCategory::Pair,
        TallyCategory::Run3,
        TallyCategory::Run4,
        TallyCategory::Run5,
        TallyCategory::Flush4,
        TallyCategory::Flush5,
        TallyCategory::Go,
        TallyCategory::Nibs,
        TallyCategory::Nobs,
    ];

    /// Short label shown on the board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TallyCategory::Fifteen => "15",
            TallyCategory::Pair => "Pair",
            TallyCategory::Run3 => "R3",
            TallyCategory::Run4 => "R4",
            TallyCategory::Run5 => "R5",
            TallyCategory::Flush4 => "F4",
            TallyCategory::Flush5 => "F5",
            TallyCategory::Go => "Go",
            TallyCategory::Nibs => "Nibs",
            TallyCategory::Nobs => "Nobs",
        }
    }

    /// Spelled-out name, accepted by scripts alongside the label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TallyCategory::Fifteen => "fifteen",
            TallyCategory::Pair => "pair",
            TallyCategory::Run3 => "run3",
            TallyCategory::Run4 => "run4",
            TallyCategory::Run5 => "run5",
            TallyCategory::Flush4 => "flush4",
            TallyCategory::Flush5 => "flush5",
            TallyCategory::Go => "go",
            TallyCategory::Nibs => "nibs",
            TallyCategory::Nobs => "nobs",
        }
    }

    /// Points scored by one instance of this claim.
    #[must_use]
    pub const fn point_value(self) -> u32 {
        match self {
            TallyCategory::Go | TallyCategory::Nobs => 1,
            TallyCategory::Fifteen | TallyCategory::Pair | TallyCategory::Nibs => 2,
            TallyCategory::Run3 => 3,
            TallyCategory::Run4 | TallyCategory::Flush4 => 4,
            TallyCategory::Run5 | TallyCategory::Flush5 => 5,
        }
    }

    /// Position in [`TallyCategory::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TallyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TallyCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TallyCategory::ALL
            .into_iter()
            .find(|category| {
                wanted.eq_ignore_ascii_case(category.label())
                    || wanted.eq_ignore_ascii_case(category.name())
            })
            .ok_or_else(|| ParseCategoryError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_point_values() {
        let values: Vec<(&str, u32)> = TallyCategory::ALL
            .iter()
            .map(|c| (c.label(), c.point_value()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("15", 2),
                ("Pair", 2),
                ("R3", 3),
                ("R4", 4),
                ("R5", 5),
                ("F4", 4),
                ("F5", 5),
                ("Go", 1),
                ("Nibs", 2),
                ("Nobs", 1),
            ]
        );
    }

    #[test]
    fn test_index_matches_catalog_order() {
        for (i, category) in TallyCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_parse_label_and_name() {
        assert_eq!("15".parse::<TallyCategory>().unwrap(), TallyCategory::Fifteen);
        assert_eq!("fifteen".parse::<TallyCategory>().unwrap(), TallyCategory::Fifteen);
        assert_eq!("r4".parse::<TallyCategory>().unwrap(), TallyCategory::Run4);
        assert_eq!("FLUSH5".parse::<TallyCategory>().unwrap(), TallyCategory::Flush5);
        assert_eq!(" Nobs ".parse::<TallyCategory>().unwrap(), TallyCategory::Nobs);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "muggins".parse::<TallyCategory>().unwrap_err();
        assert_eq!(err.input, "muggins");
    }
}
