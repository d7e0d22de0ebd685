//! Error types for parsing pegboard input.
//!
//! The game core itself cannot fail: every action is a total function and a
//! locked board simply ignores further scoring. Errors only arise when text
//! from outside (scripts, command lines) is turned into game values.

use std::fmt;

/// A tally category name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    /// The text that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tally category: {:?}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

/// A player reference that is neither player one nor player two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlayerError {
    /// The text that failed to parse.
    pub input: String,
}

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown player: {:?} (expected p1 or p2)", self.input)
    }
}

impl std::error::Error for ParsePlayerError {}
