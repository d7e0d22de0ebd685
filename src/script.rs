//! Action scripts: drive a session from plain text.
//!
//! One action per line. `#` starts a comment and blank lines are skipped.
//!
//! ```text
//! # pegging
//! p1 +1              adjust player 1 by one point
//! p2 -1              take a point back from player 2
//! p1 add 15          claim a fifteen on player 1's turn
//! p1 add nobs
//! p1 drop 15         withdraw a claim
//! p1 submit          peg the turn total
//! p2 reset           discard player 2's turn
//! new-game           play again
//! ```
//!
//! Categories are matched case-insensitively by label (`15`, `R3`, `F4`) or
//! name (`fifteen`, `run3`, `flush4`).

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::game::{Action, Player, Session, TallyCategory};

/// Errors from loading or parsing a script.
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read.
    Io(io::Error),
    /// A line is not a valid action.
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read script: {e}"),
            ScriptError::Parse { line, text, reason } => {
                write!(f, "line {line}: {reason} in {text:?}")
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(e: io::Error) -> Self {
        ScriptError::Io(e)
    }
}

/// A parsed sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    actions: Vec<Action>,
}

impl Script {
    /// Parse a script from text.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Parse`] for the first line that is not a valid
    /// action.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut actions = Vec::new();

        for (i, raw) in source.lines().enumerate() {
            let text = raw.split('#').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }

            let action = parse_action(text).map_err(|reason| ScriptError::Parse {
                line: i + 1,
                text: text.to_string(),
                reason,
            })?;
            actions.push(action);
        }

        Ok(Self { actions })
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// The parsed actions in order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Apply every action to `session`.
    ///
    /// Returns how many actions changed the session.
    pub fn run(&self, session: &mut Session) -> usize {
        session.dispatch_all(self.actions.iter().copied())
    }
}

/// Parse one non-empty, comment-free line.
fn parse_action(text: &str) -> Result<Action, String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    match words.as_slice() {
        [word] if is_new_game(word) => Ok(Action::ResetGame),
        [who, rest @ ..] => {
            let player: Player = who.parse().map_err(|e| format!("{e}"))?;
            parse_player_action(player, rest)
        }
        [] => Err("empty action".to_string()),
    }
}

fn is_new_game(word: &str) -> bool {
    ["new-game", "newgame", "reset-game"]
        .iter()
        .any(|w| word.eq_ignore_ascii_case(w))
}

fn parse_player_action(player: Player, words: &[&str]) -> Result<Action, String> {
    match words {
        [verb, category] if verb.eq_ignore_ascii_case("add") => Ok(Action::AddTally {
            player,
            category: parse_category(category)?,
        }),
        [verb, category] if verb.eq_ignore_ascii_case("drop") => Ok(Action::RemoveTally {
            player,
            category: parse_category(category)?,
        }),
        [verb] if verb.eq_ignore_ascii_case("reset") => Ok(Action::ResetTurn { player }),
        [verb] if verb.eq_ignore_ascii_case("submit") => Ok(Action::SubmitTurn { player }),
        [delta] if delta.starts_with(['+', '-']) => {
            let delta = delta
                .parse::<i32>()
                .map_err(|e| format!("bad adjustment {delta:?}: {e}"))?;
            Ok(Action::Adjust { player, delta })
        }
        [] => Err(format!("missing action for {player}")),
        _ => Err("expected +N, -N, add <category>, drop <category>, reset or submit".to_string()),
    }
}

fn parse_category(word: &str) -> Result<TallyCategory, String> {
    word.parse().map_err(|e| format!("{e}"))
}
