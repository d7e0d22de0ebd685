//! Output formatting utilities for CLI.

use crib::TallyCategory;
use crib::render::SessionSummary;
use serde::Serialize;

/// JSON-serializable result of running a script.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Actions read from the script.
    pub(super) actions: usize,
    /// Actions that changed the board.
    pub(super) applied: usize,
    /// Final session state.
    pub(super) session: SessionSummary,
}

/// JSON-serializable catalog entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonCategory {
    /// Script name.
    name: &'static str,
    /// Board label.
    label: &'static str,
    /// Points per claim.
    points: u32,
    /// Key on the interactive board.
    key: char,
}

impl JsonCategory {
    /// The whole catalog in order.
    pub(super) fn catalog() -> Vec<Self> {
        TallyCategory::ALL
            .into_iter()
            .map(|category| Self {
                name: category.name(),
                label: category.label(),
                points: category.point_value(),
                key: super::play::key_for_category(category),
            })
            .collect()
    }
}

/// Format the catalog as human-readable text.
pub(super) fn format_categories_text() -> String {
    let mut output = String::new();

    output.push_str("Scoring categories\n");
    output.push_str("==================\n\n");
    output.push_str("  key  label  points  name\n");

    for category in TallyCategory::ALL {
        output.push_str(&format!(
            "  [{}]  {:<5}  {:>6}  {}\n",
            super::play::key_for_category(category),
            category.label(),
            category.point_value(),
            category.name()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json() {
        let json = serde_json::to_value(JsonCategory::catalog()).unwrap();
        assert_eq!(json[0]["label"], "15");
        assert_eq!(json[0]["key"], "1");
        assert_eq!(json[9]["name"], "nobs");
        assert_eq!(json[9]["key"], "0");
    }

    #[test]
    fn test_categories_text() {
        let text = format_categories_text();
        assert!(text.contains("[1]  15          2  fifteen\n"));
        assert!(text.contains("[0]  Nobs        1  nobs\n"));
    }
}
