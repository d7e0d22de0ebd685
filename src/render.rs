//! Board rendering for non-interactive output.
//!
//! Two views of a [`Session`](crate::Session):
//! - `render_text` - a plain-text board for terminals and logs
//! - `SessionSummary` - a serializable snapshot for JSON output

mod summary;
mod text;

pub use summary::{PlayerSummary, SessionSummary, TallyEntrySummary};
pub use text::{describe_tally, render_text};
