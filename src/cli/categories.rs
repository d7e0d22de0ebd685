//! Categories command implementation.

use super::output::{format_categories_text, JsonCategory};
use super::{CliError, OutputFormat};

/// Execute the categories command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => print!("{}", format_categories_text()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonCategory::catalog())?);
        }
    }

    Ok(())
}
