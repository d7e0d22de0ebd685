//! Run command implementation.

use super::output::JsonRunResult;
use super::{CliError, OutputFormat};
use crib::Session;
use crib::render::{render_text, SessionSummary};
use crib::script::Script;
use std::path::Path;

/// Read and parse a script, naming the file in any error.
fn load_script(script: &Path) -> Result<Script, CliError> {
    Script::from_path(script).map_err(|e| CliError::new(format!("{}: {e}", script.display())))
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed.
pub(crate) fn execute(script: &Path, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let parsed = load_script(script)?;

    let mut session = Session::new();
    let applied = parsed.run(&mut session);
    let actions = parsed.actions().len();

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!("Applied {applied} of {actions} actions from {}", script.display());
                println!();
            }
            print!("{}", render_text(&session));
        }
        OutputFormat::Json => {
            let result = JsonRunResult {
                actions,
                applied,
                session: SessionSummary::from_session(&session),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
