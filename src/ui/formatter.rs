//! Pure formatting functions for UI output.
//!
//! Rendering of version results is kept free of I/O so it can be tested;
//! the `display_*` helpers write diagnostics to stderr.

use console::style;

use crate::analyzer::VersionResult;
use crate::error::Result;

/// Render a result as plain text: just the version string.
pub fn render_text(result: &VersionResult) -> String {
    result.version.clone()
}

/// Render a result as pretty-printed JSON with every field.
pub fn render_json(result: &VersionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}
