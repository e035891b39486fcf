//! User interface module - output rendering and diagnostics.
//!
//! - `formatter` - Pure formatting functions
//! - This module - output format selection and writing to stdout

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::analyzer::VersionResult;
use crate::error::Result;

pub mod formatter;

pub use formatter::{display_error, render_json, render_text};

/// How a version result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Only the version string
    #[default]
    Text,
    /// All result fields as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render `result` in `format`
pub fn render(result: &VersionResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Write `result` to stdout in `format`
pub fn print_result(result: &VersionResult, format: OutputFormat) -> Result<()> {
    let rendered = render(result, format)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}
