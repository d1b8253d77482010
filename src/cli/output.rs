//! Terminal output formatting
//!
//! Human-readable colored output by default, machine-readable JSON when the
//! `--json` flag is set. Handlers branch on [`OutputFormatter::is_json`] and
//! emit one JSON document per command in that mode.

use crate::error::{DeskTicketError, Result};
use colored::Colorize;
use serde::Serialize;

/// Formatter for all user-facing CLI output
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning to stderr
    pub fn warning(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {}", "Error:".red().bold(), message);
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}
