//! Output formatting for the CLI
//!
//! All user-facing output goes through [`OutputFormatter`] so the `--json`
//! and `--no-color` flags behave consistently across commands.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output as colored text or JSON
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter honoring the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print a warning line
    pub fn warning(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    /// Print an error line
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("{message}");
        } else {
            eprintln!("{}", message.red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
