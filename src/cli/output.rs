//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::{Error, Result};
use crate::greeting::Greeting;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a greeting.
///
/// Text output is the greeting message verbatim. JSON output is a single
/// line followed by a newline.
pub fn format_greeting(greeting: &Greeting, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(greeting.message.clone()),
        OutputFormat::Json => format_json_line(greeting),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            serde_json::to_string(&ErrorOutput {
                error: error.to_string(),
            })
            .unwrap_or_else(|_| r#"{"error":"unknown"}"#.to_string())
        }
    }
}

fn format_json_line<T: Serialize>(value: &T) -> Result<String> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    Ok(line)
}
