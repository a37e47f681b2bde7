//! CLI command implementation.
//!
//! Detects the platform, applies overrides and renders the greeting.

use crate::cli::output::{OutputFormat, format_greeting};
use crate::cli::parser::Cli;
use crate::error::Result;
use crate::greeting::{Greeting, Variant};
use crate::platform::Platform;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with the text to write to stdout on success.
///
/// # Errors
///
/// Returns an error if the variant is unknown, an override is empty, or
/// the output cannot be formatted.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let variant = Variant::from_name(&cli.variant)?;

    let detected = Platform::detect();
    tracing::debug!(platform = %detected, "detected platform");

    let overrides = cli.overrides();
    let platform = if overrides.is_empty() {
        detected
    } else {
        detected.with_overrides(&overrides)?
    };

    let greeting = Greeting::new(&platform, variant);
    tracing::debug!(
        variant = %variant,
        browser = greeting.browser,
        "rendered greeting"
    );

    format_greeting(&greeting, format)
}
