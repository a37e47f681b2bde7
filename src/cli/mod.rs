//! CLI layer for brave-hello.
//!
//! Provides the command-line interface using clap, the greeting command
//! and its text/JSON output.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
