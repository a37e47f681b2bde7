//! Binary entry point for brave-hello.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use brave_hello::cli::output::{OutputFormat, format_error};
use brave_hello::cli::{Cli, execute};
use brave_hello::logging;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);
    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush())
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
