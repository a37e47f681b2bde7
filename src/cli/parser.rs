//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Every option is
//! optional; a bare invocation prints the classic greeting.

use crate::platform::Overrides;
use clap::Parser;

/// brave-hello: greets the world and reports where it is running.
///
/// Prints the toolchain release and the target OS/architecture the binary
/// was built for.
#[derive(Parser, Debug)]
#[command(name = "brave-hello")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Greeting variant (classic, browser).
    ///
    /// `browser` adds a note about running in browsers when the target
    /// architecture is `js`.
    #[arg(long, default_value = "classic", env = "BRAVE_HELLO_VARIANT")]
    pub variant: String,

    /// Output format (text, json).
    #[arg(long, default_value = "text", value_parser = ["text", "json"], ignore_case = true)]
    pub format: String,

    /// Enable verbose diagnostics on stderr.
    ///
    /// Raises the log level to debug on top of `BRAVE_HELLO_LOG` or `RUST_LOG`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Report this runtime version instead of the detected one.
    #[arg(long, env = "BRAVE_HELLO_RUNTIME_VERSION")]
    pub runtime_version: Option<String>,

    /// Report this target OS instead of the detected one.
    #[arg(long, env = "BRAVE_HELLO_OS")]
    pub os: Option<String>,

    /// Report this target architecture instead of the detected one.
    #[arg(long, env = "BRAVE_HELLO_ARCH")]
    pub arch: Option<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            variant: "classic".to_string(),
            format: "text".to_string(),
            verbose: false,
            runtime_version: None,
            os: None,
            arch: None,
        }
    }
}

impl Cli {
    /// Returns the platform overrides given on the command line or in
    /// the environment.
    ///
    /// An empty value counts as unset, the way `GOOS=` falls back to the
    /// host OS.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            runtime_version: set_value(self.runtime_version.as_ref()),
            target_os: set_value(self.os.as_ref()),
            target_arch: set_value(self.arch.as_ref()),
        }
    }
}

fn set_value(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}
