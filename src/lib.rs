//! # brave-hello
//!
//! Greets the brave new world and reports what it is running on.
//!
//! The greeting names the toolchain release the binary was built with and
//! the target operating system and architecture:
//!
//! ```text
//! Hello brave new world! It is working on rust1.88.0 linux/x86_64!
//! ```
//!
//! ## Features
//!
//! - **Two variants**: `classic`, and `browser` which adds a note for `js` targets
//! - **Overrides**: report another runtime version, OS or architecture
//! - **Output formats**: plain text or a single JSON line

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod platform;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export domain types
pub use greeting::{BROWSER_ARCH, BROWSER_CLAUSE, Greeting, Variant, is_browser_arch, render};
pub use platform::{Overrides, Platform};

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
