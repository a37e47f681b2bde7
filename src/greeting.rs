//! The greeting and its two variants.
//!
//! Rendering is a pure function of a [`Platform`] and a [`Variant`]:
//!
//! - [`Variant::Classic`] prints
//!   `Hello brave new world! It is working on {version} {os}/{arch}!`
//! - [`Variant::Browser`] prints the same sentence and, when the target
//!   architecture is exactly `js`, adds
//!   ` That means you can execute it in browsers.`
//!
//! Both end with a single newline.

use crate::error::{CommandError, Result};
use crate::platform::Platform;
use serde::Serialize;
use std::fmt::Write;

/// Architecture name that marks a browser build.
pub const BROWSER_ARCH: &str = "js";

/// Clause appended by [`Variant::Browser`] for browser builds.
pub const BROWSER_CLAUSE: &str = " That means you can execute it in browsers.";

/// Which greeting to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Plain greeting.
    #[default]
    Classic,
    /// Greeting with the browser clause for `js` targets.
    Browser,
}

impl Variant {
    /// All variants, in display order.
    pub const ALL: [Self; 2] = [Self::Classic, Self::Browser];

    /// Returns the variant's command-line name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Browser => "browser",
        }
    }

    /// Parses a variant from its name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownVariant`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CommandError::UnknownVariant(name.to_string()).into())
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `arch` names a browser target.
///
/// The comparison is exact and case-sensitive.
#[must_use]
pub fn is_browser_arch(arch: &str) -> bool {
    arch == BROWSER_ARCH
}

/// Renders the greeting text, including the trailing newline.
///
/// # Examples
///
/// ```
/// use brave_hello::{Platform, Variant, render};
///
/// let platform = Platform::new("go1.21", "js", "js").unwrap();
/// assert_eq!(
///     render(&platform, Variant::Browser),
///     "Hello brave new world! It is working on go1.21 js/js! That means you can execute it in browsers.\n"
/// );
/// ```
#[must_use]
pub fn render(platform: &Platform, variant: Variant) -> String {
    let mut out = String::new();
    let _ = write!(out, "Hello brave new world! It is working on {platform}!");
    if appends_browser_clause(platform, variant) {
        out.push_str(BROWSER_CLAUSE);
    }
    out.push('\n');
    out
}

fn appends_browser_clause(platform: &Platform, variant: Variant) -> bool {
    variant == Variant::Browser && is_browser_arch(platform.target_arch())
}

/// A rendered greeting together with the inputs it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    /// Platform the greeting describes.
    #[serde(flatten)]
    pub platform: Platform,
    /// Variant used to render it.
    pub variant: Variant,
    /// Whether the browser clause was appended.
    pub browser: bool,
    /// The exact text written to stdout.
    pub message: String,
}

impl Greeting {
    /// Renders a greeting for `platform`.
    #[must_use]
    pub fn new(platform: &Platform, variant: Variant) -> Self {
        Self {
            platform: platform.clone(),
            variant,
            browser: appends_browser_clause(platform, variant),
            message: render(platform, variant),
        }
    }
}
