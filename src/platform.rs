//! Platform metadata reported by the greeting.
//!
//! A [`Platform`] bundles the three strings the greeting is built from: the
//! toolchain release the binary was compiled with, and the operating system
//! and architecture of the compilation target. Detected values can be
//! replaced through [`Overrides`], which is how a build for one target can
//! describe itself as another.

use crate::error::{Error, Result};
use serde::Serialize;

/// Toolchain release recorded by the build script, e.g. `rust1.88.0`.
const RUSTC_VERSION: &str = env!("BRAVE_HELLO_RUSTC_VERSION");

/// Returns the toolchain release the binary was built with.
#[must_use]
pub const fn runtime_version() -> &'static str {
    RUSTC_VERSION
}

/// The runtime version and target platform of the running binary.
///
/// Every field is guaranteed non-empty.
///
/// # Examples
///
/// ```
/// use brave_hello::Platform;
///
/// let platform = Platform::new("go1.21", "linux", "amd64").unwrap();
/// assert_eq!(platform.to_string(), "go1.21 linux/amd64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    runtime_version: String,
    target_os: String,
    target_arch: String,
}

/// Optional replacements for detected platform values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replacement runtime version.
    pub runtime_version: Option<String>,
    /// Replacement target operating system.
    pub target_os: Option<String>,
    /// Replacement target architecture.
    pub target_arch: Option<String>,
}

impl Platform {
    /// Creates a platform from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if any value is empty or only whitespace.
    pub fn new(
        runtime_version: impl Into<String>,
        target_os: impl Into<String>,
        target_arch: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            runtime_version: non_empty("runtime version", runtime_version.into())?,
            target_os: non_empty("target os", target_os.into())?,
            target_arch: non_empty("target arch", target_arch.into())?,
        })
    }

    /// Detects the platform of the running binary.
    ///
    /// OS and architecture come from the compilation target, the runtime
    /// version from the compiler that built it.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            runtime_version: runtime_version().to_string(),
            target_os: std::env::consts::OS.to_string(),
            target_arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Applies overrides on top of this platform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if an override is empty or only whitespace.
    pub fn with_overrides(self, overrides: &Overrides) -> Result<Self> {
        let pick = |what: &str, current: String, replacement: Option<&String>| {
            replacement.map_or(Ok(current), |value| {
                tracing::debug!(field = what, value = %value, "applying platform override");
                non_empty(what, value.clone())
            })
        };

        Ok(Self {
            runtime_version: pick(
                "runtime version",
                self.runtime_version,
                overrides.runtime_version.as_ref(),
            )?,
            target_os: pick("target os", self.target_os, overrides.target_os.as_ref())?,
            target_arch: pick(
                "target arch",
                self.target_arch,
                overrides.target_arch.as_ref(),
            )?,
        })
    }

    /// Runtime version, e.g. `rust1.88.0`.
    #[must_use]
    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    /// Target operating system, e.g. `linux`.
    #[must_use]
    pub fn target_os(&self) -> &str {
        &self.target_os
    }

    /// Target architecture, e.g. `x86_64`.
    #[must_use]
    pub fn target_arch(&self) -> &str {
        &self.target_arch
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.runtime_version, self.target_os, self.target_arch
        )
    }
}

impl Overrides {
    /// Returns true if no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.runtime_version.is_none() && self.target_os.is_none() && self.target_arch.is_none()
    }
}

fn non_empty(what: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::config(format!("{what} must not be empty")));
    }
    Ok(value)
}
