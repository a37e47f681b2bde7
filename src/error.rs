//! Error types for brave-hello.
//!
//! The greeting itself cannot fail; errors come from user-supplied
//! configuration, output formatting and the final write to stdout.

use thiserror::Error;

/// Result type alias for brave-hello operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors (writing the greeting).
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Unknown greeting variant name.
    #[error("unknown greeting variant: {0} (expected classic or browser)")]
    UnknownVariant(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl Error {
    /// Builds a configuration error from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(CommandError::OutputFormat(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = Error::config("target arch must not be empty");
        assert_eq!(
            err.to_string(),
            "configuration error: target arch must not be empty"
        );
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::UnknownVariant("fancy".to_string());
        assert_eq!(
            err.to_string(),
            "unknown greeting variant: fancy (expected classic or browser)"
        );

        let err = CommandError::OutputFormat("bad json".to_string());
        assert!(err.to_string().contains("output format"));
    }

    #[test]
    fn test_error_from_command() {
        let err: Error = CommandError::UnknownVariant("x".to_string()).into();
        assert!(matches!(err, Error::Command(_)));
        assert!(err.to_string().starts_with("command error: "));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(
            err,
            Error::Command(CommandError::OutputFormat(_))
        ));
    }
}
