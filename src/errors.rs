//! Error handling for the genweave template engine.
//!
//! This module defines the main error type [`Error`] used throughout the
//! library, along with a convenient [`Result`] type alias. It uses
//! `thiserror` for error derivation.
//!
//! # Examples
//!
//! ```
//! use genweave::errors::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for genweave operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for genweave operations
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied malformed prefix/suffix configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input does not conform to its declared naming convention
    #[error("Validation error: {0}")]
    Validation(String),

    /// Package name has an unsupported shape
    #[error("Invalid package name: {0}")]
    InvalidName(String),

    /// Path has an unsupported shape
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A template placeholder has no entry in the identifier context
    #[error("No replacement registered for placeholder `{token}`")]
    MissingReplacement { token: String },
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new invalid-name error
    pub fn invalid_name<S: Into<String>>(msg: S) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Create a new invalid-path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create a new missing-replacement error for a placeholder token
    pub fn missing_replacement<S: Into<String>>(token: S) -> Self {
        Self::MissingReplacement {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_configuration_creation() {
        let error = Error::configuration("suffix must start with `-`");
        assert!(matches!(error, Error::Configuration(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: suffix must start with `-`"
        );
    }

    #[test]
    fn test_error_validation_creation() {
        let error = Error::validation("package name does not end with `-db`");
        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(
            error.to_string(),
            "Validation error: package name does not end with `-db`"
        );
    }

    #[test]
    fn test_error_missing_replacement_creation() {
        let error = Error::missing_replacement("__missingVar__");
        assert!(matches!(error, Error::MissingReplacement { .. }));
        assert_eq!(
            error.to_string(),
            "No replacement registered for placeholder `__missingVar__`"
        );
    }

    #[test]
    fn test_error_invalid_name_display() {
        let error = Error::invalid_name("a/b/c-db");
        assert!(error.to_string().contains("Invalid package name"));
    }

    #[test]
    fn test_error_debug_display() {
        let error = Error::invalid_path("too many segments");
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidPath"));
        assert!(debug_str.contains("too many segments"));
    }
}
