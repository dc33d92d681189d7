//! Error types for okfail operations.
//!
//! Asserting the wrong variant is a typed, explicit error - no panics allowed.

use thiserror::Error;

use crate::outcome::Variant;

/// Default message when `ok()` is called on a `Fail`.
pub const UNWRAP_OK_MESSAGE: &str = "Attempted to unwrap Ok(t) but got Fail(f) instead.";

/// Default message when `fail()` is called on an `Ok`.
pub const UNWRAP_FAIL_MESSAGE: &str = "Attempted to unwrap Fail(f) but got Ok(t) instead.";

/// Core error type for okfail operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Assertion errors
    #[error("{message}")]
    InvariantViolation {
        expected: Variant,
        found: Variant,
        message: String,
    },

    // Configuration errors
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },
}

impl Error {
    /// Create an invariant violation with the default message for `expected`.
    #[must_use]
    pub fn invariant_violation(expected: Variant) -> Self {
        let message = match expected {
            Variant::Ok => UNWRAP_OK_MESSAGE,
            Variant::Fail => UNWRAP_FAIL_MESSAGE,
        };
        Self::invariant_violation_with_message(expected, message)
    }

    /// Create an invariant violation carrying a caller-supplied message.
    #[must_use]
    pub fn invariant_violation_with_message(expected: Variant, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            expected,
            found: expected.opposite(),
            message: message.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable error code for this error.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvariantViolation { .. } => "INVARIANT_VIOLATION",
            Self::TomlParseFailed { .. } => "TOML_PARSE_FAILED",
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::toml_parse_failed(err.to_string())
    }
}
