//! Error types for touchtext.
//!
//! Gesture-classification ambiguities are handled by policy, not errors:
//! zero-delta moves are no-ops, past-sibling handle drags are clamped, and
//! exhausted momentum terminates silently. The error type covers only API
//! misuse and rejected configuration.

use std::fmt;

/// Result type alias for touchtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for touchtext operations.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A configuration field was rejected at attach time.
    InvalidConfig { field: &'static str, value: f32 },
    /// An event was dispatched before `attach()`.
    NotAttached,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid config: {field} = {value}")
            }
            Self::NotAttached => write!(f, "controller is not attached"),
        }
    }
}

impl std::error::Error for Error {}
