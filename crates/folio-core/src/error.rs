//! Core error types.

use std::fmt;

/// Failure to manage a signal connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// No slot with that id is connected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => f.write_str("no slot is connected under this id"),
        }
    }
}

impl std::error::Error for SignalError {}
