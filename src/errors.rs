//! Error types for the visualiser
//!
//! This module defines [`SortvizError`], covering everything that can stop the
//! program outright. Unknown key presses are deliberately *not* errors: the
//! key map returns `None` for them and the app logs and ignores the press.

use std::fmt;
use std::io;

/// Fatal errors surfaced to `main`
#[derive(Debug)]
pub enum SortvizError {
    /// Unrecognised command-line flag
    UnknownArgument { arg: String },

    /// A flag that needs a value was given none
    MissingValue { flag: String },

    /// A flag value that could not be parsed
    InvalidValue { flag: String, value: String },

    /// The in-memory frame history ran past its memory limit (bytes)
    FrameLimitExceeded { current: usize, limit: usize },

    /// Terminal or log file I/O failure
    Io(io::Error),
}

impl SortvizError {
    /// Whether the error came from the command line (usage should be printed)
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SortvizError::UnknownArgument { .. }
                | SortvizError::MissingValue { .. }
                | SortvizError::InvalidValue { .. }
        )
    }
}

impl fmt::Display for SortvizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortvizError::UnknownArgument { arg } => write!(f, "Unknown argument '{}'", arg),
            SortvizError::MissingValue { flag } => write!(f, "Missing value for '{}'", flag),
            SortvizError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{}' for '{}'", value, flag)
            }
            SortvizError::FrameLimitExceeded { current, limit } => write!(
                f,
                "Frame history limit exceeded: {} bytes recorded, limit is {} bytes",
                current, limit
            ),
            SortvizError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SortvizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortvizError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SortvizError {
    fn from(e: io::Error) -> Self {
        SortvizError::Io(e)
    }
}
