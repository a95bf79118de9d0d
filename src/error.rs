//! Crate-level error type.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum VetError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Talking to the control terminal failed.
    Terminal(io::Error),
}

impl fmt::Display for VetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VetError::Io(e) => write!(f, "I/O error: {e}"),
            VetError::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for VetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VetError::Io(e) | VetError::Terminal(e) => Some(e),
        }
    }
}

impl From<io::Error> for VetError {
    fn from(e: io::Error) -> Self {
        VetError::Io(e)
    }
}
