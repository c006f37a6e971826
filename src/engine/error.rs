//! Engine error types
//!
//! All errors here are recoverable: a rejected operation leaves the game
//! untouched and the caller may simply try again.

use super::Status;
use crate::source::SourceError;
use std::fmt;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess length differs from the pattern length; no attempt was consumed
    GuessLength { expected: usize, actual: usize },
    /// Guess submitted while no game is running
    NotActive(Status),
    /// New game requested while one is still running
    AlreadyRunning,
    /// The pattern source failed to produce a pattern
    Source(SourceError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessLength { expected, actual } => {
                write!(f, "Guess must have exactly {expected} symbols, got {actual}")
            }
            Self::NotActive(status) => write!(f, "No game in progress (status: {status})"),
            Self::AlreadyRunning => write!(f, "A game is already in progress"),
            Self::Source(err) => write!(f, "Pattern source failed: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for GameError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}
