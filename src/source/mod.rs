//! Pattern sources
//!
//! A pattern source produces the hidden sequence for a new game. The engine
//! accepts any implementation of the contract: production sources draw from
//! the local RNG or from random.org, tests inject a fixed sequence.

mod fixed;
mod local;
mod random_org;

pub use fixed::FixedSource;
pub use local::{LocalSource, SymbolMode};
pub use random_org::RandomOrgSource;

use std::fmt;

/// A source of hidden patterns
pub trait PatternSource {
    /// Produce `count` symbols drawn from the inclusive range `min..=max`
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidParameters`] when `count == 0` or
    /// `min >= max`; other variants surface transport or response problems.
    fn generate(&self, count: usize, min: u32, max: u32) -> Result<Vec<String>, SourceError>;
}

/// Error type for pattern generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Nonsensical generation request
    InvalidParameters { count: usize, min: u32, max: u32 },
    /// Transport failure while reaching an external randomness service
    Http(String),
    /// The external service answered with something unusable
    Malformed(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { count, min, max } => {
                write!(
                    f,
                    "Invalid generation request: count={count}, min={min}, max={max}"
                )
            }
            Self::Http(msg) => write!(f, "HTTP request failed: {msg}"),
            Self::Malformed(msg) => write!(f, "Unusable response: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Validate the generation contract shared by all sources
pub(crate) const fn check_parameters(count: usize, min: u32, max: u32) -> Result<(), SourceError> {
    if count == 0 || min >= max {
        return Err(SourceError::InvalidParameters { count, min, max });
    }
    Ok(())
}

/// Enum wrapper for all source types
///
/// Allows runtime selection of the source while maintaining static dispatch.
pub enum SourceKind {
    /// Local uniform draws
    Local(LocalSource),
    /// random.org integers API
    RandomOrg(RandomOrgSource),
}

impl PatternSource for SourceKind {
    fn generate(&self, count: usize, min: u32, max: u32) -> Result<Vec<String>, SourceError> {
        match self {
            Self::Local(s) => s.generate(count, min, max),
            Self::RandomOrg(s) => s.generate(count, min, max),
        }
    }
}

impl SourceKind {
    /// Create a source from a name string
    ///
    /// Supported names: "local", "random-org", "random.org".
    /// Defaults to the local source if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, mode: SymbolMode) -> Self {
        match name {
            "random-org" | "random.org" => Self::RandomOrg(RandomOrgSource::new()),
            _ => Self::Local(LocalSource::new(mode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_rejects_zero_count() {
        assert_eq!(
            check_parameters(0, 0, 7),
            Err(SourceError::InvalidParameters {
                count: 0,
                min: 0,
                max: 7
            })
        );
    }

    #[test]
    fn contract_rejects_inverted_range() {
        assert!(check_parameters(4, 7, 7).is_err());
        assert!(check_parameters(4, 8, 7).is_err());
        assert!(check_parameters(4, 0, 7).is_ok());
    }

    #[test]
    fn from_name_selects_source() {
        assert!(matches!(
            SourceKind::from_name("random-org", SymbolMode::Digit),
            SourceKind::RandomOrg(_)
        ));
        assert!(matches!(
            SourceKind::from_name("local", SymbolMode::Digit),
            SourceKind::Local(_)
        ));
        assert!(matches!(
            SourceKind::from_name("anything-else", SymbolMode::Letter),
            SourceKind::Local(_)
        ));
    }
}
