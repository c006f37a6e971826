//! Deterministic pattern source
//!
//! Returns a preset sequence regardless of what is requested. Used by the
//! engine tests and handy for scripted demos.

use super::{PatternSource, SourceError, check_parameters};

/// Pattern source that always returns the same preset sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSource {
    symbols: Vec<String>,
}

impl FixedSource {
    #[must_use]
    pub const fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Convenience constructor from string literals
    #[must_use]
    pub fn from_strs(parts: &[&str]) -> Self {
        Self::new(parts.iter().map(|&s| s.to_string()).collect())
    }
}

impl PatternSource for FixedSource {
    /// Returns the preset sequence; `count` and the range are only validated,
    /// not applied, mirroring how a scripted game fixture is used.
    fn generate(&self, count: usize, min: u32, max: u32) -> Result<Vec<String>, SourceError> {
        check_parameters(count, min, max)?;
        Ok(self.symbols.clone())
    }
}
