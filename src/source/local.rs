//! Local pattern source
//!
//! Draws uniformly from a bounded alphabet with the process RNG. Values are
//! rendered as decimal digit strings or as lowercase letters depending on the
//! symbol mode.

use super::{PatternSource, SourceError, check_parameters};
use rand::Rng;

/// How drawn values are rendered into symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolMode {
    /// Render values as decimal strings: 0 → "0", 12 → "12"
    Digit,
    /// Render values as lowercase letters: 0 → "a", 25 → "z"
    Letter,
}

impl SymbolMode {
    /// Largest value this mode can render
    const fn max_value(self) -> u32 {
        match self {
            Self::Digit => u32::MAX,
            Self::Letter => 25,
        }
    }

    fn render(self, value: u32) -> String {
        match self {
            Self::Digit => value.to_string(),
            Self::Letter => char::from(b'a' + value as u8).to_string(),
        }
    }
}

/// Pattern source drawing uniformly from the local RNG
#[derive(Debug, Clone, Copy)]
pub struct LocalSource {
    mode: SymbolMode,
}

impl LocalSource {
    #[must_use]
    pub const fn new(mode: SymbolMode) -> Self {
        Self { mode }
    }
}

impl Default for LocalSource {
    fn default() -> Self {
        Self::new(SymbolMode::Digit)
    }
}

impl PatternSource for LocalSource {
    fn generate(&self, count: usize, min: u32, max: u32) -> Result<Vec<String>, SourceError> {
        check_parameters(count, min, max)?;
        if max > self.mode.max_value() {
            return Err(SourceError::InvalidParameters { count, min, max });
        }

        let mut rng = rand::rng();
        Ok((0..count)
            .map(|_| self.mode.render(rng.random_range(min..=max)))
            .collect())
    }
}
