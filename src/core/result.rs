//! Guess evaluation results
//!
//! A `GuessResult` is the structured feedback for one submitted guess:
//! an overall outcome plus the exact-position indices and the misplaced
//! symbol values that were matched.

use rustc_hash::FxHashSet;
use std::fmt;

/// Overall classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    /// Nothing in the guess appears in the pattern
    NoMatch,
    /// At least one symbol appears in the pattern, but none at its position
    ContentMatch,
    /// At least one symbol sits at its exact position
    PositionMatch,
    /// The guess reproduces the pattern exactly
    FullMatch,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoMatch => "no match",
            Self::ContentMatch => "content match",
            Self::PositionMatch => "position match",
            Self::FullMatch => "full match",
        };
        write!(f, "{name}")
    }
}

/// Feedback for one submitted guess
///
/// Built in one step by the evaluation and immutable afterwards.
/// A full match carries empty position/symbol sets: once the game is won
/// there is nothing left to hint at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    outcome: GuessOutcome,
    positions: FxHashSet<usize>,
    symbols: FxHashSet<String>,
}

impl GuessResult {
    pub(crate) fn new(
        outcome: GuessOutcome,
        positions: FxHashSet<usize>,
        symbols: FxHashSet<String>,
    ) -> Self {
        Self {
            outcome,
            positions,
            symbols,
        }
    }

    /// Result for a guess that reproduced the pattern exactly
    pub(crate) fn full_match() -> Self {
        Self {
            outcome: GuessOutcome::FullMatch,
            positions: FxHashSet::default(),
            symbols: FxHashSet::default(),
        }
    }

    /// Overall classification of the guess
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> GuessOutcome {
        self.outcome
    }

    /// Indices where the guess matched the pattern exactly
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &FxHashSet<usize> {
        &self.positions
    }

    /// Distinct symbol values present in the pattern but guessed at a wrong
    /// position, limited by remaining unclaimed occurrences
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &FxHashSet<String> {
        &self.symbols
    }

    /// Check whether a guess index was an exact-position match
    #[inline]
    #[must_use]
    pub fn position_matched(&self, index: usize) -> bool {
        self.positions.contains(&index)
    }

    /// Check whether a symbol value was matched at a wrong position
    #[inline]
    #[must_use]
    pub fn symbol_matched(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }
}
