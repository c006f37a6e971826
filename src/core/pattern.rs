//! Hidden pattern representation and guess evaluation
//!
//! Evaluation uses a two-pass scheme so duplicate symbols are never
//! over-counted: exact-position matches claim occurrences first, then
//! misplaced symbols may claim whatever occurrences remain.

use super::{GuessOutcome, GuessResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// The hidden sequence of symbols the player must reproduce
///
/// Fixed length, set once per game, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    symbols: Vec<String>,
}

impl Pattern {
    /// Create a pattern from a sequence of symbols
    #[must_use]
    pub const fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    /// Number of symbols in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the pattern holds no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in pattern order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Occurrence count per symbol value
    ///
    /// Used as the remaining-available pool during evaluation.
    fn symbol_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for symbol in &self.symbols {
            *counts.entry(symbol.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Evaluate a guess against this pattern
    ///
    /// The guess must already be length-checked by the caller; the engine
    /// rejects mismatched lengths before evaluation.
    ///
    /// # Algorithm
    /// 1. Exact equality short-circuits to a full match with empty hint sets.
    /// 2. First pass: record exact-position matches and remove each from the
    ///    available pool. The pass completes before any content matching.
    /// 3. Second pass: a misplaced symbol counts only while its pool is
    ///    non-empty, so a symbol is never reported more times than it occurs.
    ///
    /// # Examples
    /// ```
    /// use nordle::core::{GuessOutcome, Pattern};
    ///
    /// let pattern = Pattern::new(vec!["6".into(), "5".into(), "0".into(), "5".into()]);
    /// let guess: Vec<String> = vec!["6".into(), "7".into(), "5".into(), "5".into()];
    ///
    /// let result = pattern.evaluate(&guess);
    /// assert_eq!(result.outcome(), GuessOutcome::PositionMatch);
    /// assert!(result.position_matched(0) && result.position_matched(3));
    /// assert!(result.symbol_matched("5"));
    /// ```
    #[must_use]
    pub fn evaluate(&self, guess: &[String]) -> GuessResult {
        debug_assert_eq!(
            guess.len(),
            self.symbols.len(),
            "guess length must match pattern length"
        );

        if guess == self.symbols.as_slice() {
            return GuessResult::full_match();
        }

        let mut available = self.symbol_counts();

        // First pass: exact position matches claim their occurrence
        let mut positions = FxHashSet::default();
        for (i, symbol) in guess.iter().enumerate() {
            if *symbol == self.symbols[i] {
                positions.insert(i);
                if let Some(count) = available.get_mut(symbol.as_str()) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced symbols draw from the remaining pool
        let mut symbols_matched = FxHashSet::default();
        for (i, symbol) in guess.iter().enumerate() {
            if *symbol != self.symbols[i]
                && let Some(count) = available.get_mut(symbol.as_str())
            {
                if *count > 0 {
                    symbols_matched.insert(symbol.clone());
                }
                *count = count.saturating_sub(1);
            }
        }

        let outcome = if positions.is_empty() {
            if symbols_matched.is_empty() {
                GuessOutcome::NoMatch
            } else {
                GuessOutcome::ContentMatch
            }
        } else {
            GuessOutcome::PositionMatch
        };

        GuessResult::new(outcome, positions, symbols_matched)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|&s| s.to_string()).collect()
    }

    fn positions_of(result: &GuessResult) -> Vec<usize> {
        let mut indices: Vec<usize> = result.positions().iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    fn symbols_of(result: &GuessResult) -> Vec<String> {
        let mut symbols: Vec<String> = result.symbols().iter().cloned().collect();
        symbols.sort();
        symbols
    }

    #[test]
    fn no_overlap_is_no_match() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["1", "2", "3", "4"]));

        assert_eq!(result.outcome(), GuessOutcome::NoMatch);
        assert!(result.positions().is_empty());
        assert!(result.symbols().is_empty());
    }

    #[test]
    fn misplaced_symbol_is_content_match() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["1", "2", "3", "0"]));

        assert_eq!(result.outcome(), GuessOutcome::ContentMatch);
        assert!(result.positions().is_empty());
        assert_eq!(symbols_of(&result), vec!["0"]);
    }

    #[test]
    fn duplicate_claimed_by_exact_matches_does_not_leak() {
        // Pattern 6 5 0 5 vs guess 6 5 5 5: both 5s are claimed by the
        // exact matches at indices 1 and 3, so the 5 at index 2 gets nothing.
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["6", "5", "5", "5"]));

        assert_eq!(result.outcome(), GuessOutcome::PositionMatch);
        assert_eq!(positions_of(&result), vec![0, 1, 3]);
        assert!(result.symbols().is_empty());
    }

    #[test]
    fn unclaimed_duplicate_counts_as_misplaced() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["6", "7", "5", "5"]));

        assert_eq!(result.outcome(), GuessOutcome::PositionMatch);
        assert_eq!(positions_of(&result), vec![0, 3]);
        assert_eq!(symbols_of(&result), vec!["5"]);
    }

    #[test]
    fn absent_symbol_between_exact_matches() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["6", "5", "7", "5"]));

        assert_eq!(result.outcome(), GuessOutcome::PositionMatch);
        assert_eq!(positions_of(&result), vec![0, 1, 3]);
        assert!(result.symbols().is_empty());
    }

    #[test]
    fn exact_guess_is_full_match_with_empty_sets() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let result = pattern.evaluate(&seq(&["6", "5", "0", "5"]));

        assert_eq!(result.outcome(), GuessOutcome::FullMatch);
        assert!(result.positions().is_empty());
        assert!(result.symbols().is_empty());
    }

    #[test]
    fn every_recorded_position_is_a_true_match() {
        let pattern = Pattern::new(seq(&["3", "3", "1", "7"]));
        let guess = seq(&["3", "1", "1", "3"]);
        let result = pattern.evaluate(&guess);

        assert!(result.positions().len() <= pattern.len());
        for &i in result.positions() {
            assert_eq!(guess[i], pattern.symbols()[i]);
        }
    }

    #[test]
    fn per_symbol_claims_never_exceed_occurrences() {
        let pattern = Pattern::new(seq(&["2", "2", "7", "1"]));
        // Three 2s guessed against a pattern holding two.
        let guess = seq(&["2", "2", "2", "9"]);
        let result = pattern.evaluate(&guess);

        // Both pattern 2s are claimed by the exact matches at 0 and 1.
        assert_eq!(positions_of(&result), vec![0, 1]);
        assert!(!result.symbol_matched("2"));
    }

    #[test]
    fn letter_symbols_evaluate_the_same_way() {
        let pattern = Pattern::new(seq(&["k", "a", "t", "a"]));
        let result = pattern.evaluate(&seq(&["a", "a", "k", "z"]));

        assert_eq!(result.outcome(), GuessOutcome::PositionMatch);
        assert_eq!(positions_of(&result), vec![1]);
        assert_eq!(symbols_of(&result), vec!["a", "k"]);
    }

    #[test]
    fn pattern_display_joins_with_spaces() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        assert_eq!(pattern.to_string(), "6 5 0 5");
    }
}
