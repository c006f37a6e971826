//! Hint formatting for terminal output
//!
//! Classification is separated from coloring so it can be tested without
//! touching terminal state.

use crate::core::GuessResult;
use colored::Colorize;

/// Three-way classification of one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Right symbol at the right position (green)
    Exact,
    /// Symbol occurs in the pattern at another position (yellow)
    Misplaced,
    /// Symbol has no unclaimed occurrence in the pattern (red)
    Absent,
}

/// Classify every position of a guess from its evaluation result
#[must_use]
pub fn classify_hints(guess: &[String], result: &GuessResult) -> Vec<Hint> {
    guess
        .iter()
        .enumerate()
        .map(|(i, symbol)| {
            if result.position_matched(i) {
                Hint::Exact
            } else if result.symbol_matched(symbol) {
                Hint::Misplaced
            } else {
                Hint::Absent
            }
        })
        .collect()
}

/// Render a colorized hint line for a guess
///
/// Green for exact position, yellow for present-but-misplaced, red for absent.
#[must_use]
pub fn format_hints(guess: &[String], result: &GuessResult) -> String {
    let mut line = String::from("Hint: ");

    for (symbol, hint) in guess.iter().zip(classify_hints(guess, result)) {
        let colored_symbol = match hint {
            Hint::Exact => symbol.as_str().green(),
            Hint::Misplaced => symbol.as_str().yellow(),
            Hint::Absent => symbol.as_str().red(),
        };
        line.push_str(&format!("{colored_symbol} "));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn seq(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn classify_mixed_guess() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let guess = seq(&["6", "7", "5", "5"]);
        let result = pattern.evaluate(&guess);

        assert_eq!(
            classify_hints(&guess, &result),
            vec![Hint::Exact, Hint::Absent, Hint::Misplaced, Hint::Exact]
        );
    }

    #[test]
    fn over_guessed_duplicate_shows_absent() {
        // Both pattern 5s are claimed by exact matches; the extra 5 is red.
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let guess = seq(&["6", "5", "5", "5"]);
        let result = pattern.evaluate(&guess);

        assert_eq!(
            classify_hints(&guess, &result),
            vec![Hint::Exact, Hint::Exact, Hint::Absent, Hint::Exact]
        );
    }

    #[test]
    fn all_wrong_guess_is_all_absent() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let guess = seq(&["1", "2", "3", "4"]);
        let result = pattern.evaluate(&guess);

        assert_eq!(classify_hints(&guess, &result), vec![Hint::Absent; 4]);
    }

    #[test]
    fn hint_line_contains_every_symbol() {
        let pattern = Pattern::new(seq(&["6", "5", "0", "5"]));
        let guess = seq(&["1", "2", "3", "0"]);
        let result = pattern.evaluate(&guess);

        let line = format_hints(&guess, &result);
        assert!(line.starts_with("Hint: "));
        for symbol in &guess {
            assert!(line.contains(symbol.as_str()));
        }
    }
}
