//! The game engine
//!
//! Owns one game at a time: the hidden pattern, the attempt counter and the
//! lifecycle status. Guess evaluation itself lives in [`crate::core`]; the
//! engine wraps it with the attempt budget and the win/loss transitions.

use super::{GameConfig, GameError};
use crate::core::{GuessOutcome, GuessResult, Pattern};
use crate::source::PatternSource;
use std::fmt;

/// Lifecycle status of a game
///
/// Monotonic within one game: `NotStarted` → `InProgress` → `Won` | `Lost`.
/// The terminal states only leave via an explicit new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the game has finished (won or lost)
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// The game engine
///
/// Generic over the pattern source so any contract implementation can be
/// injected at construction, including a deterministic one for tests.
pub struct Game<S: PatternSource> {
    config: GameConfig,
    source: S,
    status: Status,
    pattern: Pattern,
    attempts: usize,
}

impl<S: PatternSource> Game<S> {
    /// Create an engine with the given configuration and pattern source
    ///
    /// No game is running yet; call [`Game::new_game`] to start one.
    pub const fn new(config: GameConfig, source: S) -> Self {
        Self {
            config,
            source,
            status: Status::NotStarted,
            pattern: Pattern::new(Vec::new()),
            attempts: 0,
        }
    }

    /// Start a new game
    ///
    /// Draws a fresh pattern from the source, resets the attempt counter and
    /// moves to `InProgress`. Restarting from a won or lost game is allowed.
    ///
    /// # Errors
    /// - [`GameError::AlreadyRunning`] if a game is still in progress
    /// - [`GameError::Source`] if the pattern source fails; the previous
    ///   state is left untouched
    pub fn new_game(&mut self) -> Result<(), GameError> {
        if self.status == Status::InProgress {
            return Err(GameError::AlreadyRunning);
        }

        let symbols = self.source.generate(
            self.config.pattern_length,
            self.config.symbol_min,
            self.config.symbol_max,
        )?;

        self.pattern = Pattern::new(symbols);
        self.attempts = 0;
        self.status = Status::InProgress;
        Ok(())
    }

    /// Submit a guess for the current game
    ///
    /// Consumes one attempt, evaluates the guess and applies the win/loss
    /// transition. A losing final guess still reports its real partial match
    /// quality; hints are never suppressed just because the budget ran out.
    ///
    /// # Errors
    /// - [`GameError::NotActive`] if no game is in progress; nothing changes
    /// - [`GameError::GuessLength`] if the guess length differs from the
    ///   pattern length; the attempt is NOT consumed
    pub fn submit_guess(&mut self, guess: &[String]) -> Result<GuessResult, GameError> {
        if self.status != Status::InProgress {
            return Err(GameError::NotActive(self.status));
        }

        if guess.len() != self.pattern.len() {
            return Err(GameError::GuessLength {
                expected: self.pattern.len(),
                actual: guess.len(),
            });
        }

        self.attempts += 1;

        let result = self.pattern.evaluate(guess);
        if result.outcome() == GuessOutcome::FullMatch {
            self.status = Status::Won;
        } else if self.attempts >= self.config.max_guesses {
            self.status = Status::Lost;
        }

        Ok(result)
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Number of guesses submitted in the current game
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Guesses left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.attempts)
    }

    /// The hidden pattern (debug reveal)
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}
