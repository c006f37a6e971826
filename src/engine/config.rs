//! Game configuration

/// Configuration for a game
///
/// Passed explicitly to the engine constructor; there is no ambient default
/// state beyond `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum number of guesses before the game is lost
    pub max_guesses: usize,
    /// Number of symbols in the hidden pattern
    pub pattern_length: usize,
    /// Smallest value the pattern source may draw
    pub symbol_min: u32,
    /// Largest value the pattern source may draw
    pub symbol_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: 10,
            pattern_length: 4,
            symbol_min: 0,
            symbol_max: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 10);
        assert_eq!(config.pattern_length, 4);
        assert_eq!(config.symbol_min, 0);
        assert_eq!(config.symbol_max, 7);
    }
}
