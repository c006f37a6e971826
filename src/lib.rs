//! Nordle
//!
//! A terminal code-breaking game: a hidden pattern of digits (or letters) is
//! generated and the player must reproduce it within a fixed guess budget,
//! with duplicate-aware hints after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use nordle::engine::{Game, GameConfig, Status};
//! use nordle::source::FixedSource;
//!
//! let source = FixedSource::from_strs(&["6", "5", "0", "5"]);
//! let mut game = Game::new(GameConfig::default(), source);
//! game.new_game().unwrap();
//!
//! let guess: Vec<String> = vec!["6".into(), "5".into(), "0".into(), "5".into()];
//! let result = game.submit_guess(&guess).unwrap();
//! assert_eq!(game.status(), Status::Won);
//! # let _ = result;
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Pattern sources
pub mod source;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
