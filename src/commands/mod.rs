//! Command implementations

pub mod play;

pub use play::{PlayOptions, run_game, run_session};
