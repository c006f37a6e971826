//! Game engine: lifecycle state machine, attempt budget, guess submission

mod config;
mod error;
mod game;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, Status};
