//! Core domain types for Nordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod result;

pub use pattern::Pattern;
pub use result::{GuessOutcome, GuessResult};
