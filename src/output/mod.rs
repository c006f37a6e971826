//! Terminal output formatting

pub mod formatters;

pub use formatters::{Hint, classify_hints, format_hints};
