//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod guess;
mod outcome;

pub use guess::{GuessError, MAX_TARGET, MIN_TARGET, parse_guess};
pub use outcome::{GuessRecord, Outcome};
