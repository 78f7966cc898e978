//! Hilo
//!
//! A guess-the-number game: the program picks a secret integer in [1,100] and
//! classifies each guess as too low, too high, or correct, with an append-only
//! history per round. Playable through a ratatui TUI or a plain CLI loop, with
//! automated bisection players for solving and benchmarking.
//!
//! # Quick Start
//!
//! ```rust
//! use hilo::core::Outcome;
//! use hilo::session::GameSession;
//!
//! let mut session = GameSession::with_target(50);
//!
//! let record = session.submit_guess("30").unwrap().unwrap();
//! assert_eq!(record.outcome, Outcome::TooLow);
//!
//! let record = session.submit_guess("50").unwrap().unwrap();
//! assert!(record.outcome.is_correct());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Automated guessing strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
