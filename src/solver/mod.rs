//! Automated guessing strategies
//!
//! This module contains the strategies used by the `solve`, `benchmark`, and
//! `test-all` commands to play rounds without a human.

mod engine;
pub mod strategy;

pub use engine::AutoPlayer;
pub use strategy::{BisectStrategy, RandomStrategy, Strategy, StrategyType};
