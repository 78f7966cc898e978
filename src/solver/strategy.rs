//! Guess selection strategies for automated players
//!
//! Defines the Strategy trait and concrete implementations.

/// A strategy for picking the next guess from the feasible interval
///
/// The interval `[low, high]` is the set of values still consistent with every
/// outcome observed so far. Implementations must return a value inside it.
pub trait Strategy {
    /// Pick the next guess from `low..=high`
    fn next_guess(&self, low: u32, high: u32) -> u32;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn next_guess(&self, low: u32, high: u32) -> u32 {
        (**self).next_guess(low, high)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Midpoint bisection (default, optimal worst case)
    Bisect(BisectStrategy),
    /// Uniform random pick from the interval
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&self, low: u32, high: u32) -> u32 {
        match self {
            Self::Bisect(s) => s.next_guess(low, high),
            Self::Random(s) => s.next_guess(low, high),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisect", "random". Defaults to bisect if the name is
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Bisect(BisectStrategy),
        }
    }
}

/// Midpoint bisection strategy
///
/// Halves the feasible interval on every guess, so any target in [1,100] is
/// found within 7 guesses.
pub struct BisectStrategy;

impl Strategy for BisectStrategy {
    fn next_guess(&self, low: u32, high: u32) -> u32 {
        low + (high - low) / 2
    }
}

/// Random strategy
///
/// Picks uniformly from the feasible interval. Never repeats a guess, since
/// observed outcomes always shrink the interval past previous picks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_guess(&self, low: u32, high: u32) -> u32 {
        use rand::Rng;

        rand::rng().random_range(low..=high)
    }
}
