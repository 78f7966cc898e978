//! Automated player engine
//!
//! Tracks the interval of values still consistent with observed outcomes and
//! delegates guess selection to a [`Strategy`].

use super::strategy::Strategy;
use crate::core::{MAX_TARGET, MIN_TARGET, Outcome};

/// An automated player for one round
///
/// Starts with the full [1,100] interval and narrows it after each observed
/// outcome. The interval invariant: the target is always inside `[low, high]`
/// as long as the observed outcomes are consistent.
pub struct AutoPlayer<S: Strategy> {
    strategy: S,
    low: u32,
    high: u32,
}

impl<S: Strategy> AutoPlayer<S> {
    /// Create a player covering the full target range
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            low: MIN_TARGET,
            high: MAX_TARGET,
        }
    }

    /// Pick the next guess, or `None` if the interval is empty
    ///
    /// An empty interval means the observed outcomes were contradictory.
    #[must_use]
    pub fn next_guess(&self) -> Option<u32> {
        (self.low <= self.high).then(|| self.strategy.next_guess(self.low, self.high))
    }

    /// Narrow the interval from an observed outcome
    pub fn observe(&mut self, guess: u32, outcome: Outcome) {
        match outcome {
            Outcome::TooLow => self.low = self.low.max(guess + 1),
            Outcome::TooHigh => self.high = self.high.min(guess.saturating_sub(1)),
            Outcome::Correct => {
                self.low = guess;
                self.high = guess;
            }
        }
    }

    /// Number of values still consistent with the observed outcomes
    #[must_use]
    pub const fn candidates_remaining(&self) -> u32 {
        if self.low > self.high {
            0
        } else {
            self.high - self.low + 1
        }
    }

    /// Current feasible interval as `(low, high)`
    #[must_use]
    pub const fn bounds(&self) -> (u32, u32) {
        (self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BisectStrategy;

    #[test]
    fn starts_with_full_range() {
        let player = AutoPlayer::new(BisectStrategy);
        assert_eq!(player.bounds(), (1, 100));
        assert_eq!(player.candidates_remaining(), 100);
    }

    #[test]
    fn too_low_raises_the_floor() {
        let mut player = AutoPlayer::new(BisectStrategy);
        player.observe(50, Outcome::TooLow);
        assert_eq!(player.bounds(), (51, 100));
        assert_eq!(player.candidates_remaining(), 50);
    }

    #[test]
    fn too_high_lowers_the_ceiling() {
        let mut player = AutoPlayer::new(BisectStrategy);
        player.observe(50, Outcome::TooHigh);
        assert_eq!(player.bounds(), (1, 49));
        assert_eq!(player.candidates_remaining(), 49);
    }

    #[test]
    fn correct_collapses_the_interval() {
        let mut player = AutoPlayer::new(BisectStrategy);
        player.observe(42, Outcome::Correct);
        assert_eq!(player.bounds(), (42, 42));
        assert_eq!(player.candidates_remaining(), 1);
    }

    #[test]
    fn contradictory_outcomes_empty_the_interval() {
        let mut player = AutoPlayer::new(BisectStrategy);
        player.observe(50, Outcome::TooLow);
        player.observe(40, Outcome::TooHigh);
        assert_eq!(player.candidates_remaining(), 0);
        assert!(player.next_guess().is_none());
    }

    #[test]
    fn next_guess_stays_inside_bounds() {
        let mut player = AutoPlayer::new(BisectStrategy);
        player.observe(50, Outcome::TooLow);
        player.observe(80, Outcome::TooHigh);

        let guess = player.next_guess().unwrap();
        assert!((51..=79).contains(&guess));
    }
}
