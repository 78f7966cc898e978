//! Guess outcomes and history records

use std::fmt;

/// Classification of an accepted guess against the secret target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess is below the target
    TooLow,
    /// Guess is above the target
    TooHigh,
    /// Guess equals the target
    Correct,
}

impl Outcome {
    /// Classify a guess against the target
    ///
    /// # Examples
    /// ```
    /// use hilo::core::Outcome;
    ///
    /// assert_eq!(Outcome::classify(30, 50), Outcome::TooLow);
    /// assert_eq!(Outcome::classify(70, 50), Outcome::TooHigh);
    /// assert_eq!(Outcome::classify(50, 50), Outcome::Correct);
    /// ```
    #[must_use]
    pub fn classify(guess: u32, target: u32) -> Self {
        match guess.cmp(&target) {
            std::cmp::Ordering::Less => Self::TooLow,
            std::cmp::Ordering::Greater => Self::TooHigh,
            std::cmp::Ordering::Equal => Self::Correct,
        }
    }

    /// Whether this outcome ends the round
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => write!(f, "too low"),
            Self::TooHigh => write!(f, "too high"),
            Self::Correct => write!(f, "correct"),
        }
    }
}

/// A logged guess with its classification and 1-based sequence number
///
/// Created once per accepted guess, never mutated or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub value: u32,
    pub outcome: Outcome,
    pub attempt: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_below_target() {
        assert_eq!(Outcome::classify(1, 100), Outcome::TooLow);
        assert_eq!(Outcome::classify(49, 50), Outcome::TooLow);
    }

    #[test]
    fn classify_above_target() {
        assert_eq!(Outcome::classify(100, 1), Outcome::TooHigh);
        assert_eq!(Outcome::classify(51, 50), Outcome::TooHigh);
    }

    #[test]
    fn classify_equal_is_correct() {
        assert_eq!(Outcome::classify(1, 1), Outcome::Correct);
        assert_eq!(Outcome::classify(100, 100), Outcome::Correct);
        assert!(Outcome::classify(42, 42).is_correct());
    }

    #[test]
    fn only_correct_ends_the_round() {
        assert!(!Outcome::TooLow.is_correct());
        assert!(!Outcome::TooHigh.is_correct());
        assert!(Outcome::Correct.is_correct());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::TooLow.to_string(), "too low");
        assert_eq!(Outcome::TooHigh.to_string(), "too high");
        assert_eq!(Outcome::Correct.to_string(), "correct");
    }
}
