//! Game session state machine
//!
//! A session owns the secret target, the append-only guess history, and the
//! round status. All mutation happens through [`GameSession::submit_guess`]
//! and [`GameSession::play_again`].

use crate::core::{GuessError, GuessRecord, MAX_TARGET, MIN_TARGET, Outcome, parse_guess};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Whether the current round is still active or has been won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
}

/// A single round of guess-the-number
///
/// The target is immutable for the duration of a round and regenerated on
/// [`GameSession::play_again`]. History grows monotonically within a round:
/// records are appended in attempt order and never mutated.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: u32,
    history: Vec<GuessRecord>,
    guessed: FxHashSet<u32>,
    status: Status,
}

impl GameSession {
    /// Start a round with a uniformly random target in [1,100]
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(random_target())
    }

    /// Start a round with a fixed target
    ///
    /// Used by tests and by the automated players, which replay known targets.
    ///
    /// # Panics
    /// Panics if `target` is outside [1,100].
    #[must_use]
    pub fn with_target(target: u32) -> Self {
        assert!(
            (MIN_TARGET..=MAX_TARGET).contains(&target),
            "target {target} outside [{MIN_TARGET},{MAX_TARGET}]"
        );

        Self {
            target,
            history: Vec::new(),
            guessed: FxHashSet::default(),
            status: Status::Playing,
        }
    }

    /// Submit a raw guess string
    ///
    /// Returns `None` when the round is already won: the submission is ignored
    /// and nothing is mutated. Otherwise validates in order (format, range,
    /// duplicate); a rejection leaves history and status untouched. An accepted
    /// guess is classified, appended to history with `attempt = N + 1`, and a
    /// correct guess transitions the round to [`Status::Won`].
    ///
    /// # Examples
    /// ```
    /// use hilo::core::Outcome;
    /// use hilo::session::{GameSession, Status};
    ///
    /// let mut session = GameSession::with_target(50);
    ///
    /// let record = session.submit_guess("30").unwrap().unwrap();
    /// assert_eq!(record.outcome, Outcome::TooLow);
    /// assert_eq!(record.attempt, 1);
    ///
    /// session.submit_guess("50").unwrap().unwrap();
    /// assert_eq!(session.status(), Status::Won);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Option<Result<GuessRecord, GuessError>> {
        if self.status == Status::Won {
            return None;
        }
        Some(self.evaluate(raw))
    }

    fn evaluate(&mut self, raw: &str) -> Result<GuessRecord, GuessError> {
        let value = parse_guess(raw)?;

        if self.guessed.contains(&value) {
            return Err(GuessError::DuplicateGuess(value));
        }

        let record = GuessRecord {
            value,
            outcome: Outcome::classify(value, self.target),
            attempt: self.history.len() + 1,
        };

        self.guessed.insert(value);
        self.history.push(record);

        if record.outcome.is_correct() {
            self.status = Status::Won;
        }

        Ok(record)
    }

    /// Start a fresh round: new random target, empty history, status `Playing`
    pub fn play_again(&mut self) {
        self.target = random_target();
        self.history.clear();
        self.guessed.clear();
        self.status = Status::Playing;
    }

    /// Current round status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the round has been won
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// Accepted guesses in attempt order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of accepted guesses this round
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// The most recent accepted guess, if any
    #[inline]
    #[must_use]
    pub fn last_record(&self) -> Option<&GuessRecord> {
        self.history.last()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a target uniformly from [1,100]
fn random_target() -> u32 {
    rand::rng().random_range(MIN_TARGET..=MAX_TARGET)
}
