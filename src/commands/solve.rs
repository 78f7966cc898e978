//! Target solving command
//!
//! Plays a round against a fixed target with an automated player and returns
//! the guess trace.

use crate::core::{MAX_TARGET, MIN_TARGET, Outcome};
use crate::session::GameSession;
use crate::solver::{AutoPlayer, Strategy};

/// Configuration for solving a target
pub struct SolveConfig {
    pub target: u32,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Default budget is 7 guesses: bisection always finishes within
    /// ceil(log2(100)) = 7.
    #[must_use]
    pub const fn new(target: u32) -> Self {
        Self {
            target,
            max_guesses: 7,
        }
    }
}

/// Result of solving a target
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: u32,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub value: u32,
    pub outcome: Outcome,
    pub candidates_before: u32,
    pub candidates_after: u32,
}

/// Solve a specific target using the given strategy
///
/// Guesses go through the session's normal text evaluator, so the trace is
/// exactly what a player typing the same numbers would see.
///
/// # Errors
///
/// Returns an error if the target is outside [1,100].
pub fn solve_target<S: Strategy>(config: &SolveConfig, strategy: &S) -> Result<SolveResult, String> {
    if !(MIN_TARGET..=MAX_TARGET).contains(&config.target) {
        return Err(format!(
            "Target must be between {MIN_TARGET} and {MAX_TARGET}, got {}",
            config.target
        ));
    }

    let mut session = GameSession::with_target(config.target);
    let mut player = AutoPlayer::new(strategy);
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = player.candidates_remaining();

        let Some(guess) = player.next_guess() else {
            break;
        };

        // The player never repeats a value, so only acceptance is possible here
        let Some(Ok(record)) = session.submit_guess(&guess.to_string()) else {
            break;
        };

        player.observe(guess, record.outcome);

        steps.push(GuessStep {
            value: guess,
            outcome: record.outcome,
            candidates_before,
            candidates_after: player.candidates_remaining(),
        });

        if record.outcome.is_correct() {
            return Ok(SolveResult {
                success: true,
                steps,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        steps,
        target: config.target,
    })
}
