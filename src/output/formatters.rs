//! Formatting utilities for terminal output

use crate::core::{MAX_TARGET, MIN_TARGET, Outcome};
use colored::Colorize;

/// Player-facing message for an outcome
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::TooLow => "Too low!",
        Outcome::TooHigh => "Too high!",
        Outcome::Correct => "Correct! You won!",
    }
}

/// Direction glyph for an outcome: which way the next guess should move
#[must_use]
pub const fn outcome_glyph(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::TooLow => "🔼",
        Outcome::TooHigh => "🔽",
        Outcome::Correct => "🎯",
    }
}

/// Format a distribution percentage as a colored bar
///
/// Used by the benchmark and test-all printers.
#[must_use]
pub fn distribution_bar(pct: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((pct / 100.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}

/// Format the feasible interval as a bar over the full [1,100] range
///
/// The filled segment shows where the remaining candidates sit.
#[must_use]
pub fn range_bar(low: u32, high: u32, width: usize) -> String {
    let span = f64::from(MAX_TARGET - MIN_TARGET + 1);
    let start = ((f64::from(low - MIN_TARGET) / span) * width as f64) as usize;
    let end = ((f64::from(high - MIN_TARGET + 1) / span) * width as f64).ceil() as usize;

    let start = start.min(width);
    let end = end.clamp(start, width);

    format!(
        "{}{}{}",
        "░".repeat(start),
        "█".repeat(end - start),
        "░".repeat(width - end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_messages_match_the_widget_texts() {
        assert_eq!(outcome_message(Outcome::TooLow), "Too low!");
        assert_eq!(outcome_message(Outcome::TooHigh), "Too high!");
        assert_eq!(outcome_message(Outcome::Correct), "Correct! You won!");
    }

    #[test]
    fn distribution_bar_empty() {
        // Compare glyph counts: the bar may carry color escape codes
        let bar = distribution_bar(0.0, 10);
        assert_eq!(bar.matches('█').count(), 0);
        assert_eq!(bar.matches('░').count(), 10);
    }

    #[test]
    fn distribution_bar_half() {
        let bar = distribution_bar(50.0, 40);
        assert_eq!(bar.matches('█').count(), 20);
        assert_eq!(bar.matches('░').count(), 20);
    }

    #[test]
    fn distribution_bar_clamps_overflow() {
        let bar = distribution_bar(150.0, 10);
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(bar.matches('░').count(), 0);
    }

    #[test]
    fn range_bar_full_interval() {
        let bar = range_bar(1, 100, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn range_bar_upper_half() {
        let bar = range_bar(51, 100, 10);
        assert_eq!(bar, "░░░░░█████");
    }

    #[test]
    fn range_bar_single_value_still_visible() {
        let bar = range_bar(50, 50, 10);
        assert_eq!(bar.matches('█').count(), 1);
        assert_eq!(bar.chars().count(), 10);
    }
}
