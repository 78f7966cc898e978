//! Test all targets - exhaustive player evaluation
//!
//! Runs an automated player against every possible target and generates
//! statistics.

use crate::core::{MAX_TARGET, MIN_TARGET};
use crate::output::formatters::distribution_bar;
use crate::session::GameSession;
use crate::solver::{AutoPlayer, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single target
#[derive(Debug, Clone)]
pub struct TargetTestResult {
    pub target: u32,
    pub guesses: Vec<u32>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all targets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_targets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_targets: Vec<(u32, usize)>,
}

/// Run the player against every target in [1,100] (or a limited prefix)
pub fn run_test_all<S: Strategy>(strategy: &S, limit: Option<usize>) -> TestAllStatistics {
    let targets: Vec<u32> = (MIN_TARGET..=MAX_TARGET)
        .take(limit.unwrap_or(MAX_TARGET as usize))
        .collect();

    println!("🎯 Testing {} targets...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::new();
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();

    let total_start = Instant::now();

    for &target in &targets {
        let mut session = GameSession::with_target(target);
        let mut player = AutoPlayer::new(strategy);
        let mut guesses = Vec::new();
        let mut success = false;

        // Generous budget: bisection needs 7, random never repeats so 100 is a ceiling
        for _ in 0..MAX_TARGET {
            let Some(guess) = player.next_guess() else {
                break;
            };
            let Some(Ok(record)) = session.submit_guess(&guess.to_string()) else {
                break;
            };

            guesses.push(guess);
            player.observe(guess, record.outcome);

            if record.outcome.is_correct() {
                success = true;
                break;
            }
        }

        let num_guesses = guesses.len();
        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }

        results.push(TargetTestResult {
            target,
            guesses,
            num_guesses,
            success,
        });

        pb.set_message(format!("target {target}"));
        pb.inc(1);
    }

    pb.finish_with_message("done");

    let total_time = total_start.elapsed();
    let total_targets = results.len();
    let solved = results.iter().filter(|r| r.success).count();
    let total_guesses: usize = results.iter().map(|r| r.num_guesses).sum();

    let max_guesses = results.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = results.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    // Targets tied for the longest rounds
    let mut worst_targets: Vec<(u32, usize)> = results
        .iter()
        .filter(|r| r.num_guesses == max_guesses)
        .map(|r| (r.target, r.num_guesses))
        .collect();
    worst_targets.truncate(10);

    TestAllStatistics {
        total_targets,
        solved,
        failed: total_targets - solved,
        guess_distribution,
        total_time,
        average_guesses: total_guesses as f64 / total_targets.max(1) as f64,
        max_guesses,
        min_guesses,
        worst_targets,
    }
}

/// Print statistics from a test-all run
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TEST-ALL RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Targets tested:   {}", stats.total_targets);
    println!(
        "   Solved:           {}",
        format!("{}", stats.solved).green().bold()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", stats.failed).red().bold()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", stats.min_guesses);
    println!("   Worst case:       {}", stats.max_guesses);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in stats.min_guesses..=stats.max_guesses {
        if let Some(&count) = stats.guess_distribution.get(&guess_count) {
            let pct = (count as f64 / stats.total_targets as f64) * 100.0;
            let bar = distribution_bar(pct, 40);
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !stats.worst_targets.is_empty() {
        println!("\n🐌 {}", "Longest rounds:".bright_cyan().bold());
        for (target, guesses) in &stats.worst_targets {
            println!("   {target:>3} took {guesses} guesses");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BisectStrategy;

    #[test]
    fn test_all_solves_everything_with_bisect() {
        let stats = run_test_all(&BisectStrategy, None);

        assert_eq!(stats.total_targets, 100);
        assert_eq!(stats.solved, 100);
        assert_eq!(stats.failed, 0);
        assert!(stats.max_guesses <= 7);
        assert!(stats.min_guesses >= 1);
    }

    #[test]
    fn test_all_respects_limit() {
        let stats = run_test_all(&BisectStrategy, Some(10));

        assert_eq!(stats.total_targets, 10);
        assert_eq!(stats.solved, 10);
    }

    #[test]
    fn distribution_covers_all_solved_targets() {
        let stats = run_test_all(&BisectStrategy, Some(25));

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn worst_targets_match_max_guesses() {
        let stats = run_test_all(&BisectStrategy, None);

        assert!(!stats.worst_targets.is_empty());
        for &(_, guesses) in &stats.worst_targets {
            assert_eq!(guesses, stats.max_guesses);
        }
    }
}
