//! Display functions for command results

use super::formatters::{distribution_bar, outcome_glyph, outcome_message};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            format!("{:>3}", step.value).bright_white().bold(),
            outcome_glyph(step.outcome),
            outcome_message(step.outcome)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction =
                    f64::from(step.candidates_before) / f64::from(step.candidates_after);
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Targets tested:   {}", result.total_targets);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Targets/second:   {:.1}", result.targets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_targets as f64) * 100.0;
            let bar = distribution_bar(pct, 40);
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
