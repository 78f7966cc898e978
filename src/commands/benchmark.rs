//! Benchmark command
//!
//! Measures automated player performance across many random targets.

use super::solve::{SolveConfig, solve_target};
use crate::solver::Strategy;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_targets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub targets_per_second: f64,
}

/// Run the benchmark over a set of targets
///
/// Rounds are independent, so they are simulated in parallel. Targets outside
/// [1,100] are skipped.
pub fn run_benchmark<S: Strategy + Sync>(strategy: &S, targets: &[u32]) -> BenchmarkResult {
    let start = Instant::now();

    let guess_counts: Vec<usize> = targets
        .par_iter()
        .filter_map(|&target| solve_target(&SolveConfig::new(target), strategy).ok())
        .map(|result| result.steps.len())
        .collect();

    let duration = start.elapsed();

    let total_targets = guess_counts.len();
    let total_guesses: usize = guess_counts.iter().sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &count in &guess_counts {
        *distribution.entry(count).or_insert(0) += 1;
    }

    BenchmarkResult {
        total_targets,
        total_guesses,
        average_guesses: total_guesses as f64 / total_targets.max(1) as f64,
        min_guesses: guess_counts.iter().copied().min().unwrap_or(0),
        max_guesses: guess_counts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        targets_per_second: total_targets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Draw `count` random targets from [1,100]
#[must_use]
pub fn random_targets(count: usize) -> Vec<u32> {
    use crate::core::{MAX_TARGET, MIN_TARGET};
    use rand::Rng;

    let mut rng = rand::rng();
    (0..count)
        .map(|_| rng.random_range(MIN_TARGET..=MAX_TARGET))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BisectStrategy;

    #[test]
    fn benchmark_runs() {
        let targets: Vec<u32> = (1..=10).collect();
        let result = run_benchmark(&BisectStrategy, &targets);

        assert_eq!(result.total_targets, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 7);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let targets: Vec<u32> = (1..=20).collect();
        let result = run_benchmark(&BisectStrategy, &targets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_targets);
    }

    #[test]
    fn benchmark_skips_invalid_targets() {
        let targets = vec![0, 50, 200];
        let result = run_benchmark(&BisectStrategy, &targets);

        assert_eq!(result.total_targets, 1);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let result = run_benchmark(&BisectStrategy, &[]);

        assert_eq!(result.total_targets, 0);
        assert_eq!(result.total_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let targets: Vec<u32> = (40..=60).collect();
        let result = run_benchmark(&BisectStrategy, &targets);

        // Average should be between min and max
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        // Distribution should only contain valid guess counts (1-7)
        for &guess_count in result.distribution.keys() {
            assert!((1..=7).contains(&guess_count));
        }
    }

    #[test]
    fn random_targets_are_in_range() {
        let targets = random_targets(500);
        assert_eq!(targets.len(), 500);
        assert!(targets.iter().all(|t| (1..=100).contains(t)));
    }
}
