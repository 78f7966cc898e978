//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, random_targets, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_target};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
