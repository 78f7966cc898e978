//! Hilo - CLI
//!
//! Guess-the-number game with TUI and CLI modes, plus automated players for
//! solving and benchmarking.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hilo::{
    commands::{
        SolveConfig, print_test_all_statistics, random_targets, run_benchmark, run_simple,
        run_test_all, solve_target,
    },
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "hilo",
    about = "Guess-the-number game with TUI and CLI modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy for automated players: bisect (default) or random
    #[arg(short, long, global = true, default_value = "bisect")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Watch an automated player solve a specific target
    Solve {
        /// The target number to solve (1-100)
        target: u32,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark automated player performance on random targets
    Benchmark {
        /// Number of random targets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the automated player on ALL possible targets
    TestAll {
        /// Limit number of targets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(),
        Commands::Simple => run_simple().map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { target, verbose } => {
            let config = SolveConfig::new(target);
            let result = solve_target(&config, &strategy).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random targets...");
            let targets = random_targets(count);
            let result = run_benchmark(&strategy, &targets);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(&strategy, limit);
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command() -> Result<()> {
    use hilo::interactive::{App, run_tui};

    let app = App::new();
    run_tui(app)
}
