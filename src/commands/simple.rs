//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI.

use crate::core::Outcome;
use crate::output::formatters::{outcome_glyph, outcome_message};
use crate::session::GameSession;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Guess the Number - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'm thinking of a number between 1 and 100.");
    println!("Type a guess and I'll tell you too low, too high, or correct.\n");
    println!("Commands: 'quit' to exit, 'new' for a fresh number\n");

    let mut session = GameSession::new();

    loop {
        let attempt = session.attempts() + 1;
        let input = get_user_input(&format!("Guess (attempt {attempt})"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.play_again();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        // The win branch below always resets or exits before the next prompt
        debug_assert!(!session.is_won(), "prompt loop requires an active round");

        let Some(result) = session.submit_guess(&input) else {
            continue;
        };

        match result {
            Err(err) => println!("❌ {}\n", err.to_string().red()),
            Ok(record) => match record.outcome {
                Outcome::TooLow => {
                    println!("{} {}\n", outcome_glyph(record.outcome), "Too low!".yellow());
                }
                Outcome::TooHigh => {
                    println!(
                        "{} {}\n",
                        outcome_glyph(record.outcome),
                        "Too high!".yellow()
                    );
                }
                Outcome::Correct => {
                    print_win_banner(&session);

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session.play_again();
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            },
        }
    }
}

fn print_win_banner(session: &GameSession) {
    let attempts = session.attempts();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  C O R R E C T !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match attempts {
        1 => ("🏆 First try!", "Pure luck or pure genius!"),
        2..=4 => ("⭐ Excellent!", "Way ahead of the curve!"),
        5..=7 => ("💫 Sharp!", "Binary-search tight!"),
        8..=10 => ("✨ Solid!", "Got there steadily!"),
        _ => ("✓ Done!", "Persistence pays off!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Number found in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for record in session.history() {
        println!(
            "    {}. {} {} {}",
            record.attempt.to_string().bright_black(),
            format!("{:>3}", record.value).bright_white().bold(),
            outcome_glyph(record.outcome),
            outcome_message(record.outcome)
        );
    }

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
