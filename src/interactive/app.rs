//! TUI application state and logic

use crate::core::{GuessError, MAX_TARGET, MIN_TARGET, Outcome};
use crate::output::formatters::outcome_message;
use crate::session::GameSession;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub input_buffer: String,
    pub error: Option<GuessError>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_winning_attempts: usize,
    pub best_win: Option<usize>,
}

impl Statistics {
    fn record_win(&mut self, attempts: usize) {
        self.games_won += 1;
        self.total_winning_attempts += attempts;
        self.best_win = Some(self.best_win.map_or(attempts, |best| best.min(attempts)));
    }

    /// Average attempts across won games
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_winning_attempts as f64 / self.games_won as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            input_buffer: String::new(),
            error: None,
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! I'm thinking of a number between {MIN_TARGET} and {MAX_TARGET}."
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type digits and press Enter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    /// Submit the current input buffer as a guess
    ///
    /// Rejections keep the typed input so the player can correct it; accepted
    /// guesses clear the buffer.
    pub fn submit_current(&mut self) {
        self.error = None;
        let raw = self.input_buffer.clone();

        match self.session.submit_guess(&raw) {
            None => {
                // Round already won; guessing is disabled until 'n'
            }
            Some(Err(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.error = Some(err);
            }
            Some(Ok(record)) => {
                self.input_buffer.clear();

                if record.outcome.is_correct() {
                    let attempts = record.attempt;
                    self.stats.record_win(attempts);
                    self.input_mode = InputMode::WinCelebration;

                    let celebration = match attempts {
                        1 => "🎯 FIRST TRY! Unbelievable! 🌟".to_string(),
                        2..=4 => format!("🔥 MAGNIFICENT! Only {attempts} guesses! 🔥"),
                        5..=7 => format!("✨ SPLENDID! {attempts} guesses! ✨"),
                        8..=10 => format!("👏 GOOD WORK! {attempts} guesses! 👏"),
                        _ => format!("🎊 GOT IT in {attempts}! 🎊"),
                    };

                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message(
                        "Press 'n' to play again or 'q' to quit.",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(outcome_message(record.outcome), MessageStyle::Info);
                }
            }
        }
    }

    /// Start a fresh round with a new target
    pub fn new_game(&mut self) {
        self.session.play_again();
        self.input_buffer.clear();
        self.error = None;
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.stats.total_games += 1;
        self.add_message("New game started! New number picked.", MessageStyle::Info);
    }

    /// The interval still consistent with the history alone
    ///
    /// Derived purely from recorded outcomes, never from the secret target, so
    /// rendering it leaks nothing.
    #[must_use]
    pub fn implied_bounds(&self) -> (u32, u32) {
        let mut low = MIN_TARGET;
        let mut high = MAX_TARGET;

        for record in self.session.history() {
            match record.outcome {
                Outcome::TooLow => low = low.max(record.value + 1),
                Outcome::TooHigh => high = high.min(record.value.saturating_sub(1)),
                Outcome::Correct => return (record.value, record.value),
            }
        }

        (low, high)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Guess input is disabled after a win
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        // Three digits cover the whole 1-100 range
                        if app.input_buffer.len() < 3 {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_target(target: u32) -> App {
        let mut app = App::new();
        app.session = GameSession::with_target(target);
        app
    }

    #[test]
    fn accepted_guess_clears_buffer_and_logs_feedback() {
        let mut app = app_with_target(50);
        app.input_buffer = "30".to_string();
        app.submit_current();

        assert!(app.input_buffer.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.session.attempts(), 1);
        assert!(app.messages.iter().any(|m| m.text == "Too low!"));
    }

    #[test]
    fn rejected_guess_keeps_buffer_and_sets_error() {
        let mut app = app_with_target(50);
        app.input_buffer = "999".to_string();
        app.submit_current();

        assert_eq!(app.input_buffer, "999");
        assert!(matches!(app.error, Some(GuessError::OutOfRange(999))));
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn rejected_guess_logs_error_message() {
        let mut app = app_with_target(50);
        app.input_buffer = "abc".to_string();
        app.submit_current();

        let last = app.messages.last().unwrap();
        assert!(matches!(last.style, MessageStyle::Error));
        assert!(last.text.contains("whole number"));
    }

    #[test]
    fn winning_switches_to_celebration_mode() {
        let mut app = app_with_target(50);
        app.input_buffer = "50".to_string();
        app.submit_current();

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.best_win, Some(1));
    }

    #[test]
    fn new_game_resets_round_state() {
        let mut app = app_with_target(50);
        app.input_buffer = "50".to_string();
        app.submit_current();

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.session.history().is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.stats.total_games, 2);
    }

    #[test]
    fn implied_bounds_track_history_only() {
        let mut app = app_with_target(50);
        assert_eq!(app.implied_bounds(), (1, 100));

        app.input_buffer = "30".to_string();
        app.submit_current();
        assert_eq!(app.implied_bounds(), (31, 100));

        app.input_buffer = "70".to_string();
        app.submit_current();
        assert_eq!(app.implied_bounds(), (31, 69));

        app.input_buffer = "50".to_string();
        app.submit_current();
        assert_eq!(app.implied_bounds(), (50, 50));
    }
}
