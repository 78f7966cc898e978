//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_TARGET, Outcome};
use crate::output::formatters::{outcome_glyph, outcome_message, range_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 GUESS THE NUMBER - I'm thinking of a number from 1 to 100")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current feedback
            Constraint::Percentage(60), // History
        ])
        .split(area);

    render_feedback(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_feedback(f: &mut Frame, app: &App, area: Rect) {
    let (low, high) = app.implied_bounds();

    let mut content = vec![Line::from(format!("Attempts: {}", app.session.attempts()))];

    if let Some(err) = &app.error {
        content.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(record) = app.session.last_record() {
        let style = match record.outcome {
            Outcome::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Outcome::TooLow | Outcome::TooHigh => Style::default().fg(Color::Yellow),
        };
        content.push(Line::from(vec![
            Span::raw(format!("{} ", outcome_glyph(record.outcome))),
            Span::styled(
                format!("{} - {}", record.value, outcome_message(record.outcome)),
                style,
            ),
        ]));
    } else {
        content.push(Line::from("Make your first guess!"));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Range: ["),
        Span::styled(range_bar(low, high, 30), Style::default().fg(Color::Cyan)),
        Span::raw(format!("] {low}-{high}")),
    ]));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Feedback ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .rev()
        .map(|record| {
            let style = match record.outcome {
                Outcome::Correct => Style::default().fg(Color::Green),
                Outcome::TooLow | Outcome::TooHigh => Style::default().fg(Color::Yellow),
            };
            let content = format!(
                "Attempt {}: {:>3} {} {}",
                record.attempt,
                record.value,
                outcome_glyph(record.outcome),
                outcome_message(record.outcome)
            );
            ListItem::new(content).style(style)
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" Guess History ")
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Narrowing gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_narrowing_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_narrowing_progress(f: &mut Frame, app: &App, area: Rect) {
    let (low, high) = app.implied_bounds();
    let remaining = high.saturating_sub(low) + 1;
    let eliminated = MAX_TARGET - remaining;

    // 99 eliminated values means the number is pinned down
    let progress_pct = ((f64::from(eliminated) / f64::from(MAX_TARGET - 1)) * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Numbers Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct.min(100))
        .label(format!("{eliminated}/99 | {remaining} still possible"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CORRECT! YOU WON! 🎉 | Press 'n' to play again or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter your guess (1-100) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::WinCelebration => "Mode: Won",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Wins: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let avg_text = if app.stats.games_won > 0 {
        format!(
            "Avg: {:.1} | Best: {}",
            app.stats.average_attempts(),
            app.stats.best_win.unwrap_or(0)
        )
    } else {
        "Avg: - | Best: -".to_string()
    };
    let avg = Paragraph::new(avg_text).alignment(Alignment::Center);
    f.render_widget(avg, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "q: Quit | n: New Game | Enter: Submit",
        InputMode::WinCelebration => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
