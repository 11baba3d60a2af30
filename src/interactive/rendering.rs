//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterStatus, MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Outcome, Phase};
use crate::stats::Statistics;
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_play_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, status: LetterStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

fn render_header<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let day = app.machine.session().day_number();
    let title = if app.machine.is_today() {
        "Today's Puzzle".to_string()
    } else {
        day.format()
    };
    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::Cyan } else { Color::DarkGray };
        Span::styled(glyph, Style::default().fg(color))
    };

    let header = Paragraph::new(Line::from(vec![
        arrow(app.can_go_back(), "◀  "),
        Span::styled(
            format!("LEXI · {title}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        arrow(app.can_go_forward(), "  ▶"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_play_panel<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(KEYBOARD_ROWS.len() as u16 + 2), // Keyboard
            Constraint::Min(3),                          // Input or share
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
}

fn render_grid<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = app.machine.session();
    let mut lines: Vec<Line> = session
        .guesses()
        .iter()
        .zip(session.feedback_rows())
        .map(|(guess, feedback)| guess_line(guess.text(), &feedback))
        .collect();

    if session.phase() == Phase::Active {
        let typed: Vec<Span> = app
            .input_buffer
            .chars()
            .map(|c| Span::styled(format!("[{}]", c.to_ascii_uppercase()), Style::default().fg(Color::White)))
            .chain(
                std::iter::repeat_with(|| Span::styled("[ ]", Style::default().fg(Color::Gray)))
                    .take(WORD_LENGTH.saturating_sub(app.input_buffer.len())),
            )
            .collect();
        lines.push(Line::from(typed));
    }
    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::styled(" ·  ·  ·  ·  · ", Style::default().fg(Color::DarkGray)));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses {}/{MAX_ATTEMPTS} ", session.guesses().len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn guess_line(text: &str, feedback: &Feedback) -> Line<'static> {
    Line::from(
        text.chars()
            .zip(feedback.statuses())
            .map(|(letter, &status)| tile(letter, status))
            .collect::<Vec<_>>(),
    )
}

fn render_keyboard<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let keyboard = app.machine.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|letter| match keyboard.status(letter) {
                        Some(status) => tile(letter, status),
                        None => Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            Style::default().fg(Color::White),
                        ),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(widget, area);
}

fn render_input<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.machine.phase() {
        Phase::Active => (
            " Type a word | Enter: Submit | Backspace: Delete ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        Phase::Finished(Outcome::Won) => (
            " 🎉 Solved! Share your result ",
            app.share_text().unwrap_or_default(),
            Color::Green,
        ),
        Phase::Finished(Outcome::Lost) => (
            " Better luck tomorrow ",
            app.share_text().unwrap_or_default(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_info_panel<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    if app.show_stats {
        let stats = app.machine.statistics();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Win rate gauge
                Constraint::Percentage(60), // Statistics
                Constraint::Min(3),         // Messages
            ])
            .split(area);

        render_win_rate(f, &stats, chunks[0]);
        render_statistics(f, app, &stats, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_win_rate(f: &mut Frame, stats: &Statistics, area: Rect) {
    let percent = u16::try_from(stats.win_percentage().min(100)).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{percent}% of {} played", stats.games_played));

    f.render_widget(gauge, area);
}

fn render_statistics<S: Storage + ?Sized>(
    f: &mut Frame,
    app: &App<'_, S>,
    stats: &Statistics,
    area: Rect,
) {
    let session = app.machine.session();
    // Highlight the bucket this puzzle landed in
    let highlight = session.has_won().then(|| session.guesses().len());

    let mut lines = vec![
        Line::from(format!(
            "Played {}   Streak {}   Best {}",
            stats.games_played, stats.current_streak, stats.max_streak
        )),
        Line::from(""),
    ];

    let max = stats.max_distribution().max(1);
    let width = usize::from(area.width.saturating_sub(12)).max(1);
    for (index, &count) in stats.guess_distribution.iter().enumerate() {
        let filled = (count as usize * width / max as usize).max(1);
        let color = if highlight == Some(index + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", index + 1)),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_status<S: Storage + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let session = app.machine.session();
    let state_text = match session.phase() {
        Phase::Active => format!("Attempts left: {}", session.attempts_left()),
        Phase::Finished(Outcome::Won) => "Solved".to_string(),
        Phase::Finished(Outcome::Lost) => "Missed".to_string(),
    };
    f.render_widget(Paragraph::new(state_text).alignment(Alignment::Center), chunks[0]);

    let day_text = format!("Day {}", session.day_number());
    f.render_widget(Paragraph::new(day_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | ←/→: Day | Home: Today | Tab: Stats")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
