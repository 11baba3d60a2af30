//! TUI application state and logic

use crate::clock::DayNumber;
use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Outcome, Phase, PuzzleStateMachine};
use crate::share::DEFAULT_DECORATION;
use crate::storage::Storage;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: Storage + ?Sized> {
    pub machine: PuzzleStateMachine<'a, S>,
    /// Oldest day reachable with the arrow keys
    pub earliest: DayNumber,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: Storage + ?Sized> App<'a, S> {
    #[must_use]
    pub fn new(machine: PuzzleStateMachine<'a, S>, earliest: DayNumber) -> Self {
        let mut app = Self {
            machine,
            earliest,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_stats: false,
            should_quit: false,
        };
        app.add_message(
            "Guess the five-letter word in six tries. ←/→ change day.",
            MessageStyle::Info,
        );
        app.describe_session();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Whether the left arrow can go back another day
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.machine.session().day_number() > self.earliest
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.machine.is_today()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_stats = !self.show_stats,
            KeyCode::Left => self.step(-1),
            KeyCode::Right => self.step(1),
            KeyCode::Home => {
                let today = self.machine.today();
                self.go_to(today);
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.type_letter(c),
            _ => {}
        }
    }

    fn type_letter(&mut self, c: char) {
        if self.machine.phase() != Phase::Active {
            return;
        }
        if c.is_ascii_alphabetic() && self.input_buffer.len() < WORD_LENGTH {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        match self.machine.submit_guess(&guess) {
            Ok(outcome) if outcome.has_won => {
                let celebration = self.machine.celebration().unwrap_or("Solved!");
                self.add_message(
                    &format!("{celebration} Solved in {}/{MAX_ATTEMPTS}", outcome.attempts_used),
                    MessageStyle::Success,
                );
            }
            Ok(outcome) if outcome.game_over => {
                let answer = self.machine.session().target_word().text().to_uppercase();
                self.add_message(&format!("Out of guesses. The word was {answer}"), MessageStyle::Error);
            }
            Ok(_) => {}
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                // Keep the letters so a typo can be fixed
                if self.machine.phase() == Phase::Active {
                    self.input_buffer = guess;
                }
            }
        }
    }

    fn step(&mut self, delta: i64) {
        let target = self.machine.session().day_number().offset(delta);
        if target < self.earliest {
            self.add_message("Only the last 30 days can be replayed", MessageStyle::Error);
            return;
        }
        self.go_to(target);
    }

    fn go_to(&mut self, day: DayNumber) {
        if day == self.machine.session().day_number() {
            return;
        }
        match self.machine.navigate_to(day) {
            Ok(_) => {
                self.input_buffer.clear();
                self.describe_session();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn describe_session(&mut self) {
        let session = self.machine.session();
        let title = if self.machine.is_today() {
            "Today's puzzle".to_string()
        } else {
            format!("Puzzle for {}", session.day_number().format())
        };
        let (detail, style) = match session.phase() {
            Phase::Active if session.guesses().is_empty() => (String::new(), MessageStyle::Info),
            Phase::Active => (
                format!(" ({} attempts left)", session.attempts_left()),
                MessageStyle::Info,
            ),
            Phase::Finished(Outcome::Won) => (" (solved)".to_string(), MessageStyle::Success),
            Phase::Finished(Outcome::Lost) => (" (missed)".to_string(), MessageStyle::Error),
        };
        self.add_message(&format!("{title}{detail}"), style);
    }

    /// Share text once the current puzzle is finished
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.machine
            .session()
            .game_over()
            .then(|| self.machine.share_text(DEFAULT_DECORATION))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage + ?Sized>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<'_, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Storage + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
