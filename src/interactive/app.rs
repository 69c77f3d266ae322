//! TUI application state and logic

use crate::core::{MAX_ATTEMPTS, Word};
use crate::game::{GameEngine, GuessResult, RunningStatus};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub engine: GameEngine<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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

/// Results for this session only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    fn record(&mut self, status: RunningStatus, attempts: usize) {
        self.games_played += 1;
        if status == RunningStatus::Won {
            self.games_won += 1;
            if attempts <= MAX_ATTEMPTS {
                self.guess_distribution[attempts] += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start with `target` as the first game's answer; later games draw from `rng`
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary, rng: StdRng) -> Self {
        Self {
            engine: GameEngine::new(target, dictionary),
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.state().status().is_terminal()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.is_game_over() => self.should_quit = true,
            KeyCode::Enter if self.is_game_over() => self.new_game(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.engine.delete_letter(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.engine.input_letter(c.to_ascii_uppercase());
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.engine.submit_guess() {
            GuessResult::Incomplete => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            GuessResult::Invalid => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            GuessResult::Finished => {}
            GuessResult::Submitted { status, .. } => self.on_submitted(status),
        }
    }

    fn on_submitted(&mut self, status: RunningStatus) {
        let attempts = self.engine.attempts_used();
        match status {
            RunningStatus::InProgress => {}
            RunningStatus::Won => {
                self.stats.record(status, attempts);
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Enter: new game | q: quit", MessageStyle::Info);
            }
            RunningStatus::Lost => {
                self.stats.record(status, attempts);
                let text = format!("The word was {}", self.engine.target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Enter: new game | q: quit", MessageStyle::Info);
            }
        }
        if status.is_terminal() {
            info!(?status, attempts, "game finished");
        }
    }

    /// Start over with a random target from the dictionary
    pub fn new_game(&mut self) {
        let dictionary = self.engine.dictionary();
        let Some(target) = dictionary.choose_target(&mut self.rng).cloned() else {
            self.add_message("Dictionary is empty!", MessageStyle::Error);
            return;
        };
        self.engine = GameEngine::new(target, dictionary);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(&["APPLE", "GHOST", "MANGO"]))
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(
            Word::new("APPLE").unwrap(),
            dictionary,
            StdRng::seed_from_u64(1),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn letters_are_upper_cased_into_the_row() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.engine.state().board().rows()[0].as_string(), "G");
    }

    #[test]
    fn rejected_guesses_show_messages() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "gho");
        assert_eq!(app.messages.last().unwrap().text, "Not enough letters");

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_word(&mut app, "abcde");
        assert_eq!(app.messages.last().unwrap().text, "Not in word list");
        assert_eq!(app.engine.attempts_used(), 0);
    }

    #[test]
    fn win_updates_statistics_and_enter_restarts() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_word(&mut app, "ghost");
        type_word(&mut app, "apple");

        assert!(app.is_game_over());
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.is_game_over());
        assert_eq!(app.engine.attempts_used(), 0);
        assert!(dictionary.contains(app.engine.target().text()));
    }

    #[test]
    fn loss_is_recorded() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut app, "ghost");
        }

        assert!(app.is_game_over());
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn q_only_quits_after_game_over() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.engine.state().board().rows()[0].as_string(), "Q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
