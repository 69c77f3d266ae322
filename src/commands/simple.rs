//! Simple line-based game mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{GameEngine, GuessResult};
use crate::output::{print_board, print_keyboard, print_outcome};
use colored::Colorize;
use std::io::{self, Write};
use tracing::info;

/// What a line of input did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    TooLong,
    Guess(GuessResult),
}

/// Feed one line of input into the engine
///
/// The line is upper-cased and typed into the active row, then submitted.
/// Rejected guesses are cleared from the row so the next line starts fresh.
pub fn apply_line(engine: &mut GameEngine, line: &str) -> LineOutcome {
    let line = line.trim();

    if matches!(line.to_ascii_lowercase().as_str(), "quit" | "q" | "exit") {
        return LineOutcome::Quit;
    }
    if line.chars().count() > WORD_LENGTH {
        return LineOutcome::TooLong;
    }

    for letter in line.chars() {
        engine.input_letter(letter.to_ascii_uppercase());
    }

    let result = engine.submit_guess();
    if matches!(result, GuessResult::Incomplete | GuessResult::Invalid) {
        clear_active_row(engine);
    }
    LineOutcome::Guess(result)
}

fn clear_active_row(engine: &mut GameEngine) {
    for _ in 0..WORD_LENGTH {
        engine.delete_letter();
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &mut GameEngine) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!("Type a word and press Enter, or 'quit' to give up.\n");

    while !engine.state().status().is_terminal() {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", engine.attempts_used() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            break;
        };

        match apply_line(engine, &line) {
            LineOutcome::Quit => break,
            LineOutcome::TooLong => println!("{}", "Too many letters".red()),
            LineOutcome::Guess(GuessResult::Incomplete) => {
                println!("{}", "Not enough letters".red());
            }
            LineOutcome::Guess(GuessResult::Invalid) => {
                println!("{}", "Not in word list".red());
            }
            LineOutcome::Guess(GuessResult::Finished) => break,
            LineOutcome::Guess(GuessResult::Submitted { .. }) => {
                print_board(engine.state());
                print_keyboard(engine.state().keyboard());
            }
        }
    }

    info!(status = ?engine.state().status(), attempts = engine.attempts_used(), "game over");
    print_outcome(engine.state(), engine.target().text());
    Ok(())
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::RunningStatus;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(&["APPLE", "GHOST", "MANGO"]))
    }

    #[test]
    fn lowercase_line_is_submitted() {
        let dictionary = dictionary();
        let mut engine = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);

        let outcome = apply_line(&mut engine, "ghost\n");
        assert!(matches!(
            outcome,
            LineOutcome::Guess(GuessResult::Submitted {
                status: RunningStatus::InProgress,
                ..
            })
        ));
        assert_eq!(engine.attempts_used(), 1);
    }

    #[test]
    fn rejected_lines_leave_row_empty() {
        let dictionary = dictionary();
        let mut engine = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);

        assert_eq!(
            apply_line(&mut engine, "gho"),
            LineOutcome::Guess(GuessResult::Incomplete)
        );
        assert!(engine.state().board().rows()[0].is_empty());

        assert_eq!(
            apply_line(&mut engine, "abcde"),
            LineOutcome::Guess(GuessResult::Invalid)
        );
        assert!(engine.state().board().rows()[0].is_empty());
        assert_eq!(engine.attempts_used(), 0);
    }

    #[test]
    fn long_lines_are_refused_before_typing() {
        let dictionary = dictionary();
        let mut engine = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);

        assert_eq!(apply_line(&mut engine, "ghosts"), LineOutcome::TooLong);
        assert!(engine.state().board().rows()[0].is_empty());
    }

    #[test]
    fn quit_commands() {
        let dictionary = dictionary();
        let mut engine = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);

        for line in ["quit", "Q", "exit"] {
            assert_eq!(apply_line(&mut engine, line), LineOutcome::Quit);
        }
    }

    #[test]
    fn winning_line_finishes_game() {
        let dictionary = dictionary();
        let mut engine = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);

        apply_line(&mut engine, "apple");
        assert_eq!(engine.state().status(), RunningStatus::Won);
        assert_eq!(
            apply_line(&mut engine, "ghost"),
            LineOutcome::Guess(GuessResult::Finished)
        );
    }
}
