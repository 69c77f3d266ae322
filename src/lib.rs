//! Wordle Game
//!
//! A single-session Wordle engine: six attempts to find a five-letter word,
//! with per-letter feedback and a cumulative keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameEngine, GuessResult};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut game = GameEngine::new(Word::new("apple").unwrap(), &dictionary);
//!
//! for letter in "GHOST".chars() {
//!     game.input_letter(letter);
//! }
//! if let GuessResult::Submitted { revealed, .. } = game.submit_guess() {
//!     println!("{}", revealed.as_string());
//! }
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
