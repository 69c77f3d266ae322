//! Core domain types for Wordle
//!
//! Pure value types and the match resolver. Nothing here does I/O or logs;
//! the game engine builds on these to produce snapshots.

mod board;
mod feedback;
mod keyboard;
mod row;
mod word;

pub use board::{Board, MAX_ATTEMPTS};
pub use feedback::{Classification, resolve};
pub use keyboard::KeyboardAggregate;
pub use row::{Row, Tile, WORD_LENGTH};
pub use word::{Word, WordError};
