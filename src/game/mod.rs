//! Game state machine
//!
//! [`GameEngine`] is the single entry point for moves; every accepted move
//! yields a new [`GameSnapshot`].

mod engine;
mod state;

pub use engine::GameEngine;
pub use state::{GameSnapshot, GuessResult, RunningStatus};
