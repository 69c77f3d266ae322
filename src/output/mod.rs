//! Terminal output formatting
//!
//! Display utilities for the line-based game and one-off checks.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_keyboard, print_outcome, print_row};
