//! Display functions for game state

use super::formatters::{letter_tile, row_to_emoji};
use crate::commands::CheckResult;
use crate::core::{KeyboardAggregate, Row};
use crate::game::{GameSnapshot, RunningStatus};
use colored::Colorize;

/// Keyboard layout used when printing letter feedback
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print one row as colored tiles
pub fn print_row(row: &Row) {
    let tiles: Vec<String> = row
        .tiles()
        .iter()
        .map(|tile| letter_tile(tile.letter, tile.status).to_string())
        .collect();
    println!("  {}", tiles.join(" "));
}

/// Print every row of the board
pub fn print_board(snapshot: &GameSnapshot) {
    println!();
    for row in snapshot.board().rows() {
        print_row(row);
    }
    println!();
}

/// Print the keyboard colored by what is known about each letter
pub fn print_keyboard(keyboard: &KeyboardAggregate) {
    for (indent, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let line: Vec<String> = keys
            .chars()
            .map(|key| letter_tile(Some(key), keyboard.status_of(key)).to_string())
            .collect();
        println!("{}{}", " ".repeat(indent * 2), line.join(""));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(snapshot: &GameSnapshot, target: &str) {
    let attempts = snapshot.board().revealed_count();

    println!("{}", "═".repeat(40).bright_cyan());
    match snapshot.status() {
        RunningStatus::Won => {
            println!(
                "{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        RunningStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                target.bright_yellow().bold()
            );
        }
        RunningStatus::InProgress => {
            println!("Game abandoned. The word was {}", target.bright_yellow());
        }
    }
    println!("{}", "═".repeat(40).bright_cyan());

    for row in snapshot.board().revealed_rows() {
        println!("  {}", row_to_emoji(row));
    }
    println!();
}

/// Print the result of a one-off check
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    print_row(&result.row);
    if result.is_solved() {
        println!("  {} {}\n", row_to_emoji(&result.row), "solved".green().bold());
    } else {
        println!("  {}\n", row_to_emoji(&result.row));
    }
}
