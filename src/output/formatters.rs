//! Formatting utilities for terminal output

use crate::core::{Classification, Row};
use colored::{ColoredString, Colorize};

/// Emoji square for a single classification
#[must_use]
pub const fn classification_to_emoji(status: Classification) -> char {
    match status {
        Classification::Matched => '🟩',
        Classification::Present => '🟨',
        Classification::Absent => '⬛',
        Classification::Unknown => '⬜',
    }
}

/// Format a row's feedback as an emoji string
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.tiles()
        .iter()
        .map(|tile| classification_to_emoji(tile.status))
        .collect()
}

/// A letter drawn as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn letter_tile(letter: Option<char>, status: Classification) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match status {
        Classification::Matched => text.black().on_green().bold(),
        Classification::Present => text.black().on_yellow().bold(),
        Classification::Absent => text.white().on_bright_black(),
        Classification::Unknown => text.bright_white(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Matched, Present, Unknown};

    #[test]
    fn emoji_for_each_classification() {
        let emoji: String = [Matched, Present, Absent, Unknown]
            .into_iter()
            .map(classification_to_emoji)
            .collect();
        assert_eq!(emoji, "🟩🟨⬛⬜");
    }

    #[test]
    fn unrevealed_row_is_blank() {
        let row: Row = "APP".chars().collect();
        assert_eq!(row_to_emoji(&row), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn revealed_row_shows_feedback() {
        let row: Row = "PAPPY".chars().collect();
        let row = row.revealed_with([Present, Present, Matched, Absent, Absent]);
        assert_eq!(row_to_emoji(&row), "🟨🟨🟩⬛⬛");
    }

    #[test]
    fn letter_tile_pads_and_fills_blank() {
        colored::control::set_override(false);
        assert_eq!(letter_tile(Some('A'), Matched).to_string(), " A ");
        assert_eq!(letter_tile(None, Unknown).to_string(), " _ ");
    }
}
