//! Tiles and rows
//!
//! Both are small `Copy` values. Nothing here mutates in place: every edit
//! returns a new row, so a row handed out earlier never changes under the caller.

use super::Classification;

/// Number of letter slots in a row
pub const WORD_LENGTH: usize = 5;

/// One letter slot and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: Classification,
}

impl Tile {
    /// A tile holding `letter`, not yet evaluated
    #[must_use]
    pub const fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            status: Classification::Unknown,
        }
    }
}

/// One attempt: five tiles plus whether it has been revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
    revealed: bool,
}

impl Row {
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Every tile holds a letter
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.letter.is_some())
    }

    /// No tile holds a letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|tile| tile.letter.is_none())
    }

    /// The five letters, if the row is full
    #[must_use]
    pub fn attempt(&self) -> Option<[char; WORD_LENGTH]> {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(&self.tiles) {
            *slot = tile.letter?;
        }
        Some(letters)
    }

    /// The entered letters in order, skipping empty slots
    #[must_use]
    pub fn as_string(&self) -> String {
        self.tiles.iter().filter_map(|tile| tile.letter).collect()
    }

    /// Place `letter` in the first empty slot
    ///
    /// Returns `None` if the row is full or already revealed.
    #[must_use]
    pub fn with_letter(self, letter: char) -> Option<Self> {
        if self.revealed {
            return None;
        }
        let index = self.tiles.iter().position(|tile| tile.letter.is_none())?;
        let mut tiles = self.tiles;
        tiles[index] = Tile::with_letter(letter);
        Some(Self { tiles, ..self })
    }

    /// Clear the last filled slot
    ///
    /// Returns `None` if the row is empty or already revealed.
    #[must_use]
    pub fn without_last_letter(self) -> Option<Self> {
        if self.revealed {
            return None;
        }
        let index = self.tiles.iter().rposition(|tile| tile.letter.is_some())?;
        let mut tiles = self.tiles;
        tiles[index] = Tile::default();
        Some(Self { tiles, ..self })
    }

    /// Same letters with `statuses` applied, marked revealed
    #[must_use]
    pub fn revealed_with(self, statuses: [Classification; WORD_LENGTH]) -> Self {
        let mut tiles = self.tiles;
        for (tile, status) in tiles.iter_mut().zip(statuses) {
            tile.status = status;
        }
        Self {
            tiles,
            revealed: true,
        }
    }
}

impl FromIterator<char> for Row {
    /// Build an unrevealed row from up to five letters; extra letters are ignored
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter()
            .take(WORD_LENGTH)
            .fold(Self::default(), |row, letter| {
                row.with_letter(letter).unwrap_or(row)
            })
    }
}
