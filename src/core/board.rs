//! The six-row board

use super::Row;

/// Number of attempts per game
pub const MAX_ATTEMPTS: usize = 6;

/// Ordered rows of a game
///
/// Rows are revealed strictly in order, so the active row (the first one not
/// yet revealed) is always preceded by revealed rows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    rows: [Row; MAX_ATTEMPTS],
}

impl Board {
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Index of the first unrevealed row, `None` once every row is revealed
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| !row.is_revealed())
    }

    #[must_use]
    pub fn active_row(&self) -> Option<&Row> {
        self.active_index().map(|index| &self.rows[index])
    }

    /// Revealed rows, oldest first
    pub fn revealed_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take_while(|row| row.is_revealed())
    }

    /// Number of rows already revealed
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_rows().count()
    }

    /// A copy of the board with the active row replaced
    ///
    /// # Panics
    /// Panics if there is no active row.
    #[must_use]
    pub fn with_active_row(self, row: Row) -> Self {
        let index = self
            .active_index()
            .expect("no unrevealed row to replace");
        let mut rows = self.rows;
        rows[index] = row;
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;

    fn revealed(word: &str) -> Row {
        word.chars()
            .collect::<Row>()
            .revealed_with([Classification::Absent; 5])
    }

    #[test]
    fn fresh_board_starts_at_first_row() {
        let board = Board::default();
        assert_eq!(board.active_index(), Some(0));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn revealing_advances_active_row() {
        let board = Board::default().with_active_row(revealed("GHOST"));
        assert_eq!(board.active_index(), Some(1));
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.rows()[0].as_string(), "GHOST");
    }

    #[test]
    fn unrevealed_edit_stays_on_same_row() {
        let row: Row = "AB".chars().collect();
        let board = Board::default().with_active_row(row);
        assert_eq!(board.active_index(), Some(0));
        assert_eq!(board.active_row(), Some(&row));
    }

    #[test]
    fn full_board_has_no_active_row() {
        let board = (0..MAX_ATTEMPTS).fold(Board::default(), |board, _| {
            board.with_active_row(revealed("GHOST"))
        });
        assert_eq!(board.active_index(), None);
        assert_eq!(board.active_row(), None);
        assert_eq!(board.revealed_count(), MAX_ATTEMPTS);
    }

    #[test]
    #[should_panic(expected = "no unrevealed row")]
    fn replacing_on_full_board_panics() {
        let board = (0..MAX_ATTEMPTS).fold(Board::default(), |board, _| {
            board.with_active_row(revealed("GHOST"))
        });
        let _ = board.with_active_row(Row::default());
    }
}
