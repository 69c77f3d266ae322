//! Game snapshot and guess outcomes

use crate::core::{Board, KeyboardAggregate, Row};

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunningStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RunningStatus {
    /// `Won` and `Lost` accept no further moves
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Immutable view of a game at one point in time
///
/// The engine swaps in a fresh snapshot on every transition; a snapshot that
/// has been cloned out never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    board: Board,
    keyboard: KeyboardAggregate,
    status: RunningStatus,
}

impl GameSnapshot {
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardAggregate {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> RunningStatus {
        self.status
    }

    pub(crate) fn with_board(&self, board: Board) -> Self {
        Self {
            board,
            ..self.clone()
        }
    }

    pub(crate) fn with_active_row(&self, row: Row) -> Self {
        self.with_board(self.board.with_active_row(row))
    }

    pub(crate) fn with_keyboard(self, keyboard: KeyboardAggregate) -> Self {
        Self { keyboard, ..self }
    }

    pub(crate) fn with_status(self, status: RunningStatus) -> Self {
        Self { status, ..self }
    }
}

/// Outcome of submitting the active row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// The active row still has empty tiles
    Incomplete,
    /// Not the target and not in the dictionary
    Invalid,
    /// The game had already ended; nothing changed
    Finished,
    /// The row was evaluated and revealed
    Submitted {
        submitted: Row,
        revealed: Row,
        status: RunningStatus,
    },
}
