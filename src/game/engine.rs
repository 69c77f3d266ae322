//! Game engine: the only place a game's state changes

use super::state::{GameSnapshot, GuessResult, RunningStatus};
use crate::core::{Word, resolve};
use crate::wordlists::Dictionary;
use tracing::{debug, trace};

/// A single game of Wordle
///
/// Owns the current [`GameSnapshot`] and replaces it wholesale on every
/// accepted move. Once the game is won or lost, every move is ignored.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{GameEngine, GuessResult, RunningStatus};
/// use wordle_game::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(vec![Word::new("PAPPY").unwrap()]);
/// let mut game = GameEngine::new(Word::new("APPLE").unwrap(), &dictionary);
///
/// for letter in "APPLE".chars() {
///     game.input_letter(letter);
/// }
///
/// assert!(matches!(
///     game.submit_guess(),
///     GuessResult::Submitted { status: RunningStatus::Won, .. }
/// ));
/// ```
pub struct GameEngine<'a> {
    target: Word,
    dictionary: &'a Dictionary,
    snapshot: GameSnapshot,
}

impl<'a> GameEngine<'a> {
    /// Start a game with `target` as the answer
    ///
    /// `target` does not have to be in `dictionary`; it is always accepted as a guess.
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary) -> Self {
        debug!(words = dictionary.len(), "new game");
        Self {
            target,
            dictionary,
            snapshot: GameSnapshot::default(),
        }
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &GameSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Number of rows already submitted
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.snapshot.board().revealed_count()
    }

    /// Put `letter` in the next empty tile of the active row
    ///
    /// Ignored when the game is over or the row is full.
    pub fn input_letter(&mut self, letter: char) {
        if self.snapshot.status().is_terminal() {
            return;
        }
        let Some(row) = self.snapshot.board().active_row() else {
            return;
        };
        if let Some(row) = row.with_letter(letter) {
            trace!(%letter, row = %row.as_string(), "letter entered");
            self.snapshot = self.snapshot.with_active_row(row);
        }
    }

    /// Clear the last filled tile of the active row
    ///
    /// Ignored when the game is over or the row is empty.
    pub fn delete_letter(&mut self) {
        if self.snapshot.status().is_terminal() {
            return;
        }
        let Some(row) = self.snapshot.board().active_row() else {
            return;
        };
        if let Some(row) = row.without_last_letter() {
            trace!(row = %row.as_string(), "letter deleted");
            self.snapshot = self.snapshot.with_active_row(row);
        }
    }

    /// Evaluate the active row
    ///
    /// Returns [`GuessResult::Incomplete`] or [`GuessResult::Invalid`] without
    /// touching the snapshot when the row cannot be scored, and
    /// [`GuessResult::Finished`] once the game is over.
    ///
    /// # Panics
    /// Panics if the game is in progress but has no active row, which the
    /// status transitions below rule out.
    pub fn submit_guess(&mut self) -> GuessResult {
        if self.snapshot.status().is_terminal() {
            return GuessResult::Finished;
        }

        let submitted = *self
            .snapshot
            .board()
            .active_row()
            .expect("game in progress without an active row");

        let Some(attempt) = submitted.attempt() else {
            return GuessResult::Incomplete;
        };

        let attempt_text = submitted.as_string();
        let is_target = attempt_text == self.target.text();
        if !is_target && !self.dictionary.contains(&attempt_text) {
            debug!(attempt = %attempt_text, "rejected: not in dictionary");
            return GuessResult::Invalid;
        }

        let statuses = resolve(&attempt, self.target.letters());
        let revealed = submitted.revealed_with(statuses);

        let next = self.snapshot.with_active_row(revealed);
        let keyboard = next.keyboard().merged(&attempt, &statuses);
        let next = next.with_keyboard(keyboard);

        let status = if is_target {
            RunningStatus::Won
        } else if next.board().active_row().is_none() {
            RunningStatus::Lost
        } else {
            RunningStatus::InProgress
        };

        debug!(attempt = %attempt_text, ?statuses, ?status, "guess submitted");
        self.snapshot = next.with_status(status);

        GuessResult::Submitted {
            submitted,
            revealed,
            status,
        }
    }
}
