//! One-off guess check
//!
//! Scores a guess against a target without playing a game.

use crate::core::{Row, Word, WordError, resolve};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub row: Row,
}

impl CheckResult {
    /// Whether the guess is the target
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guess == self.target
    }
}

/// Resolve `guess` against `target`
///
/// Both words are normalized through [`Word::new`]; dictionary membership is
/// not checked.
///
/// # Errors
///
/// Returns `WordError` if either input is not a five-letter word.
///
/// # Examples
/// ```
/// use wordle_game::commands::check_guess;
/// use wordle_game::output::formatters::row_to_emoji;
///
/// let result = check_guess("pappy", "apple").unwrap();
/// assert_eq!(row_to_emoji(&result.row), "🟨🟨🟩⬛⬛");
/// ```
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    let statuses = resolve(guess.letters(), target.letters());
    let row = guess
        .letters()
        .iter()
        .copied()
        .collect::<Row>()
        .revealed_with(statuses);

    Ok(CheckResult { guess, target, row })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Matched, Present};

    #[test]
    fn check_normalizes_case() {
        let result = check_guess("apple", "APPLE").unwrap();
        assert!(result.is_solved());
        assert!(result.row.is_revealed());
        assert!(result.row.tiles().iter().all(|t| t.status == Matched));
    }

    #[test]
    fn check_reports_duplicates() {
        let result = check_guess("PAPPY", "APPLE").unwrap();
        let statuses: Vec<_> = result.row.tiles().iter().map(|t| t.status).collect();
        assert_eq!(statuses, [Present, Present, Matched, Absent, Absent]);
        assert!(!result.is_solved());
    }

    #[test]
    fn check_rejects_bad_words() {
        assert!(matches!(
            check_guess("app", "APPLE"),
            Err(WordError::InvalidLength(3))
        ));
        assert!(check_guess("APPLE", "4PPLE").is_err());
    }
}
