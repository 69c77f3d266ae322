//! Per-letter feedback and the match resolver
//!
//! Each letter of a guess is classified as:
//! - Matched (right letter, right position)
//! - Present (letter is in the target, wrong position)
//! - Absent (no unaccounted-for copy of the letter is left in the target)
//!
//! `Unknown` is the state of a tile that has not been evaluated yet and never
//! comes out of [`resolve`].

use rustc_hash::FxHashMap;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    #[default]
    Unknown,
    Matched,
    Present,
    Absent,
}

impl Classification {
    /// Ranking used when several occurrences of a letter disagree
    ///
    /// `Matched > Present > Absent > Unknown`
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Matched => 3,
        }
    }
}

/// Classify each letter of `guess` against `target`
///
/// Duplicate letters are handled in two passes:
/// 1. Exact position matches are marked first; every other target letter goes
///    into a pool of leftovers.
/// 2. Remaining guess letters are scanned left to right, each one consuming a
///    copy from the pool if available (present) or not (absent).
///
/// So when the guess repeats a letter more often than the target has unmatched
/// copies, the leftmost occurrences win.
///
/// # Panics
/// Panics if either input is not exactly five letters long.
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification::*, resolve};
///
/// let guess: Vec<char> = "PAPPY".chars().collect();
/// let target: Vec<char> = "APPLE".chars().collect();
///
/// assert_eq!(
///     resolve(&guess, &target),
///     [Present, Present, Matched, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn resolve(guess: &[char], target: &[char]) -> [Classification; 5] {
    assert!(
        guess.len() == 5 && target.len() == 5,
        "guess and target must both be 5 letters (got {} and {})",
        guess.len(),
        target.len()
    );

    let mut result = [Classification::Unknown; 5];
    let mut unresolved: Vec<usize> = Vec::with_capacity(5);
    let mut leftover: FxHashMap<char, u8> = FxHashMap::default();

    // First pass: exact positions
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = Classification::Matched;
        } else {
            unresolved.push(i);
            *leftover.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: presence, consuming leftovers
    for i in unresolved {
        result[i] = match leftover.get_mut(&guess[i]) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Classification::Present
            }
            _ => Classification::Absent,
        };
    }

    result
}
