//! Cumulative keyboard feedback
//!
//! Tracks the best-known classification of every letter guessed so far.
//! A matched letter is only ever in `matched`; merging is monotonic.

use super::Classification;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letters sorted by what the player has learned about them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardAggregate {
    matched: FxHashSet<char>,
    present: FxHashSet<char>,
    absent: FxHashSet<char>,
}

impl KeyboardAggregate {
    #[must_use]
    pub const fn matched(&self) -> &FxHashSet<char> {
        &self.matched
    }

    #[must_use]
    pub const fn present(&self) -> &FxHashSet<char> {
        &self.present
    }

    #[must_use]
    pub const fn absent(&self) -> &FxHashSet<char> {
        &self.absent
    }

    /// What is known about `letter`; `Unknown` if it was never guessed
    #[must_use]
    pub fn status_of(&self, letter: char) -> Classification {
        if self.matched.contains(&letter) {
            Classification::Matched
        } else if self.present.contains(&letter) {
            Classification::Present
        } else if self.absent.contains(&letter) {
            Classification::Absent
        } else {
            Classification::Unknown
        }
    }

    /// Fold one resolved guess into a new aggregate
    ///
    /// Each distinct letter contributes only its best classification in this
    /// guess. `Matched` evicts the letter from the other two sets; `Present`
    /// and `Absent` never override an earlier `Matched`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification::*, KeyboardAggregate};
    ///
    /// let keyboard = KeyboardAggregate::default().merged(
    ///     &['P', 'A', 'P', 'P', 'Y'],
    ///     &[Present, Present, Matched, Absent, Absent],
    /// );
    ///
    /// assert_eq!(keyboard.status_of('P'), Matched);
    /// assert_eq!(keyboard.status_of('A'), Present);
    /// assert_eq!(keyboard.status_of('Y'), Absent);
    /// ```
    #[must_use]
    pub fn merged(&self, letters: &[char], statuses: &[Classification]) -> Self {
        let mut best: FxHashMap<char, Classification> = FxHashMap::default();
        for (&letter, &status) in letters.iter().zip(statuses) {
            let entry = best.entry(letter).or_insert(status);
            if status.priority() > entry.priority() {
                *entry = status;
            }
        }

        let mut next = self.clone();
        for (letter, status) in best {
            match status {
                Classification::Matched => {
                    next.matched.insert(letter);
                    next.present.remove(&letter);
                    next.absent.remove(&letter);
                }
                Classification::Present if !next.matched.contains(&letter) => {
                    next.present.insert(letter);
                }
                Classification::Absent if !next.matched.contains(&letter) => {
                    next.absent.insert(letter);
                }
                _ => {}
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Absent, Matched, Present, Unknown};
    use crate::core::resolve;

    fn set(letters: &str) -> FxHashSet<char> {
        letters.chars().collect()
    }

    fn merge_guess(keyboard: &KeyboardAggregate, guess: &str, target: &str) -> KeyboardAggregate {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();
        keyboard.merged(&guess, &resolve(&guess, &target))
    }

    #[test]
    fn empty_aggregate_knows_nothing() {
        let keyboard = KeyboardAggregate::default();
        assert_eq!(keyboard.status_of('A'), Unknown);
        assert!(keyboard.matched().is_empty());
    }

    #[test]
    fn winning_guess_marks_all_letters_matched() {
        let keyboard = merge_guess(&KeyboardAggregate::default(), "APPLE", "APPLE");
        assert_eq!(keyboard.matched(), &set("APLE"));
        assert!(keyboard.present().is_empty());
        assert!(keyboard.absent().is_empty());
    }

    #[test]
    fn best_occurrence_decides_letter() {
        // P is present, matched and absent within PAPPY
        let keyboard = merge_guess(&KeyboardAggregate::default(), "PAPPY", "APPLE");
        assert_eq!(keyboard.matched(), &set("P"));
        assert_eq!(keyboard.present(), &set("A"));
        assert_eq!(keyboard.absent(), &set("Y"));
    }

    #[test]
    fn matched_upgrades_and_evicts() {
        let keyboard = merge_guess(&KeyboardAggregate::default(), "PEARS", "APPLE");
        assert_eq!(keyboard.status_of('P'), Present);

        let keyboard = merge_guess(&keyboard, "APPLE", "APPLE");
        assert_eq!(keyboard.status_of('P'), Matched);
        assert!(!keyboard.present().contains(&'P'));
        assert!(!keyboard.present().contains(&'A'));
    }

    #[test]
    fn matched_is_never_downgraded() {
        let keyboard = merge_guess(&KeyboardAggregate::default(), "APPLE", "APPLE");
        let keyboard = keyboard.merged(&['A', 'E'], &[Absent, Present]);
        assert_eq!(keyboard.status_of('A'), Matched);
        assert_eq!(keyboard.status_of('E'), Matched);
        assert!(keyboard.absent().is_empty());
        assert!(keyboard.present().is_empty());
    }

    #[test]
    fn merge_returns_new_value() {
        let before = KeyboardAggregate::default();
        let after = merge_guess(&before, "GHOST", "APPLE");
        assert_eq!(before, KeyboardAggregate::default());
        assert_eq!(after.absent(), &set("GHOST"));
    }

    #[test]
    fn cumulative_merge_over_a_full_game() {
        let keyboard = ["PEARS", "MANGO", "PAPPY", "HAPPY", "ZIPPY", "GHOST"]
            .iter()
            .fold(KeyboardAggregate::default(), |keyboard, guess| {
                merge_guess(&keyboard, guess, "APPLE")
            });

        assert_eq!(keyboard.matched(), &set("P"));
        assert_eq!(keyboard.present(), &set("AE"));
        assert_eq!(keyboard.absent(), &set("RSMNGOYHZIT"));
    }
}
