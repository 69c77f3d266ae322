//! Dictionary of valid guesses
//!
//! Ships an embedded word list compiled into the binary, plus loading from a
//! file for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Ordered collection of valid words with constant-time membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, keeping the order of `words`
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, index }
    }

    /// The embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(loader::words_from_slice(WORDS))
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random target word, `None` if the dictionary is empty
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
