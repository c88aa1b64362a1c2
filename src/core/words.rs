//! Accepted-word collection
//!
//! The word set holds every word the player has locked in, sorted ascending
//! with no duplicates. Accepting and removing words go through the set so
//! the letter pool is updated in the same step.

use super::{LetterPool, Word};
use std::fmt;

/// The sorted, duplicate-free collection of accepted words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<Word>,
}

/// Why a word submission was a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word is already in the set; checked before formability
    Duplicate,
    /// The pool cannot supply the word's letters
    Unformable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "word is already in the set"),
            Self::Unformable => write!(f, "letters are not available in the pool"),
        }
    }
}

impl std::error::Error for Rejection {}

impl WordSet {
    /// Create an empty word set
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Accept `word` if it is new and formable, consuming its letters
    ///
    /// On success returns the grown set (re-sorted ascending) together with
    /// the shrunken pool. A rejection is a no-op: the caller keeps its
    /// inputs untouched. Duplicate detection runs first, so a word already
    /// in the set is rejected as a duplicate even when the pool could form
    /// it again.
    ///
    /// # Errors
    /// - [`Rejection::Duplicate`] if the word is already present
    /// - [`Rejection::Unformable`] if the pool cannot supply its letters
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::{LetterPool, Word, WordSet};
    ///
    /// let pool = LetterPool::from_raw("aab");
    /// let set = WordSet::new();
    ///
    /// let (set, pool) = set.try_accept(&Word::new("ab").unwrap(), &pool).unwrap();
    /// assert_eq!(pool.to_string(), "a");
    /// assert_eq!(set.len(), 1);
    ///
    /// // Same word again: rejected, inputs stay as they were
    /// assert!(set.try_accept(&Word::new("ab").unwrap(), &pool).is_err());
    /// ```
    pub fn try_accept(
        &self,
        word: &Word,
        pool: &LetterPool,
    ) -> Result<(Self, LetterPool), Rejection> {
        if self.contains(word) {
            return Err(Rejection::Duplicate);
        }
        if !pool.can_form(word) {
            return Err(Rejection::Unformable);
        }

        let pool = pool.consume(word);
        let mut words = self.words.clone();
        words.push(word.clone());
        words.sort();

        Ok((Self { words }, pool))
    }

    /// Remove the word at `index`, returning its letters to the pool
    ///
    /// Removal preserves the relative order of the remaining words, so the
    /// set stays sorted. The removed word's letters are merged back via
    /// [`LetterPool::release`] (set union).
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers must only pass indices observed
    /// from the current set.
    #[must_use]
    pub fn remove(&self, index: usize, pool: &LetterPool) -> (Self, LetterPool) {
        let mut words = self.words.clone();
        let removed = words.remove(index);
        let pool = pool.release(&removed);

        (Self { words }, pool)
    }

    /// Whether `word` is already in the set
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// The accepted words in ascending order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word at `index`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words have been accepted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(set: &WordSet) -> Vec<&str> {
        set.words().iter().map(Word::text).collect()
    }

    #[test]
    fn new_set_is_empty() {
        let set = WordSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn accept_moves_letters_out_of_pool() {
        let pool = LetterPool::from_raw("aab");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("ab"), &pool).unwrap();

        assert_eq!(pool.to_string(), "a");
        assert_eq!(texts(&set), vec!["ab"]);
    }

    #[test]
    fn accept_keeps_words_sorted() {
        let pool = LetterPool::from_raw("catdog");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("dog"), &pool).unwrap();
        let (set, _pool) = set.try_accept(&word("cat"), &pool).unwrap();

        assert_eq!(texts(&set), vec!["cat", "dog"]);
    }

    #[test]
    fn accept_rejects_unformable_word() {
        let pool = LetterPool::from_raw("ab");
        let set = WordSet::new();

        let result = set.try_accept(&word("abc"), &pool);
        assert_eq!(result.unwrap_err(), Rejection::Unformable);

        // Inputs untouched
        assert_eq!(pool.to_string(), "ab");
        assert!(set.is_empty());
    }

    #[test]
    fn accept_rejects_duplicate_word() {
        let pool = LetterPool::from_raw("catcat");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("cat"), &pool).unwrap();
        assert_eq!(pool.to_string(), "act");

        // Letters to spare, but the word is already present
        let result = set.try_accept(&word("cat"), &pool);
        assert_eq!(result.unwrap_err(), Rejection::Duplicate);
        assert_eq!(texts(&set), vec!["cat"]);
    }

    #[test]
    fn duplicate_takes_precedence_over_formability() {
        let pool = LetterPool::from_raw("cat");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("cat"), &pool).unwrap();
        assert!(pool.is_empty());

        // Unformable AND duplicate: reported as duplicate
        let result = set.try_accept(&word("cat"), &pool);
        assert_eq!(result.unwrap_err(), Rejection::Duplicate);
    }

    #[test]
    fn no_duplicates_across_accept_sequence() {
        let mut pool = LetterPool::from_raw("catcatdogdog");
        let mut set = WordSet::new();

        for text in ["cat", "dog", "cat", "dog", "cat"] {
            if let Ok((next_set, next_pool)) = set.try_accept(&word(text), &pool) {
                set = next_set;
                pool = next_pool;
            }
        }

        assert_eq!(texts(&set), vec!["cat", "dog"]);
    }

    #[test]
    fn remove_returns_letters_via_set_union() {
        let pool = LetterPool::from_raw("catdogx");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("cat"), &pool).unwrap();
        let (set, pool) = set.try_accept(&word("dog"), &pool).unwrap();
        assert_eq!(pool.to_string(), "x");

        // "dog" sorts after "cat"
        let (set, pool) = set.remove(1, &pool);

        assert_eq!(texts(&set), vec!["cat"]);
        assert_eq!(pool.to_string(), "dgox");
    }

    #[test]
    fn remove_keeps_remaining_words_sorted() {
        let pool = LetterPool::from_raw("antbeecow");
        let set = WordSet::new();

        let (set, pool) = set.try_accept(&word("ant"), &pool).unwrap();
        let (set, pool) = set.try_accept(&word("bee"), &pool).unwrap();
        let (set, pool) = set.try_accept(&word("cow"), &pool).unwrap();

        let (set, _pool) = set.remove(1, &pool);
        assert_eq!(texts(&set), vec!["ant", "cow"]);
    }

    #[test]
    #[should_panic(expected = "index")]
    fn remove_out_of_range_panics() {
        let pool = LetterPool::new();
        let set = WordSet::new();
        let _ = set.remove(0, &pool);
    }

    #[test]
    fn contains_and_get() {
        let pool = LetterPool::from_raw("catdog");
        let set = WordSet::new();

        let (set, _pool) = set.try_accept(&word("cat"), &pool).unwrap();

        assert!(set.contains(&word("cat")));
        assert!(!set.contains(&word("dog")));
        assert_eq!(set.get(0).map(Word::text), Some("cat"));
        assert!(set.get(1).is_none());
    }
}
