//! Letter pool: the ordered multiset of available letters
//!
//! The pool owns every letter not currently locked into an accepted word.
//! It is kept sorted ascending after every operation; duplicate letters are
//! multiset multiplicity. All operations are pure: they take `&self` and
//! return the successor pool.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered multiset of lowercase letters
///
/// Invariant: the letter sequence is sorted ascending and contains only
/// `a-z` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Create an empty pool
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Create a pool from arbitrary raw text
    ///
    /// Equivalent to adding the text to an empty pool; see [`add_letters`].
    ///
    /// [`add_letters`]: Self::add_letters
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::new().add_letters(raw)
    }

    /// Add the letters found in arbitrary raw text
    ///
    /// Extracts only alphabetic characters (case-insensitively, normalized
    /// to lowercase `a-z`), appends them, and returns the new pool sorted
    /// ascending. Everything else in the input is silently discarded, so
    /// text with no letters returns a structurally unchanged pool.
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::LetterPool;
    ///
    /// let pool = LetterPool::new().add_letters("B, a... C1");
    /// assert_eq!(pool.to_string(), "abc");
    ///
    /// let same = pool.add_letters("42 !?");
    /// assert_eq!(same, pool);
    /// ```
    #[must_use]
    pub fn add_letters(&self, raw: &str) -> Self {
        let mut letters = self.letters.clone();
        letters.extend(
            raw.chars()
                .flat_map(char::to_lowercase)
                .filter(char::is_ascii_lowercase),
        );
        letters.sort_unstable();
        Self { letters }
    }

    /// Check whether `word` is constructible from the pool
    ///
    /// Walks the word's characters against a count map of the pool,
    /// decrementing as it goes, and fails on the first character with no
    /// remaining supply. The pool itself is not touched.
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::{LetterPool, Word};
    ///
    /// let pool = LetterPool::from_raw("aab");
    /// assert!(pool.can_form(&Word::new("ab").unwrap()));
    /// assert!(pool.can_form(&Word::new("aba").unwrap()));
    /// assert!(!pool.can_form(&Word::new("abb").unwrap()));
    /// ```
    #[must_use]
    pub fn can_form(&self, word: &Word) -> bool {
        let mut available = self.letter_counts();

        for ch in word.chars() {
            match available.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// The characters of `word` the pool cannot supply
    ///
    /// Companion diagnostic to [`can_form`]: one entry per deficient
    /// occurrence, in word order. Empty exactly when the word is formable.
    ///
    /// [`can_form`]: Self::can_form
    #[must_use]
    pub fn missing_for(&self, word: &Word) -> Vec<char> {
        let mut available = self.letter_counts();
        let mut missing = Vec::new();

        for ch in word.chars() {
            match available.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => missing.push(ch),
            }
        }
        missing
    }

    /// Remove one occurrence of each of `word`'s characters
    ///
    /// Which occurrence is removed is immaterial: the pool is a multiset,
    /// so the remainder is identical either way, and it stays sorted.
    /// Callers must have checked [`can_form`] first; a word the pool cannot
    /// form is a caller error (checked in debug builds).
    ///
    /// [`can_form`]: Self::can_form
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::{LetterPool, Word};
    ///
    /// let pool = LetterPool::from_raw("aab");
    /// let rest = pool.consume(&Word::new("ab").unwrap());
    /// assert_eq!(rest.to_string(), "a");
    /// ```
    #[must_use]
    pub fn consume(&self, word: &Word) -> Self {
        debug_assert!(self.can_form(word), "consume requires a formable word");

        let mut letters = self.letters.clone();
        for ch in word.chars() {
            if let Some(pos) = letters.iter().position(|&l| l == ch) {
                letters.remove(pos);
            }
        }
        Self { letters }
    }

    /// Return a removed word's letters to the pool
    ///
    /// The merge is a set union: the word's characters are appended, then
    /// the combined sequence is sorted and deduplicated. A letter already
    /// present in the pool, or repeated within the word, collapses to a
    /// single occurrence — releasing is therefore not the exact inverse of
    /// [`consume`], which preserves multiplicity.
    ///
    /// [`consume`]: Self::consume
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::{LetterPool, Word};
    ///
    /// let pool = LetterPool::from_raw("x");
    /// let merged = pool.release(&Word::new("dog").unwrap());
    /// assert_eq!(merged.to_string(), "dgox");
    /// ```
    #[must_use]
    pub fn release(&self, word: &Word) -> Self {
        let mut letters = self.letters.clone();
        letters.extend(word.chars());
        letters.sort_unstable();
        letters.dedup();
        Self { letters }
    }

    /// Throw away the single letter at `index`
    ///
    /// The letter is not returned anywhere; the rest of the pool keeps its
    /// sorted order.
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers must only pass indices observed
    /// from the current pool.
    #[must_use]
    pub fn discard(&self, index: usize) -> Self {
        let mut letters = self.letters.clone();
        letters.remove(index);
        Self { letters }
    }

    /// The pool's letters in ascending order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the pool (counting multiplicity)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the pool holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Count map of the pool's letters
    fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.letters {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
