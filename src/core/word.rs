//! Accepted-word representation
//!
//! A Word is a validated non-empty string of lowercase ASCII letters. Words
//! of any length are allowed; the only alphabet is `a-z`.

use std::fmt;

/// A validated word: non-empty, lowercase ASCII letters only
///
/// Ordering is lexicographic on the underlying text, which is what the
/// word set and the expansion list sort by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"CAT"` and `"cat"` build
    /// the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use letterforge::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over the word's letters
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    /// Number of letters in the word
    ///
    /// Every letter is ASCII, so this is also the byte length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// A word is never empty; provided to pair with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("permutation").unwrap().len(), 11);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c4t").is_err()); // Number
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("cat!").is_err()); // Punctuation
        assert!(Word::new("café").is_err()); // Non-ASCII letter
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();
        let cab = Word::new("cab").unwrap();

        assert!(cat < dog);
        assert!(cab < cat);

        let mut words = vec![dog.clone(), cat.clone(), cab.clone()];
        words.sort();
        assert_eq!(words, vec![cab, cat, dog]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("cat").unwrap();
        let word3 = Word::new("CAT").unwrap();
        let word4 = Word::new("dog").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
