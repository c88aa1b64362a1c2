//! Expansion command
//!
//! Enumerates every concatenation a list of words can spell when the words
//! may appear in any order.

use crate::core::{Word, expansions, factorial};
use std::time::{Duration, Instant};

/// Result of a one-shot expansion
pub struct ExpandResult {
    /// The words as normalized (lowercased) input
    pub words: Vec<String>,
    /// Expected ordering count, n! for n words
    pub expected: usize,
    /// All concatenations, sorted ascending, duplicates kept
    pub expansions: Vec<String>,
    pub duration: Duration,
}

/// Enumerate every ordering of `raw_words` and the strings they spell
///
/// Unlike an interactive session, repeated words are welcome here: each
/// occupies its own position, and the duplicate concatenations they spell
/// are kept in the output.
///
/// # Errors
///
/// Returns an error if no words were given, or if any entry is empty or
/// holds anything besides letters.
pub fn expand_words(raw_words: &[String]) -> Result<ExpandResult, String> {
    if raw_words.is_empty() {
        return Err("no words given".to_string());
    }

    let mut words = Vec::with_capacity(raw_words.len());
    for raw in raw_words {
        let word = Word::new(raw.as_str()).map_err(|e| format!("invalid word '{raw}': {e}"))?;
        words.push(word);
    }

    let start = Instant::now();
    let expanded = expansions(&words);
    let duration = start.elapsed();

    Ok(ExpandResult {
        words: words.iter().map(|w| w.text().to_string()).collect(),
        expected: factorial(words.len()),
        expansions: expanded,
        duration,
    })
}
