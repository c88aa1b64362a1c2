//! Formability check command
//!
//! Answers whether a pool of letters can spell a word, and what is missing
//! when it cannot.

use crate::core::{LetterPool, Word};

/// Result of checking a word against a letter pool
pub struct CheckResult {
    pub word: String,
    pub formable: bool,
    pub pool_before: String,
    /// Pool left over after forming the word; `None` when unformable
    pub pool_after: Option<String>,
    /// Letters the pool lacks, with multiplicity
    pub missing: Vec<char>,
}

/// Check whether the letters in `letters` can spell `word`
///
/// # Errors
///
/// Returns an error if:
/// - No letters a-z can be extracted from `letters`
/// - The word is empty or holds anything besides letters
pub fn check_word(letters: &str, word: &str) -> Result<CheckResult, String> {
    let pool = LetterPool::from_raw(letters);
    if pool.is_empty() {
        return Err(format!("no letters a-z in '{letters}'"));
    }

    let word_obj = Word::new(word).map_err(|e| format!("invalid word '{word}': {e}"))?;

    let formable = pool.can_form(&word_obj);
    let pool_after = formable.then(|| pool.consume(&word_obj).to_string());

    Ok(CheckResult {
        word: word_obj.text().to_string(),
        formable,
        pool_before: pool.to_string(),
        pool_after,
        missing: pool.missing_for(&word_obj),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_formable_word() {
        let result = check_word("tacocat", "taco").unwrap();

        assert_eq!(result.word, "taco");
        assert!(result.formable);
        assert_eq!(result.pool_before, "aaccott");
        assert_eq!(result.pool_after.as_deref(), Some("act"));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn check_unformable_word_lists_missing_letters() {
        let result = check_word("ct", "cats").unwrap();

        assert!(!result.formable);
        assert_eq!(result.pool_after, None);
        assert_eq!(result.missing, vec!['a', 's']);
    }

    #[test]
    fn check_counts_multiplicity() {
        // One 'o' in the pool, two needed
        let result = check_word("dor", "door").unwrap();

        assert!(!result.formable);
        assert_eq!(result.missing, vec!['o']);
    }

    #[test]
    fn check_normalizes_case() {
        let result = check_word("TacoCat", "TACO").unwrap();

        assert!(result.formable);
        assert_eq!(result.word, "taco");
    }

    #[test]
    fn check_rejects_letterless_pool() {
        assert!(check_word("123 !?", "cat").is_err());
    }

    #[test]
    fn check_rejects_invalid_word() {
        assert!(check_word("abc", "").is_err());
        assert!(check_word("abc", "c4t").is_err());
    }
}
