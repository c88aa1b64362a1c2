//! Pure state transitions for a building session
//!
//! A session bundles the letter pool, the accepted words, and the cached
//! permutation expansions. Transitions never mutate: [`Session::apply`]
//! takes an action and returns the successor state together with an event
//! describing what happened. Front ends keep whatever history they need by
//! cloning snapshots.

use std::fmt;

use crate::core::{LetterPool, Rejection, Word, WordSet, expansions};

/// A request to change the session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fold the letters found in raw text into the pool
    AddLetters(String),
    /// Submit raw text as a word for acceptance into the set
    SubmitWord(String),
    /// Remove the word at an index, releasing its letters
    RemoveWord(usize),
    /// Drop the pool letter at an index for good
    DiscardLetter(usize),
    /// Forget everything and start over
    Reset,
}

/// What an applied action did
///
/// Every variant that leaves the state unchanged says so; front ends can
/// surface the message and move on without inspecting the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Letters joined the pool
    LettersAdded { count: usize },
    /// The raw text held no letters; nothing changed
    NothingToAdd,
    /// The word entered the set and its letters left the pool
    WordAccepted { word: Word },
    /// The word was turned away; nothing changed
    WordRejected { word: Word, reason: Rejection },
    /// The raw text was not usable as a word; nothing changed
    InvalidWord { input: String },
    /// The word left the set and its letters rejoined the pool
    WordRemoved { word: Word },
    /// A single pool letter was dropped
    LetterDiscarded { letter: char },
    /// The session was cleared
    Reset,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LettersAdded { count: 1 } => write!(f, "added 1 letter to the pool"),
            Self::LettersAdded { count } => write!(f, "added {count} letters to the pool"),
            Self::NothingToAdd => write!(f, "no letters a-z in the input"),
            Self::WordAccepted { word } => write!(f, "accepted '{word}'"),
            Self::WordRejected { word, reason } => write!(f, "rejected '{word}': {reason}"),
            Self::InvalidWord { input } => write!(f, "not a usable word: '{input}'"),
            Self::WordRemoved { word } => write!(f, "removed '{word}', letters returned to the pool"),
            Self::LetterDiscarded { letter } => write!(f, "discarded '{letter}'"),
            Self::Reset => write!(f, "session cleared"),
        }
    }
}

/// Immutable snapshot of one building session
///
/// The cached expansions always equal [`expansions`] of the current word
/// set; [`Session::apply`] recomputes them exactly when the set changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pool: LetterPool,
    words: WordSet,
    expansions: Vec<String>,
}

impl Session {
    /// An empty session: no letters, no words, no expansions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action, producing the successor state and an event
    ///
    /// Rejected, invalid, or empty inputs produce a successor equal to the
    /// current state; the event says why. The cached expansions are
    /// recomputed only when the word set actually changed.
    ///
    /// # Panics
    /// Panics if a [`Action::RemoveWord`] or [`Action::DiscardLetter`]
    /// index is out of range. Front ends own index validity.
    ///
    /// # Examples
    /// ```
    /// use letterforge::session::{Action, Event, Session};
    ///
    /// let (session, event) = Session::new().apply(Action::AddLetters("tac".into()));
    /// assert_eq!(event, Event::LettersAdded { count: 3 });
    ///
    /// let (session, event) = session.apply(Action::SubmitWord("cat".into()));
    /// assert!(matches!(event, Event::WordAccepted { .. }));
    /// assert_eq!(session.expansions(), ["cat"]);
    /// ```
    #[must_use]
    pub fn apply(&self, action: Action) -> (Self, Event) {
        match action {
            Action::AddLetters(raw) => {
                let pool = self.pool.add_letters(&raw);
                let count = pool.len() - self.pool.len();
                if count == 0 {
                    return (self.clone(), Event::NothingToAdd);
                }
                let next = Self {
                    pool,
                    words: self.words.clone(),
                    expansions: self.expansions.clone(),
                };
                (next, Event::LettersAdded { count })
            }
            Action::SubmitWord(raw) => {
                let Ok(word) = Word::new(raw.as_str()) else {
                    return (self.clone(), Event::InvalidWord { input: raw });
                };
                match self.words.try_accept(&word, &self.pool) {
                    Ok((words, pool)) => {
                        let expansions = expansions(words.words());
                        let next = Self {
                            pool,
                            words,
                            expansions,
                        };
                        (next, Event::WordAccepted { word })
                    }
                    Err(reason) => (self.clone(), Event::WordRejected { word, reason }),
                }
            }
            Action::RemoveWord(index) => {
                let word = self
                    .words
                    .get(index)
                    .cloned()
                    .expect("word index in range");
                let (words, pool) = self.words.remove(index, &self.pool);
                let expansions = expansions(words.words());
                let next = Self {
                    pool,
                    words,
                    expansions,
                };
                (next, Event::WordRemoved { word })
            }
            Action::DiscardLetter(index) => {
                let letter = self.pool.letters()[index];
                let next = Self {
                    pool: self.pool.discard(index),
                    words: self.words.clone(),
                    expansions: self.expansions.clone(),
                };
                (next, Event::LetterDiscarded { letter })
            }
            Action::Reset => (Self::new(), Event::Reset),
        }
    }

    /// Whether raw text is a word the current pool could form
    ///
    /// Used for live feedback while the user is still typing; duplicates
    /// are not considered here, only letter supply.
    #[must_use]
    pub fn word_is_formable(&self, raw: &str) -> bool {
        Word::new(raw).is_ok_and(|word| self.pool.can_form(&word))
    }

    #[must_use]
    pub const fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub const fn words(&self) -> &WordSet {
        &self.words
    }

    /// All concatenations of the current words, sorted ascending
    #[must_use]
    pub fn expansions(&self) -> &[String] {
        &self.expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(letters: &str, words: &[&str]) -> Session {
        let mut session = Session::new();
        let (next, _) = session.apply(Action::AddLetters(letters.into()));
        session = next;
        for word in words {
            let (next, event) = session.apply(Action::SubmitWord((*word).into()));
            assert!(matches!(event, Event::WordAccepted { .. }), "{event}");
            session = next;
        }
        session
    }

    #[test]
    fn add_letters_reports_count_and_sorts_pool() {
        let (session, event) = Session::new().apply(Action::AddLetters("Hello, World!".into()));

        assert_eq!(event, Event::LettersAdded { count: 10 });
        assert_eq!(session.pool().to_string(), "dehllloorw");
    }

    #[test]
    fn add_letters_without_letters_is_a_noop() {
        let before = session_with("abc", &[]);
        let (after, event) = before.apply(Action::AddLetters("42 !?".into()));

        assert_eq!(event, Event::NothingToAdd);
        assert_eq!(after, before);
    }

    #[test]
    fn accepted_word_consumes_letters_and_updates_expansions() {
        let session = session_with("catdog", &[]);

        let (session, event) = session.apply(Action::SubmitWord("cat".into()));
        assert_eq!(
            event,
            Event::WordAccepted {
                word: Word::new("cat").unwrap()
            }
        );
        assert_eq!(session.pool().to_string(), "dgo");
        assert_eq!(session.expansions(), ["cat"]);

        let (session, _) = session.apply(Action::SubmitWord("dog".into()));
        assert_eq!(session.expansions(), ["catdog", "dogcat"]);
        assert!(session.pool().is_empty());
    }

    #[test]
    fn unformable_word_is_rejected_without_change() {
        let before = session_with("ab", &[]);
        let (after, event) = before.apply(Action::SubmitWord("abc".into()));

        assert_eq!(
            event,
            Event::WordRejected {
                word: Word::new("abc").unwrap(),
                reason: Rejection::Unformable,
            }
        );
        assert_eq!(after, before);
    }

    #[test]
    fn duplicate_word_is_rejected_even_with_letters_to_spare() {
        let before = session_with("catcat", &["cat"]);
        let (after, event) = before.apply(Action::SubmitWord("cat".into()));

        assert_eq!(
            event,
            Event::WordRejected {
                word: Word::new("cat").unwrap(),
                reason: Rejection::Duplicate,
            }
        );
        assert_eq!(after, before);
    }

    #[test]
    fn unusable_submission_is_a_noop() {
        let before = session_with("abc", &[]);

        let (after, event) = before.apply(Action::SubmitWord(String::new()));
        assert_eq!(
            event,
            Event::InvalidWord {
                input: String::new()
            }
        );
        assert_eq!(after, before);

        let (after, event) = before.apply(Action::SubmitWord("c4t".into()));
        assert_eq!(event, Event::InvalidWord { input: "c4t".into() });
        assert_eq!(after, before);
    }

    #[test]
    fn removing_a_word_returns_letters_and_recomputes_expansions() {
        let session = session_with("catdog", &["cat", "dog"]);

        // Words sort ascending, so index 0 is "cat"
        let (session, event) = session.apply(Action::RemoveWord(0));

        assert_eq!(
            event,
            Event::WordRemoved {
                word: Word::new("cat").unwrap()
            }
        );
        assert_eq!(session.pool().to_string(), "act");
        assert_eq!(session.expansions(), ["dog"]);
    }

    #[test]
    fn discarding_a_letter_shrinks_the_pool_only() {
        let session = session_with("abc", &[]);
        let (session, event) = session.apply(Action::DiscardLetter(1));

        assert_eq!(event, Event::LetterDiscarded { letter: 'b' });
        assert_eq!(session.pool().to_string(), "ac");
        assert!(session.words().is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let session = session_with("catdog", &["cat"]);
        let (session, event) = session.apply(Action::Reset);

        assert_eq!(event, Event::Reset);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn apply_never_mutates_the_receiver() {
        let before = session_with("catdog", &["cat"]);
        let snapshot = before.clone();

        let _ = before.apply(Action::AddLetters("xyz".into()));
        let _ = before.apply(Action::SubmitWord("dog".into()));
        let _ = before.apply(Action::RemoveWord(0));
        let _ = before.apply(Action::Reset);

        assert_eq!(before, snapshot);
    }

    #[test]
    fn cached_expansions_always_match_a_fresh_computation() {
        let session = session_with("tacocatdog", &["taco", "cat"]);
        assert_eq!(session.expansions(), expansions(session.words().words()));

        let (session, _) = session.apply(Action::SubmitWord("dog".into()));
        assert_eq!(session.expansions(), expansions(session.words().words()));

        let (session, _) = session.apply(Action::RemoveWord(0));
        assert_eq!(session.expansions(), expansions(session.words().words()));
    }

    #[test]
    fn word_formability_probe() {
        let session = session_with("tac", &[]);

        assert!(session.word_is_formable("cat"));
        assert!(session.word_is_formable("at"));
        assert!(!session.word_is_formable("cats"));
        assert!(!session.word_is_formable(""));
        assert!(!session.word_is_formable("c4t"));
    }

    #[test]
    #[should_panic(expected = "word index in range")]
    fn removing_out_of_range_word_panics() {
        let session = session_with("abc", &[]);
        let _ = session.apply(Action::RemoveWord(0));
    }

    #[test]
    fn events_read_well() {
        let event = Event::WordRejected {
            word: Word::new("cat").unwrap(),
            reason: Rejection::Duplicate,
        };
        assert_eq!(
            event.to_string(),
            "rejected 'cat': word is already in the set"
        );

        assert_eq!(
            Event::LettersAdded { count: 1 }.to_string(),
            "added 1 letter to the pool"
        );
    }
}
