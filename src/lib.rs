//! Letterforge
//!
//! A letter-pool word builder: pour letters into a multiset pool, forge them
//! into words, and enumerate every permutation the words can spell when
//! concatenated.
//!
//! # Quick Start
//!
//! ```rust
//! use letterforge::core::{LetterPool, Word, WordSet, expansions};
//!
//! // Pour letters into the pool
//! let pool = LetterPool::from_raw("tacocat dog!");
//!
//! // Forge words, consuming their letters
//! let words = WordSet::new();
//! let (words, pool) = words.try_accept(&Word::new("taco").unwrap(), &pool).unwrap();
//! let (words, _pool) = words.try_accept(&Word::new("dog").unwrap(), &pool).unwrap();
//!
//! // Every concatenation the words can spell
//! assert_eq!(expansions(words.words()), vec!["dogtaco", "tacodog"]);
//! ```

// Core domain types
pub mod core;

// Session state and transitions
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
