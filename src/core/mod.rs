//! Core domain types for the letter-pool engine
//!
//! This module contains the fundamental domain types, free of any I/O or
//! terminal concerns. All types here are pure, testable, and have clear
//! mathematical properties: every operation returns a new value and never
//! mutates its inputs.

mod letters;
mod permute;
mod word;
mod words;

pub use letters::LetterPool;
pub use permute::{Permutations, expansions, factorial};
pub use word::{Word, WordError};
pub use words::{Rejection, WordSet};
