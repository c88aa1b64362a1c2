//! Benchmark command
//!
//! Times exhaustive expansion as the word count climbs the factorial curve.

use crate::core::{Word, expansions, factorial};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Timing for a single word count
pub struct BenchRow {
    pub word_count: usize,
    /// Orderings actually produced
    pub orderings: usize,
    /// Orderings the factorial predicts
    pub expected: usize,
    pub duration: Duration,
    pub orderings_per_second: f64,
}

/// Result of a full benchmark run
pub struct BenchResult {
    pub rows: Vec<BenchRow>,
    pub total_duration: Duration,
}

/// Time expansion for every word count from 1 up to `limit`
///
/// Each round draws fresh random three-letter words, times one full
/// enumeration, and records the produced ordering count next to the
/// factorial prediction. Times are wall clock for the enumeration alone;
/// word generation and progress drawing sit outside the measured window.
#[must_use]
pub fn run_bench(limit: usize) -> BenchResult {
    let pb = ProgressBar::new(limit as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rows = Vec::with_capacity(limit);
    let total_start = Instant::now();

    for word_count in 1..=limit {
        pb.set_message(format!("{word_count} words"));

        let words: Vec<Word> = (0..word_count).map(|_| random_word(3)).collect();

        let start = Instant::now();
        let expanded = expansions(&words);
        let duration = start.elapsed();

        let orderings = expanded.len();
        rows.push(BenchRow {
            word_count,
            orderings,
            expected: factorial(word_count),
            duration,
            orderings_per_second: orderings as f64 / duration.as_secs_f64(),
        });

        pb.inc(1);
    }

    pb.finish_and_clear();

    BenchResult {
        rows,
        total_duration: total_start.elapsed(),
    }
}

/// A random word of `length` lowercase letters
fn random_word(length: usize) -> Word {
    use rand::prelude::IndexedRandom;

    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    let mut rng = rand::rng();
    let text: String = (0..length)
        .map(|_| char::from(*ALPHABET.choose(&mut rng).expect("alphabet is not empty")))
        .collect();

    Word::new(text).expect("drawn from a-z")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_produces_one_row_per_word_count() {
        let result = run_bench(4);

        assert_eq!(result.rows.len(), 4);
        for (i, row) in result.rows.iter().enumerate() {
            assert_eq!(row.word_count, i + 1);
        }
    }

    #[test]
    fn bench_orderings_match_the_factorial() {
        let result = run_bench(5);

        for row in &result.rows {
            assert_eq!(row.orderings, row.expected);
            assert_eq!(row.expected, factorial(row.word_count));
        }
    }

    #[test]
    fn bench_of_zero_rounds_is_empty() {
        let result = run_bench(0);
        assert!(result.rows.is_empty());
    }

    #[test]
    fn random_words_are_well_formed() {
        for _ in 0..50 {
            let word = random_word(3);
            assert_eq!(word.len(), 3);
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
