//! Full-permutation enumeration of the accepted words
//!
//! Produces every ordering of a word collection and the concatenation each
//! ordering spells. Enumeration is exhaustive: n words mean n! orderings,
//! and nothing is capped, sampled, or truncated. The tool is meant for
//! small word counts; the factorial bill for large ones belongs to the
//! caller.

use super::Word;

/// Lazy generator of all orderings of the indices `0..len`
///
/// Yields each ordering as an index vector, in lexicographic index order,
/// starting from the identity. The generator is finite and single-pass;
/// construct a new one to enumerate again. A length of zero yields nothing.
///
/// # Algorithm
/// Classic in-place lexicographic successor: find the longest
/// non-increasing suffix, swap its pivot with the rightmost larger
/// element, reverse the suffix. No recursion, no allocation beyond the
/// yielded vectors.
///
/// # Examples
/// ```
/// use letterforge::core::Permutations;
///
/// let orderings: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(orderings.len(), 6);
/// assert_eq!(orderings[0], vec![0, 1, 2]);
/// assert_eq!(orderings[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    fresh: bool,
    exhausted: bool,
}

impl Permutations {
    /// Create a generator over all orderings of `0..len`
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            fresh: true,
            exhausted: len == 0,
        }
    }

    /// Advance to the next lexicographic ordering
    ///
    /// Returns false when the current ordering is the last one.
    fn advance(&mut self) -> bool {
        // Pivot: the last position whose successor is larger. Everything
        // after it is non-increasing and cannot grow any further.
        let Some(pivot) = self.indices.windows(2).rposition(|w| w[0] < w[1]) else {
            return false;
        };

        // Rightmost element larger than the pivot value; the suffix is
        // non-increasing, so this is the smallest viable swap partner.
        let partner = self
            .indices
            .iter()
            .rposition(|&value| value > self.indices[pivot])
            .expect("suffix holds a larger element");

        self.indices.swap(pivot, partner);
        self.indices[pivot + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.fresh {
            self.fresh = false;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }

        Some(self.indices.clone())
    }
}

/// Every concatenation the word collection can spell, sorted
///
/// Enumerates all n! full-length orderings of `words` (no partial
/// selections, no reuse of a position within one ordering), joins each
/// ordering into a single string, and returns the collection sorted
/// lexicographically ascending. An empty input returns an empty vector.
///
/// Words are positionally distinct: equal strings at different positions
/// produce duplicate concatenations, and the duplicates are kept.
///
/// For a fixed multiset of word strings the output is fully determined
/// regardless of input order, since every ordering is enumerated and the
/// final sort normalizes presentation.
///
/// # Examples
/// ```
/// use letterforge::core::{Word, expansions};
///
/// let words = vec![Word::new("dog").unwrap(), Word::new("cat").unwrap()];
/// assert_eq!(expansions(&words), vec!["catdog", "dogcat"]);
///
/// assert!(expansions(&[]).is_empty());
/// ```
#[must_use]
pub fn expansions(words: &[Word]) -> Vec<String> {
    if words.is_empty() {
        return Vec::new();
    }

    let joined_len: usize = words.iter().map(Word::len).sum();

    let mut result: Vec<String> = Permutations::new(words.len())
        .map(|ordering| {
            let mut joined = String::with_capacity(joined_len);
            for index in ordering {
                joined.push_str(words[index].text());
            }
            joined
        })
        .collect();

    result.sort_unstable();
    result
}

/// n!, saturating at `usize::MAX`
///
/// Used to report expected ordering counts; saturation keeps display code
/// safe for word counts far beyond anything enumerable.
#[must_use]
pub fn factorial(n: usize) -> usize {
    (1..=n)
        .try_fold(1_usize, |acc, k| acc.checked_mul(k))
        .unwrap_or(usize::MAX)
}
