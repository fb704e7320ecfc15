//! Co-occurrence of words within a sentence
//!
//! Pairs are directional: `(first, second)` means `first` came before
//! `second` in the sentence. Swapped pairs are different keys.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundarySet;
use crate::language::CharacterClassifier;
use crate::tokenizer::Segments;

/// Two words seen together, in the order they appeared
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordPair {
    /// The earlier word
    pub first: String,
    /// The later word
    pub second: String,
}

impl WordPair {
    /// Create a pair
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Pair to number of occurrences
pub type WordPairs = HashMap<WordPair, usize>;

/// Parameters of [`find_connected_words`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedWordsOptions {
    /// Pairs seen fewer times are dropped; below 1 nothing is reported
    pub min_occurrences: usize,
    /// Window size in words; below 2 nothing is reported
    pub range: usize,
}

impl Default for ConnectedWordsOptions {
    fn default() -> Self {
        Self {
            min_occurrences: 2,
            range: 2,
        }
    }
}

/// Count word pairs within `range` words of each other in the same sentence
///
/// Sentences and words are lower-cased. Counting runs over the whole text
/// first; pairs below `min_occurrences` are removed at the end.
pub fn find_connected_words<C: CharacterClassifier + ?Sized>(
    classifier: &C,
    text: &str,
    options: ConnectedWordsOptions,
    word_boundaries: &BoundarySet,
    sentence_boundaries: &BoundarySet,
) -> WordPairs {
    let mut pairs = WordPairs::new();

    if options.range < 2 || options.min_occurrences < 1 {
        return pairs;
    }

    for sentence in Segments::new(classifier, text, sentence_boundaries) {
        let sentence = sentence.to_lowercase();
        let words: Vec<&str> = Segments::new(classifier, &sentence, word_boundaries).collect();

        for distance in 1..options.range.min(words.len()) {
            for window in words.windows(distance + 1) {
                *pairs
                    .entry(WordPair::new(window[0], window[distance]))
                    .or_insert(0) += 1;
            }
        }
    }

    let total = pairs.len();
    pairs.retain(|_, count| *count >= options.min_occurrences);
    log::debug!(
        "connected words: kept {} of {} pairs (min {}, range {})",
        pairs.len(),
        total,
        options.min_occurrences,
        options.range
    );

    pairs
}
