//! Aggregate text statistics
//!
//! [`accumulate`] counts letters, words, sentences and syllables in one
//! linear scan. Results are memoized by [`cache::StatsCache`]; the derived
//! ratios live on [`TextStatistics`] and fail explicitly when their divisor
//! is zero.

pub mod cache;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::boundary::BoundarySet;
use crate::error::{AnalysisError, Result};
use crate::language::CharacterClassifier;

pub use cache::{CacheKey, CacheMetrics, StatsCache, DEFAULT_CACHE_CAPACITY};

/// Word length (in letters) to number of words with that length
pub type WordLengthDistribution = BTreeMap<usize, usize>;

/// Counts gathered by one scan of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Characters classified as letters
    pub letters: usize,
    /// Closed words, including a trailing unterminated one
    pub words: usize,
    /// Closed sentences, including a trailing unterminated one
    pub sentences: usize,
    /// Vowel-run starts
    pub syllables: usize,
}

impl TextStatistics {
    /// Average number of letters per word
    pub fn word_length(&self) -> Result<f64> {
        ratio(self.letters, self.words, "average word length", "words")
    }

    /// Average number of words per sentence
    pub fn sentence_length_by_words(&self) -> Result<f64> {
        ratio(
            self.words,
            self.sentences,
            "average sentence length in words",
            "sentences",
        )
    }

    /// Average number of letters per sentence
    pub fn sentence_length_by_letters(&self) -> Result<f64> {
        ratio(
            self.letters,
            self.sentences,
            "average sentence length in letters",
            "sentences",
        )
    }

    /// Average number of syllables per word
    pub fn syllables_per_word(&self) -> Result<f64> {
        ratio(self.syllables, self.words, "syllables per word", "words")
    }
}

fn ratio(
    dividend: usize,
    divisor: usize,
    metric: &'static str,
    divisor_name: &'static str,
) -> Result<f64> {
    if divisor == 0 {
        return Err(AnalysisError::DivisionUndefined {
            metric,
            divisor: divisor_name,
        });
    }
    Ok(dividend as f64 / divisor as f64)
}

/// Scan `text` once and count letters, words, sentences and syllables
///
/// A character closes a word only if a word is open and the character is in
/// `word_boundaries`; the same character also closes a sentence when it is in
/// `sentence_boundaries`. An unterminated trailing word counts as one word and
/// one sentence.
pub fn accumulate<C: CharacterClassifier + ?Sized>(
    classifier: &C,
    text: &str,
    word_boundaries: &BoundarySet,
    sentence_boundaries: &BoundarySet,
) -> TextStatistics {
    let mut stats = TextStatistics::default();
    let mut in_word = false;
    let mut last_was_vowel = false;

    for ch in text.chars() {
        if classifier.is_letter(ch) {
            stats.letters += 1;
            let is_vowel = classifier.is_vowel(ch);
            if is_vowel && !last_was_vowel {
                stats.syllables += 1;
            }
            last_was_vowel = is_vowel;
            in_word = true;
        } else {
            last_was_vowel = false;
            if in_word && word_boundaries.contains(ch) {
                stats.words += 1;
                if sentence_boundaries.contains(ch) {
                    stats.sentences += 1;
                }
                in_word = false;
            }
        }
    }

    if in_word {
        stats.words += 1;
        stats.sentences += 1;
    }

    stats
}

/// Count how many words of each letter length occur in `text`
///
/// Only letters add to a word's length; other non-boundary characters are
/// skipped without closing the word.
pub fn word_length_distribution<C: CharacterClassifier + ?Sized>(
    classifier: &C,
    text: &str,
    word_boundaries: &BoundarySet,
) -> WordLengthDistribution {
    let mut distribution = WordLengthDistribution::new();
    let mut length = 0usize;

    for ch in text.chars() {
        if classifier.is_letter(ch) {
            length += 1;
        } else if length > 0 && word_boundaries.contains(ch) {
            *distribution.entry(length).or_insert(0) += 1;
            length = 0;
        }
    }

    if length > 0 {
        *distribution.entry(length).or_insert(0) += 1;
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::UnicodeClassifier;

    fn stats(text: &str) -> TextStatistics {
        accumulate(
            &UnicodeClassifier,
            text,
            &BoundarySet::word(),
            &BoundarySet::sentence(),
        )
    }

    #[test]
    fn test_counts() {
        let s = stats("Das ist ein mit dir gut.");
        assert_eq!(s.letters, 18);
        assert_eq!(s.words, 6);
        assert_eq!(s.sentences, 1);
        assert_eq!(s.syllables, 6);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(stats(""), TextStatistics::default());
        assert_eq!(stats(" ... !? "), TextStatistics::default());
    }

    #[test]
    fn test_trailing_word_flush() {
        let s = stats("Das ist ein");
        assert_eq!(s.words, 3);
        assert_eq!(s.sentences, 1);
    }

    #[test]
    fn test_sentences_never_exceed_words() {
        let s = stats("Hallo!!! Welt??? ...");
        assert_eq!(s.words, 2);
        assert_eq!(s.sentences, 2);
    }

    #[test]
    fn test_syllables_count_vowel_runs() {
        // ei, e -> 2; Au, o -> 2; each word starts a fresh run
        assert_eq!(stats("einer").syllables, 2);
        assert_eq!(stats("Auto").syllables, 2);
        assert_eq!(stats("a e").syllables, 2);
        assert_eq!(stats("Straße").syllables, 2);
    }

    #[test]
    fn test_ratios() {
        let s = stats("Das ist. ein mit. dir gut.");
        assert_eq!(s.word_length().unwrap(), 3.0);
        assert_eq!(s.sentence_length_by_words().unwrap(), 2.0);
        assert_eq!(s.sentence_length_by_letters().unwrap(), 6.0);
    }

    #[test]
    fn test_ratios_fail_on_zero_divisor() {
        let s = stats("");
        assert!(matches!(
            s.word_length(),
            Err(AnalysisError::DivisionUndefined { divisor: "words", .. })
        ));
        assert!(matches!(
            s.sentence_length_by_words(),
            Err(AnalysisError::DivisionUndefined { divisor: "sentences", .. })
        ));
        assert!(s.sentence_length_by_letters().is_err());
        assert!(s.syllables_per_word().is_err());
    }

    #[test]
    fn test_custom_boundaries() {
        let s = accumulate(
            &UnicodeClassifier,
            "eins;zwei;drei",
            &BoundarySet::from(";"),
            &BoundarySet::from(";"),
        );
        assert_eq!(s.words, 3);
        assert_eq!(s.sentences, 3);
    }

    #[test]
    fn test_word_length_distribution() {
        let dist = word_length_distribution(
            &UnicodeClassifier,
            "Das ist ein Test weil noch einer nötig ist.",
            &BoundarySet::word(),
        );
        assert_eq!(dist.get(&2), None);
        assert_eq!(dist[&3], 4);
        assert_eq!(dist[&4], 3);
        assert_eq!(dist[&5], 2);
    }

    #[test]
    fn test_word_length_distribution_skips_non_letters() {
        let dist =
            word_length_distribution(&UnicodeClassifier, "ab12cd ef", &BoundarySet::word());
        assert_eq!(dist[&4], 1);
        assert_eq!(dist[&2], 1);
    }
}
