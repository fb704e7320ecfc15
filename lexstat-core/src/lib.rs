//! Statistical analysis of natural-language text
//!
//! This crate tokenizes text and derives statistics from it: word counts and
//! frequency distributions, word and sentence lengths, word co-occurrence
//! and a German reading-ease score. Statistics are gathered in a single scan
//! and memoized per text and boundary configuration.
//!
//! # Architecture
//!
//! - **language**: character classification ([`CharacterClassifier`]) and
//!   the embedded TOML language profiles
//! - **tokenizer** / **stats**: the two single-pass scanners
//! - **distribution**, **cooccurrence**, **readability**: analyses built on
//!   top of the scanners
//! - **cleanup**, **search**, **input**: collaborators preparing the text
//!
//! # Example
//!
//! ```rust
//! use lexstat_core::{ReadabilityScore, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new().unwrap();
//!
//! let text = "Das ist ein Test. Er ist kurz.";
//! assert_eq!(analyzer.count_total_words(text), 7);
//! assert_eq!(analyzer.tokenize(text, true)[0], "das");
//! assert_eq!(analyzer.readability_score(text).unwrap(), ReadabilityScore::VeryEasy);
//! ```

pub mod analyzer;
pub mod boundary;
pub mod cleanup;
pub mod config;
pub mod cooccurrence;
pub mod distribution;
pub mod error;
pub mod input;
pub mod language;
pub mod readability;
pub mod search;
pub mod stats;
pub mod tokenizer;

use std::sync::OnceLock;

pub use analyzer::TextAnalyzer;
pub use boundary::{BoundarySet, DEFAULT_SENTENCE_BOUNDARIES, DEFAULT_WORD_BOUNDARIES};
pub use cleanup::{clean_up_text, CleanupMode};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use cooccurrence::{ConnectedWordsOptions, WordPair, WordPairs};
pub use distribution::{most_frequent, WordDistribution};
pub use error::{AnalysisError, Result};
pub use input::read_file;
pub use language::{CharacterClassifier, ConfigurableClassifier, UnicodeClassifier};
pub use readability::ReadabilityScore;
pub use search::{find_pattern_str, find_patterns, SearchMatch};
pub use stats::{CacheMetrics, TextStatistics, WordLengthDistribution};

/// Process-wide analyzer behind the free functions
static DEFAULT_ANALYZER: OnceLock<TextAnalyzer> = OnceLock::new();

/// The shared analyzer with the default configuration
pub fn default_analyzer() -> &'static TextAnalyzer {
    DEFAULT_ANALYZER.get_or_init(TextAnalyzer::default)
}

// Convenience functions

/// Split `text` at the given boundaries
pub fn segment(text: &str, lowercase: bool, boundaries: &BoundarySet) -> Vec<String> {
    default_analyzer().segment(text, lowercase, boundaries)
}

/// Split `text` into words
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    default_analyzer().tokenize(text, lowercase)
}

/// Number of words in `text`
pub fn count_total_words(text: &str) -> usize {
    default_analyzer().count_total_words(text)
}

/// Statistics of `text` with explicit boundaries, memoized process-wide
pub fn compute_statistics(
    text: &str,
    word_boundaries: &BoundarySet,
    sentence_boundaries: &BoundarySet,
) -> TextStatistics {
    default_analyzer().statistics_with(text, word_boundaries, sentence_boundaries)
}

/// Frequency of every word in `text`
pub fn word_distribution(text: &str, lowercase: bool) -> WordDistribution {
    default_analyzer().word_distribution(text, lowercase)
}

/// Frequency of every word in `text` that is not a stop word
pub fn word_distribution_with_stop_words<S: AsRef<str>>(
    text: &str,
    stop_words: &[S],
    lowercase: bool,
) -> WordDistribution {
    default_analyzer().word_distribution_with_stop_words(text, stop_words, lowercase)
}

/// Frequency of every pre-tokenized word that is not a stop word
pub fn build_distribution<T: AsRef<str>, S: AsRef<str>>(
    tokens: &[T],
    stop_words: &[S],
) -> WordDistribution {
    distribution::build_distribution(tokens, stop_words)
}

/// Average number of letters per word
pub fn word_length(text: &str) -> Result<f64> {
    default_analyzer().word_length(text)
}

/// Average number of words per sentence
pub fn sentence_length_by_words(text: &str) -> Result<f64> {
    default_analyzer().sentence_length_by_words(text)
}

/// Average number of letters per sentence
pub fn sentence_length_by_letters(text: &str) -> Result<f64> {
    default_analyzer().sentence_length_by_letters(text)
}

/// Word length distribution with the default word boundaries
pub fn word_length_distribution(text: &str) -> WordLengthDistribution {
    default_analyzer().word_length_distribution(text)
}

/// Word pairs within `range` words of each other, seen at least
/// `min_occurrences` times
pub fn find_connected_words(text: &str, min_occurrences: usize, range: usize) -> WordPairs {
    default_analyzer().find_connected_words(text, min_occurrences, range)
}

/// Classified German reading-ease of `text`
pub fn readability_score(text: &str) -> Result<ReadabilityScore> {
    default_analyzer().readability_score(text)
}

/// Empty the process-wide statistics cache
pub fn clear_cache() {
    default_analyzer().clear_cache();
}
