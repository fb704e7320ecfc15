//! The text analyzer
//!
//! [`TextAnalyzer`] ties a classifier, the default boundary sets and a
//! statistics cache together. Every operation of the crate is available as a
//! method; the free functions at the crate root use a process-wide instance.

use std::sync::Arc;

use crate::boundary::BoundarySet;
use crate::config::AnalyzerConfig;
use crate::cooccurrence::{self, ConnectedWordsOptions, WordPairs};
use crate::distribution::{self, WordDistribution};
use crate::error::Result;
use crate::language::{get_classifier, CharacterClassifier};
use crate::readability::{self, ReadabilityScore};
use crate::stats::{self, CacheKey, CacheMetrics, StatsCache, TextStatistics, WordLengthDistribution};
use crate::tokenizer;

/// Entry point for text statistics
///
/// All methods take `&self`; an analyzer can be shared between threads.
pub struct TextAnalyzer {
    classifier: Arc<dyn CharacterClassifier>,
    word_boundaries: BoundarySet,
    sentence_boundaries: BoundarySet,
    cache: StatsCache,
}

impl TextAnalyzer {
    /// Create an analyzer with the default configuration (German profile)
    pub fn new() -> Result<Self> {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer for a specific language profile
    pub fn with_language(language: &str) -> Result<Self> {
        let config = AnalyzerConfig::builder().language(language).build()?;
        Self::with_config(config)
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self> {
        let profile = get_classifier(&config.language)?;

        let word_boundaries = config
            .word_boundaries
            .unwrap_or_else(|| profile.word_boundaries().clone());
        let sentence_boundaries = config
            .sentence_boundaries
            .unwrap_or_else(|| profile.sentence_boundaries().clone());

        Ok(Self {
            classifier: profile,
            word_boundaries,
            sentence_boundaries,
            cache: StatsCache::new(config.cache_capacity),
        })
    }

    /// Create an analyzer around a custom classification strategy
    ///
    /// Uses the default word and sentence boundary presets.
    pub fn with_classifier(classifier: Arc<dyn CharacterClassifier>) -> Self {
        Self {
            classifier,
            word_boundaries: BoundarySet::word(),
            sentence_boundaries: BoundarySet::sentence(),
            cache: StatsCache::default(),
        }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &dyn CharacterClassifier {
        self.classifier.as_ref()
    }

    /// Default word boundaries
    pub fn word_boundaries(&self) -> &BoundarySet {
        &self.word_boundaries
    }

    /// Default sentence boundaries
    pub fn sentence_boundaries(&self) -> &BoundarySet {
        &self.sentence_boundaries
    }

    // ----- Tokenization -----

    /// Split `text` at the given boundaries
    pub fn segment(&self, text: &str, lowercase: bool, boundaries: &BoundarySet) -> Vec<String> {
        tokenizer::segment(self.classifier.as_ref(), text, lowercase, boundaries)
    }

    /// Split `text` into words
    pub fn tokenize(&self, text: &str, lowercase: bool) -> Vec<String> {
        self.segment(text, lowercase, &self.word_boundaries)
    }

    /// Split `text` into sentences
    pub fn sentences(&self, text: &str, lowercase: bool) -> Vec<String> {
        self.segment(text, lowercase, &self.sentence_boundaries)
    }

    // ----- Statistics -----

    /// Statistics of `text` with the default boundaries
    pub fn statistics(&self, text: &str) -> TextStatistics {
        self.statistics_with(text, &self.word_boundaries, &self.sentence_boundaries)
    }

    /// Statistics of `text` with explicit boundaries, memoized
    pub fn statistics_with(
        &self,
        text: &str,
        word_boundaries: &BoundarySet,
        sentence_boundaries: &BoundarySet,
    ) -> TextStatistics {
        let key = CacheKey::new(text, word_boundaries, sentence_boundaries);
        self.cache.get_or_compute(key, || {
            stats::accumulate(
                self.classifier.as_ref(),
                text,
                word_boundaries,
                sentence_boundaries,
            )
        })
    }

    /// Number of words in `text`
    pub fn count_total_words(&self, text: &str) -> usize {
        self.statistics(text).words
    }

    /// Average number of letters per word
    pub fn word_length(&self, text: &str) -> Result<f64> {
        self.statistics(text).word_length()
    }

    /// Average number of words per sentence
    pub fn sentence_length_by_words(&self, text: &str) -> Result<f64> {
        self.statistics(text).sentence_length_by_words()
    }

    /// Average number of letters per sentence
    pub fn sentence_length_by_letters(&self, text: &str) -> Result<f64> {
        self.statistics(text).sentence_length_by_letters()
    }

    /// Word length distribution with the default word boundaries
    pub fn word_length_distribution(&self, text: &str) -> WordLengthDistribution {
        self.word_length_distribution_with(text, &self.word_boundaries)
    }

    /// Word length distribution with explicit word boundaries
    pub fn word_length_distribution_with(
        &self,
        text: &str,
        word_boundaries: &BoundarySet,
    ) -> WordLengthDistribution {
        stats::word_length_distribution(self.classifier.as_ref(), text, word_boundaries)
    }

    // ----- Distributions -----

    /// Frequency of every word in `text`
    pub fn word_distribution(&self, text: &str, lowercase: bool) -> WordDistribution {
        self.word_distribution_with_stop_words(text, &[] as &[&str], lowercase)
    }

    /// Frequency of every word in `text` that is not a stop word
    pub fn word_distribution_with_stop_words<S: AsRef<str>>(
        &self,
        text: &str,
        stop_words: &[S],
        lowercase: bool,
    ) -> WordDistribution {
        let tokens = self.tokenize(text, lowercase);
        distribution::build_distribution(&tokens, stop_words)
    }

    /// Frequency of every pre-tokenized word that is not a stop word
    pub fn build_distribution<T: AsRef<str>, S: AsRef<str>>(
        &self,
        tokens: &[T],
        stop_words: &[S],
    ) -> WordDistribution {
        distribution::build_distribution(tokens, stop_words)
    }

    // ----- Co-occurrence -----

    /// Word pairs within `range` words of each other, seen at least
    /// `min_occurrences` times
    pub fn find_connected_words(&self, text: &str, min_occurrences: usize, range: usize) -> WordPairs {
        self.find_connected_words_with(
            text,
            ConnectedWordsOptions {
                min_occurrences,
                range,
            },
        )
    }

    /// Like [`Self::find_connected_words`] with an options struct
    pub fn find_connected_words_with(&self, text: &str, options: ConnectedWordsOptions) -> WordPairs {
        cooccurrence::find_connected_words(
            self.classifier.as_ref(),
            text,
            options,
            &self.word_boundaries,
            &self.sentence_boundaries,
        )
    }

    // ----- Readability -----

    /// Raw German reading-ease value of `text`
    pub fn german_reading_ease(&self, text: &str) -> Result<f64> {
        readability::german_reading_ease(&self.statistics(text))
    }

    /// Classified German reading-ease of `text`
    pub fn readability_score(&self, text: &str) -> Result<ReadabilityScore> {
        readability::german_score(&self.statistics(text))
    }

    // ----- Cache -----

    /// Drop every memoized statistics entry
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Hit/miss counters of the statistics cache
    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }
}

#[cfg(feature = "parallel")]
impl TextAnalyzer {
    /// Statistics of many texts, computed on the rayon pool
    ///
    /// Results are returned in input order.
    pub fn statistics_batch<T: AsRef<str> + Sync>(&self, texts: &[T]) -> Vec<TextStatistics> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.statistics(text.as_ref()))
            .collect()
    }

    /// Word distributions of many texts, computed on the rayon pool
    pub fn word_distribution_batch<T: AsRef<str> + Sync>(
        &self,
        texts: &[T],
        lowercase: bool,
    ) -> Vec<WordDistribution> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.word_distribution(text.as_ref(), lowercase))
            .collect()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new().expect("default analyzer creation should not fail")
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("language", &self.classifier.code())
            .field("word_boundaries", &self.word_boundaries)
            .field("sentence_boundaries", &self.sentence_boundaries)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::language::UnicodeClassifier;

    #[test]
    fn test_default_analyzer_is_german() {
        let analyzer = TextAnalyzer::new().unwrap();
        assert_eq!(analyzer.classifier().code(), "de");
        assert_eq!(analyzer.word_boundaries(), &BoundarySet::word());
        assert_eq!(analyzer.sentence_boundaries(), &BoundarySet::sentence());
    }

    #[test]
    fn test_unknown_language() {
        let err = TextAnalyzer::with_language("xx").unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_config_overrides_boundaries() {
        let config = AnalyzerConfig::builder()
            .word_boundaries(";")
            .sentence_boundaries(";")
            .build()
            .unwrap();
        let analyzer = TextAnalyzer::with_config(config).unwrap();
        assert_eq!(analyzer.tokenize("a b;c", false), vec!["a b", "c"]);
        assert_eq!(analyzer.count_total_words("a b;c"), 2);
    }

    #[test]
    fn test_statistics_are_memoized() {
        let analyzer = TextAnalyzer::new().unwrap();
        let first = analyzer.statistics("Hallo Welt.");
        let second = analyzer.statistics("Hallo Welt.");
        assert_eq!(first, second);
        let metrics = analyzer.cache_metrics();
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.entries, 1);
    }

    #[test]
    fn test_cache_distinguishes_boundaries() {
        let analyzer = TextAnalyzer::new().unwrap();
        let text = "eins;zwei drei";
        let default = analyzer.statistics(text);
        let semicolon = analyzer.statistics_with(
            text,
            &BoundarySet::from(";"),
            &BoundarySet::sentence(),
        );
        assert_eq!(default.words, 2);
        assert_eq!(semicolon.words, 2);
        assert_eq!(
            analyzer.statistics_with(text, &BoundarySet::from("x"), &BoundarySet::sentence()).words,
            1
        );
        assert_eq!(analyzer.cache_metrics().entries, 3);
    }

    #[test]
    fn test_clear_cache() {
        let analyzer = TextAnalyzer::new().unwrap();
        let before = analyzer.statistics("Ein kurzer Satz.");
        analyzer.clear_cache();
        assert_eq!(analyzer.cache_metrics().entries, 0);
        assert_eq!(analyzer.statistics("Ein kurzer Satz."), before);
    }

    #[test]
    fn test_custom_classifier() {
        struct DigitsAreLetters;

        impl CharacterClassifier for DigitsAreLetters {
            fn is_letter(&self, ch: char) -> bool {
                ch.is_ascii_digit()
            }

            fn is_vowel(&self, ch: char) -> bool {
                ch == '0'
            }
        }

        let analyzer = TextAnalyzer::with_classifier(Arc::new(DigitsAreLetters));
        assert_eq!(analyzer.tokenize("12 abc 305", false), vec!["12", "305"]);
        let stats = analyzer.statistics("12 305.");
        assert_eq!(stats.letters, 5);
        assert_eq!(stats.syllables, 1);
        assert_eq!(analyzer.classifier().code(), "custom");

        let unicode = TextAnalyzer::with_classifier(Arc::new(UnicodeClassifier));
        assert_eq!(unicode.tokenize("12 abc 305", false), vec!["abc"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_batches_keep_input_order() {
        let analyzer = TextAnalyzer::new().unwrap();
        let texts = vec!["Eins.", "Eins zwei.", "Eins zwei drei."];
        let stats = analyzer.statistics_batch(&texts);
        let words: Vec<usize> = stats.iter().map(|s| s.words).collect();
        assert_eq!(words, vec![1, 2, 3]);

        let distributions = analyzer.word_distribution_batch(&texts, true);
        assert_eq!(distributions[2]["drei"], 1);
        assert!(!distributions[0].contains_key("zwei"));
    }
}
