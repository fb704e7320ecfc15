//! Output formatting module

use std::path::Path;

use anyhow::Result;
use lexstat_core::{most_frequent, ReadabilityScore, TextAnalyzer};
use serde::{Deserialize, Serialize};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report per file
    #[default]
    Text,
    /// JSON array with one report object per file
    Json,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the report of one file
    fn format_report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Knobs of a report that do not come from the analyzer
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Words excluded from the frequency table
    pub stop_words: Vec<String>,
    /// Lower-case words before counting them
    pub lowercase: bool,
    /// Number of most frequent words to keep
    pub top: usize,
    /// Minimum occurrences of a reported word pair
    pub min_occurrences: usize,
    /// Co-occurrence window in words
    pub range: usize,
}

/// A word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// An ordered word pair and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCount {
    pub first: String,
    pub second: String,
    pub count: usize,
}

/// Statistics of one input file
///
/// Ratios are `None` when the text has no words or sentences to divide by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub letters: usize,
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    pub average_word_length: Option<f64>,
    pub sentence_length_words: Option<f64>,
    pub sentence_length_letters: Option<f64>,
    pub reading_ease: Option<f64>,
    pub readability: Option<ReadabilityScore>,
    pub top_words: Vec<WordCount>,
    pub connected_words: Vec<PairCount>,
}

impl FileReport {
    /// Analyze `text` and collect everything the formatters print
    pub fn build(analyzer: &TextAnalyzer, path: &Path, text: &str, options: &ReportOptions) -> Self {
        let stats = analyzer.statistics(text);

        // Stop words must match the case of the tokens they filter
        let stop_words: Vec<String> = if options.lowercase {
            options.stop_words.iter().map(|word| word.to_lowercase()).collect()
        } else {
            options.stop_words.clone()
        };
        let distribution =
            analyzer.word_distribution_with_stop_words(text, &stop_words, options.lowercase);
        let top_words = most_frequent(&distribution, options.top)
            .into_iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();

        let mut connected_words: Vec<PairCount> = analyzer
            .find_connected_words(text, options.min_occurrences, options.range)
            .into_iter()
            .map(|(pair, count)| PairCount {
                first: pair.first,
                second: pair.second,
                count,
            })
            .collect();
        connected_words.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first.cmp(&b.first))
                .then_with(|| a.second.cmp(&b.second))
        });

        let reading_ease = analyzer.german_reading_ease(text).ok();

        Self {
            path: path.display().to_string(),
            letters: stats.letters,
            words: stats.words,
            sentences: stats.sentences,
            syllables: stats.syllables,
            average_word_length: stats.word_length().ok(),
            sentence_length_words: stats.sentence_length_by_words().ok(),
            sentence_length_letters: stats.sentence_length_by_letters().ok(),
            reading_ease,
            readability: reading_ease.map(ReadabilityScore::from_raw),
            top_words,
            connected_words,
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'a, W: std::io::Write + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ReportOptions {
        ReportOptions {
            stop_words: vec!["ein".to_string()],
            lowercase: true,
            top: 2,
            min_occurrences: 2,
            range: 2,
        }
    }

    #[test]
    fn test_build_report() {
        let analyzer = TextAnalyzer::new().unwrap();
        let text = "Das ist ein Test weil noch einer nötig ist, ein letzter.";
        let report = FileReport::build(&analyzer, Path::new("a.txt"), text, &options());

        assert_eq!(report.path, "a.txt");
        assert_eq!(report.words, 11);
        assert_eq!(report.sentences, 1);
        assert_eq!(report.top_words[0], WordCount { word: "ist".into(), count: 2 });
        assert_eq!(report.top_words.len(), 2);
        assert_eq!(
            report.connected_words,
            vec![PairCount { first: "ist".into(), second: "ein".into(), count: 2 }]
        );
        assert!(report.readability.is_some());
    }

    #[test]
    fn test_stop_words_follow_lowercasing() {
        let analyzer = TextAnalyzer::new().unwrap();
        let mut options = options();
        options.stop_words = vec!["Der".to_string()];
        options.top = 10;

        let report = FileReport::build(&analyzer, Path::new("a.txt"), "Der Hund. Der Ball.", &options);
        assert!(report.top_words.iter().all(|entry| entry.word != "der"));
        assert_eq!(report.top_words.len(), 2);

        options.lowercase = false;
        let report = FileReport::build(&analyzer, Path::new("a.txt"), "Der Hund. der Ball.", &options);
        assert!(report.top_words.iter().all(|entry| entry.word != "Der"));
        assert_eq!(report.top_words[0], WordCount { word: "Ball".into(), count: 1 });
        assert!(report.top_words.iter().any(|entry| entry.word == "der"));
    }

    #[test]
    fn test_empty_text_has_no_ratios() {
        let analyzer = TextAnalyzer::new().unwrap();
        let report = FileReport::build(&analyzer, Path::new("empty.txt"), "", &options());

        assert_eq!(report.words, 0);
        assert_eq!(report.average_word_length, None);
        assert_eq!(report.sentence_length_words, None);
        assert_eq!(report.reading_ease, None);
        assert_eq!(report.readability, None);
        assert!(report.top_words.is_empty());
    }
}
