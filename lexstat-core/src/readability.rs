//! German reading-ease score
//!
//! Amstad's adaptation of the Flesch reading-ease formula:
//! `180 - words/sentences - 58.5 * syllables/words`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::TextStatistics;

/// Qualitative readability, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadabilityScore {
    /// 90 and above: suitable for an 11-year-old student
    VeryEasy,
    /// 80 to 90
    Easy,
    /// 70 to 80
    MediumEasy,
    /// 60 to 70: suitable for students aged 13 to 15
    Medium,
    /// 50 to 60
    MediumHard,
    /// 30 to 50
    Hard,
    /// Below 30: suitable for academics
    VeryHard,
}

impl ReadabilityScore {
    /// Classify a raw reading-ease value (inclusive lower bounds)
    pub fn from_raw(raw: f64) -> Self {
        match raw {
            r if r >= 90.0 => ReadabilityScore::VeryEasy,
            r if r >= 80.0 => ReadabilityScore::Easy,
            r if r >= 70.0 => ReadabilityScore::MediumEasy,
            r if r >= 60.0 => ReadabilityScore::Medium,
            r if r >= 50.0 => ReadabilityScore::MediumHard,
            r if r >= 30.0 => ReadabilityScore::Hard,
            _ => ReadabilityScore::VeryHard,
        }
    }

    /// Variant name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadabilityScore::VeryEasy => "VeryEasy",
            ReadabilityScore::Easy => "Easy",
            ReadabilityScore::MediumEasy => "MediumEasy",
            ReadabilityScore::Medium => "Medium",
            ReadabilityScore::MediumHard => "MediumHard",
            ReadabilityScore::Hard => "Hard",
            ReadabilityScore::VeryHard => "VeryHard",
        }
    }
}

impl fmt::Display for ReadabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw German reading-ease value of precomputed statistics
///
/// Fails when the statistics contain no words or no sentences.
pub fn german_reading_ease(stats: &TextStatistics) -> Result<f64> {
    let words_per_sentence = stats.sentence_length_by_words()?;
    let syllables_per_word = stats.syllables_per_word()?;
    Ok(180.0 - words_per_sentence - 58.5 * syllables_per_word)
}

/// Classified German reading-ease of precomputed statistics
pub fn german_score(stats: &TextStatistics) -> Result<ReadabilityScore> {
    german_reading_ease(stats).map(ReadabilityScore::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_thresholds() {
        assert_eq!(ReadabilityScore::from_raw(114.0), ReadabilityScore::VeryEasy);
        assert_eq!(ReadabilityScore::from_raw(90.0), ReadabilityScore::VeryEasy);
        assert_eq!(ReadabilityScore::from_raw(89.99), ReadabilityScore::Easy);
        assert_eq!(ReadabilityScore::from_raw(80.0), ReadabilityScore::Easy);
        assert_eq!(ReadabilityScore::from_raw(70.0), ReadabilityScore::MediumEasy);
        assert_eq!(ReadabilityScore::from_raw(60.0), ReadabilityScore::Medium);
        assert_eq!(ReadabilityScore::from_raw(50.0), ReadabilityScore::MediumHard);
        assert_eq!(ReadabilityScore::from_raw(30.0), ReadabilityScore::Hard);
        assert_eq!(ReadabilityScore::from_raw(29.9), ReadabilityScore::VeryHard);
        assert_eq!(ReadabilityScore::from_raw(-40.0), ReadabilityScore::VeryHard);
    }

    #[test]
    fn test_formula() {
        let stats = TextStatistics {
            letters: 30,
            words: 10,
            sentences: 2,
            syllables: 20,
        };
        // 180 - 5 - 58.5 * 2
        assert_eq!(german_reading_ease(&stats).unwrap(), 58.0);
        assert_eq!(german_score(&stats).unwrap(), ReadabilityScore::MediumHard);
    }

    #[test]
    fn test_undefined_without_words() {
        let err = german_score(&TextStatistics::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionUndefined { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(ReadabilityScore::MediumEasy.to_string(), "MediumEasy");
        assert_eq!(ReadabilityScore::VeryHard.to_string(), "VeryHard");
    }

    #[test]
    fn test_ordering_follows_difficulty() {
        assert!(ReadabilityScore::VeryEasy < ReadabilityScore::Hard);
    }
}
