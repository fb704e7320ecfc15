//! Runtime implementation of a language profile
//!
//! This module bridges the TOML configuration and the hot-path
//! [`CharacterClassifier`] interface.

use crate::boundary::BoundarySet;
use crate::error::{AnalysisError, Result};
use crate::language::{
    char_table::CharTable, config::LanguageConfig, interface::CharacterClassifier,
};

/// Classifier built from a language profile
#[derive(Debug, Clone)]
pub struct ConfigurableClassifier {
    code: String,
    name: String,

    /// Runtime tables
    extra_letters: CharTable,
    vowels: CharTable,

    word_boundaries: BoundarySet,
    sentence_boundaries: BoundarySet,
}

impl ConfigurableClassifier {
    /// Create from configuration
    pub(crate) fn from_config(config: &LanguageConfig) -> std::result::Result<Self, String> {
        config.validate()?;

        // Vowels are matched case-insensitively, so store both cases
        let vowels = config
            .vowels
            .chars
            .iter()
            .flat_map(|ch| ch.to_lowercase().chain(ch.to_uppercase()))
            .collect::<Vec<_>>();

        let extra_letters = CharTable::new(config.letters.extra.iter().copied());
        let vowels = CharTable::new(vowels);
        log::trace!(
            "profile {}: {} extra letters, {} vowel forms",
            config.metadata.code,
            extra_letters.len(),
            vowels.len()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            extra_letters,
            vowels,
            word_boundaries: BoundarySet::from(config.boundaries.word.clone()),
            sentence_boundaries: BoundarySet::from(config.boundaries.sentence.clone()),
        })
    }

    /// Parse and validate a profile from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str).map_err(|e| {
            AnalysisError::Config(format!("Failed to parse language profile: {e}"))
        })?;
        Self::from_config(&config).map_err(AnalysisError::Config)
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default word boundaries of this language
    pub fn word_boundaries(&self) -> &BoundarySet {
        &self.word_boundaries
    }

    /// Default sentence boundaries of this language
    pub fn sentence_boundaries(&self) -> &BoundarySet {
        &self.sentence_boundaries
    }
}

impl CharacterClassifier for ConfigurableClassifier {
    #[inline]
    fn is_letter(&self, ch: char) -> bool {
        ch.is_alphabetic() || self.extra_letters.contains(ch)
    }

    #[inline]
    fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(ch)
    }

    fn code(&self) -> &str {
        &self.code
    }
}
