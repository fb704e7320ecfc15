//! Configuration structures and validation
//!
//! This module defines the TOML schema for language profiles.

use serde::{Deserialize, Serialize};

/// Root language profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub letters: Letters,
    pub vowels: Vowels,
    pub boundaries: Boundaries,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Letters accepted on top of Unicode alphabetic characters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Letters {
    #[serde(default)]
    pub extra: Vec<char>,
}

/// Vowels for the syllable heuristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vowels {
    pub chars: Vec<char>,
}

/// Default boundary sets of the language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundaries {
    pub word: Vec<char>,
    pub sentence: Vec<char>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.vowels.chars.is_empty() {
            return Err("No vowel characters defined".to_string());
        }

        if self.boundaries.word.is_empty() {
            return Err("No word boundary characters defined".to_string());
        }

        if self.boundaries.sentence.is_empty() {
            return Err("No sentence boundary characters defined".to_string());
        }

        Ok(())
    }
}
