//! Analyzer configuration

use serde::{Deserialize, Serialize};

use crate::boundary::BoundarySet;
use crate::error::{AnalysisError, Result};
use crate::language::DEFAULT_LANGUAGE;
use crate::stats::DEFAULT_CACHE_CAPACITY;

/// Configuration of a [`crate::TextAnalyzer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language profile code or name
    pub language: String,
    /// Maximum number of memoized statistics (0 disables the cache)
    pub cache_capacity: usize,
    /// Word boundaries overriding the profile's default
    pub word_boundaries: Option<BoundarySet>,
    /// Sentence boundaries overriding the profile's default
    pub sentence_boundaries: Option<BoundarySet>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            word_boundaries: None,
            sentence_boundaries: None,
        }
    }
}

impl AnalyzerConfig {
    /// Create a builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Override the default word boundaries
    pub fn word_boundaries(mut self, boundaries: impl Into<BoundarySet>) -> Self {
        self.config.word_boundaries = Some(boundaries.into());
        self
    }

    /// Override the default sentence boundaries
    pub fn sentence_boundaries(mut self, boundaries: impl Into<BoundarySet>) -> Self {
        self.config.sentence_boundaries = Some(boundaries.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        if self.config.language.is_empty() {
            return Err(AnalysisError::Config("language required".to_string()));
        }

        let empty_override = |set: &Option<BoundarySet>| set.as_ref().is_some_and(|s| s.is_empty());
        if empty_override(&self.config.word_boundaries)
            || empty_override(&self.config.sentence_boundaries)
        {
            return Err(AnalysisError::Config(
                "boundary sets must not be empty".to_string(),
            ));
        }

        Ok(self.config)
    }
}
