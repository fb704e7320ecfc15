//! Configuration file support
//!
//! A TOML file with optional `[analysis]` and `[output]` tables. Every key
//! has a default, and command-line flags take precedence over the file.

use std::path::Path;

use anyhow::{Context, Result};
use lexstat_core::CleanupMode;
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Analysis-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Language profile code
    pub language: String,

    /// Cleanup applied to every input file
    pub cleanup: CleanupMode,

    /// Words excluded from the frequency table
    pub stop_words: Vec<String>,

    /// Lower-case words before counting them
    pub lowercase: bool,

    /// Number of most frequent words to report
    pub top: usize,

    /// Minimum occurrences of a reported word pair
    pub min_occurrences: usize,

    /// Co-occurrence window in words
    pub range: usize,

    /// Statistics cache capacity (0 disables it)
    pub cache_capacity: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: lexstat_core::language::DEFAULT_LANGUAGE.to_string(),
            cleanup: CleanupMode::default(),
            stop_words: Vec::new(),
            lowercase: true,
            top: 10,
            min_occurrences: 2,
            range: 2,
            cache_capacity: lexstat_core::stats::DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.analysis.language, "de");
        assert_eq!(config.analysis.cleanup, CleanupMode::Plain);
        assert_eq!(config.analysis.range, 2);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexstat.toml");
        fs::write(
            &path,
            r#"
[analysis]
language = "en"
cleanup = "remove-all-signs"
stop_words = ["the", "a"]

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.analysis.language, "en");
        assert_eq!(config.analysis.cleanup, CleanupMode::RemoveAllSigns);
        assert_eq!(config.analysis.stop_words, vec!["the", "a"]);
        assert_eq!(config.analysis.top, 10);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[analysis]\nlanguag = \"de\"\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/lexstat.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
