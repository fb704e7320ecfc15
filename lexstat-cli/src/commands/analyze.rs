//! Analyze command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lexstat_core::{AnalyzerConfig, CleanupMode, TextAnalyzer};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FileReport, OutputFormat, ReportOptions};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Cleanup applied before analysis
    #[arg(long, value_enum)]
    pub cleanup: Option<CleanupArg>,

    /// Language profile code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Comma-separated words excluded from the frequency table
    #[arg(long, value_name = "WORDS", value_delimiter = ',')]
    pub stop_words: Vec<String>,

    /// Count words with their original case
    #[arg(long)]
    pub keep_case: bool,

    /// Number of most frequent words to report
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Minimum occurrences of a reported word pair
    #[arg(long, value_name = "N")]
    pub min_occurrences: Option<usize>,

    /// Co-occurrence window in words
    #[arg(long, value_name = "N")]
    pub range: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LEXSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Cleanup modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CleanupArg {
    /// Leave the text untouched
    None,
    /// Normalize line breaks and spaces
    Plain,
    /// Also remove `,.!?-`
    RemoveAllSigns,
    /// Also strip HTML tags
    Html,
    /// Also remove Markdown emphasis and heading signs
    Markdown,
}

impl From<CleanupArg> for CleanupMode {
    fn from(arg: CleanupArg) -> Self {
        match arg {
            CleanupArg::None => CleanupMode::None,
            CleanupArg::Plain => CleanupMode::Plain,
            CleanupArg::RemoveAllSigns => CleanupMode::RemoveAllSigns,
            CleanupArg::Html => CleanupMode::Html,
            CleanupArg::Markdown => CleanupMode::Markdown,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let analyzer = TextAnalyzer::with_config(
            AnalyzerConfig::builder()
                .language(config.analysis.language.as_str())
                .cache_capacity(config.analysis.cache_capacity)
                .build()?,
        )
        .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to analyze", files.len());

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = create_formatter(config.output.format, writer, config.output.pretty_json);

        let options = ReportOptions {
            stop_words: config.analysis.stop_words.clone(),
            lowercase: config.analysis.lowercase,
            top: config.analysis.top,
            min_occurrences: config.analysis.min_occurrences,
            range: config.analysis.range,
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut analyzed = 0usize;
        for path in &files {
            match FileReader::read_text(path, config.analysis.cleanup) {
                Ok(text) => {
                    let report = FileReport::build(&analyzer, path, &text, &options);
                    formatter.format_report(&report)?;
                    analyzed += 1;
                }
                Err(e) => log::warn!("Skipping {}: {e:#}", path.display()),
            }
            progress.file_completed(&path.display().to_string());
        }

        progress.finish();
        formatter.finish()?;

        log::info!(
            "Analyzed {} of {} file(s); cache: {:?}",
            analyzed,
            files.len(),
            analyzer.cache_metrics()
        );

        if analyzed == 0 {
            return Err(CliError::NoInput.into());
        }
        Ok(())
    }

    /// Configuration file values overridden by command-line flags
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let analysis = &mut config.analysis;
        if let Some(language) = &self.language {
            analysis.language = language.clone();
        }
        if let Some(cleanup) = self.cleanup {
            analysis.cleanup = cleanup.into();
        }
        if !self.stop_words.is_empty() {
            analysis.stop_words = self.stop_words.clone();
        }
        if self.keep_case {
            analysis.lowercase = false;
        }
        if let Some(top) = self.top {
            analysis.top = top;
        }
        if let Some(min_occurrences) = self.min_occurrences {
            analysis.min_occurrences = min_occurrences;
        }
        if let Some(range) = self.range {
            analysis.range = range;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        Ok(config)
    }
}
