//! Bench command implementation
//!
//! Runs every analysis operation on one file for a number of cycles and
//! prints the time spent per operation. The statistics cache is cleared at
//! the start of each cycle, so the first statistics operation of a cycle
//! pays for the scan and the others measure cache hits.

use std::hint::black_box;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use lexstat_core::{CleanupMode, TextAnalyzer};

use crate::error::CliError;
use crate::input::FileReader;
use crate::progress::ProgressReporter;

/// Arguments for the bench command
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Number of cycles
    #[arg(short = 'n', long, default_value_t = 100)]
    pub cycles: usize,

    /// Language profile code
    #[arg(short, long, value_name = "CODE", default_value = lexstat_core::language::DEFAULT_LANGUAGE)]
    pub language: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

type Operation = fn(&TextAnalyzer, &str);

const STOP_WORDS: &[&str] = &["der", "die", "das", "und", "ist", "ein", "eine"];

fn tokenize(a: &TextAnalyzer, t: &str) {
    black_box(a.tokenize(t, true));
}

fn sentences(a: &TextAnalyzer, t: &str) {
    black_box(a.sentences(t, false));
}

fn count_total_words(a: &TextAnalyzer, t: &str) {
    black_box(a.count_total_words(t));
}

fn word_distribution(a: &TextAnalyzer, t: &str) {
    black_box(a.word_distribution(t, true));
}

fn word_distribution_with_stop_words(a: &TextAnalyzer, t: &str) {
    black_box(a.word_distribution_with_stop_words(t, STOP_WORDS, true));
}

fn build_distribution(a: &TextAnalyzer, t: &str) {
    let tokens = a.tokenize(t, true);
    black_box(a.build_distribution(&tokens, STOP_WORDS));
}

fn word_length(a: &TextAnalyzer, t: &str) {
    let _ = black_box(a.word_length(t));
}

fn sentence_length_by_words(a: &TextAnalyzer, t: &str) {
    let _ = black_box(a.sentence_length_by_words(t));
}

fn sentence_length_by_letters(a: &TextAnalyzer, t: &str) {
    let _ = black_box(a.sentence_length_by_letters(t));
}

fn word_length_distribution(a: &TextAnalyzer, t: &str) {
    black_box(a.word_length_distribution(t));
}

fn find_connected_words(a: &TextAnalyzer, t: &str) {
    black_box(a.find_connected_words(t, 2, 2));
}

fn readability_score(a: &TextAnalyzer, t: &str) {
    let _ = black_box(a.readability_score(t));
}

/// Every timed operation, in the order they run within a cycle
const OPERATIONS: &[(&str, Operation)] = &[
    ("tokenize", tokenize),
    ("sentences", sentences),
    ("count_total_words", count_total_words),
    ("word_distribution", word_distribution),
    ("word_distribution_with_stop_words", word_distribution_with_stop_words),
    ("build_distribution", build_distribution),
    ("word_length", word_length),
    ("sentence_length_by_words", sentence_length_by_words),
    ("sentence_length_by_letters", sentence_length_by_letters),
    ("word_length_distribution", word_length_distribution),
    ("find_connected_words", find_connected_words),
    ("readability_score", readability_score),
];

/// Average time of one cycle; zero when no cycle ran
fn per_cycle(total: Duration, cycles: usize) -> Duration {
    if cycles == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(total.as_secs_f64() / cycles as f64)
}

impl BenchArgs {
    /// Execute the bench command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);
        self.run(&mut io::stdout().lock())
    }

    /// Time the operations and write the table to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let analyzer = TextAnalyzer::with_language(&self.language)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let text = FileReader::read_text(&self.input, CleanupMode::Plain)?;
        let size = FileReader::file_size(&self.input)?;
        log::info!(
            "benchmarking {} ({} bytes) for {} cycle(s)",
            self.input.display(),
            size,
            self.cycles
        );

        let mut totals = vec![Duration::ZERO; OPERATIONS.len()];
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_cycles(self.cycles as u64);

        for _ in 0..self.cycles {
            analyzer.clear_cache();
            for ((_, operation), total) in OPERATIONS.iter().zip(totals.iter_mut()) {
                let start = Instant::now();
                operation(&analyzer, &text);
                *total += start.elapsed();
            }
            progress.cycle_completed();
        }
        progress.finish();

        writeln!(out, "{} ({} bytes), {} cycle(s)", self.input.display(), size, self.cycles)?;
        writeln!(out, "{:<36} {:>14} {:>14}", "operation", "total", "per cycle")?;
        for ((name, _), total) in OPERATIONS.iter().zip(&totals) {
            let per_cycle = per_cycle(*total, self.cycles);
            writeln!(
                out,
                "{:<36} {:>14} {:>14}",
                name,
                format!("{total:.3?}"),
                format!("{per_cycle:.3?}")
            )?;
        }
        out.flush()?;

        Ok(())
    }
}
