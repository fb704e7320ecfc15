//! Plain text output formatter

use super::{FileReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one block of `key: value` lines per file
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }
}

fn ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &FileReport) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        let w = &mut self.writer;
        writeln!(w, "== {} ==", report.path)?;
        writeln!(w, "words: {}", report.words)?;
        writeln!(w, "sentences: {}", report.sentences)?;
        writeln!(w, "letters: {}", report.letters)?;
        writeln!(w, "syllables: {}", report.syllables)?;
        writeln!(w, "average word length: {}", ratio(report.average_word_length))?;
        writeln!(w, "sentence length (words): {}", ratio(report.sentence_length_words))?;
        writeln!(w, "sentence length (letters): {}", ratio(report.sentence_length_letters))?;
        match (report.reading_ease, report.readability) {
            (Some(ease), Some(score)) => writeln!(w, "readability: {score} ({ease:.1})")?,
            _ => writeln!(w, "readability: n/a")?,
        }

        if !report.top_words.is_empty() {
            writeln!(w, "top words:")?;
            for entry in &report.top_words {
                writeln!(w, "  {:>6}  {}", entry.count, entry.word)?;
            }
        }

        if !report.connected_words.is_empty() {
            writeln!(w, "connected words:")?;
            for pair in &report.connected_words {
                writeln!(w, "  {:>6}  {}-{}", pair.count, pair.first, pair.second)?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
