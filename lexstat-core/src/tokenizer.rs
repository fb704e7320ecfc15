//! Single-pass tokenizer
//!
//! A token is a run that starts at a letter and ends right before the first
//! boundary character that follows it. Non-letters that are not boundaries
//! do not end a run: they stay inside the token. This is what lets the same
//! scanner split a text into sentences (where spaces are not boundaries) and
//! a sentence into words.
//!
//! ```rust
//! use lexstat_core::boundary::BoundarySet;
//! use lexstat_core::language::UnicodeClassifier;
//! use lexstat_core::tokenizer::segment;
//!
//! let words = segment(&UnicodeClassifier, "Nicht-Ganz soo00 normal?", false, &BoundarySet::word());
//! assert_eq!(words, vec!["Nicht", "Ganz", "soo00", "normal"]);
//! ```

use crate::boundary::BoundarySet;
use crate::language::CharacterClassifier;

/// Iterator over the raw token slices of a text
pub struct Segments<'a, C: ?Sized> {
    classifier: &'a C,
    text: &'a str,
    boundaries: &'a BoundarySet,
    chars: std::str::CharIndices<'a>,
    run_start: Option<usize>,
}

impl<'a, C: CharacterClassifier + ?Sized> Segments<'a, C> {
    /// Start scanning `text`
    pub fn new(classifier: &'a C, text: &'a str, boundaries: &'a BoundarySet) -> Self {
        Self {
            classifier,
            text,
            boundaries,
            chars: text.char_indices(),
            run_start: None,
        }
    }
}

impl<'a, C: CharacterClassifier + ?Sized> Iterator for Segments<'a, C> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for (idx, ch) in self.chars.by_ref() {
            if self.classifier.is_letter(ch) {
                if self.run_start.is_none() {
                    self.run_start = Some(idx);
                }
            } else if let Some(start) = self.run_start {
                if self.boundaries.contains(ch) {
                    self.run_start = None;
                    return Some(&self.text[start..idx]);
                }
            }
        }

        // Trailing-word flush
        self.run_start.take().map(|start| &self.text[start..])
    }
}

/// Split `text` into tokens, lower-casing them if requested
pub fn segment<C: CharacterClassifier + ?Sized>(
    classifier: &C,
    text: &str,
    lowercase: bool,
    boundaries: &BoundarySet,
) -> Vec<String> {
    Segments::new(classifier, text, boundaries)
        .map(|token| {
            if lowercase {
                token.to_lowercase()
            } else {
                token.to_string()
            }
        })
        .collect()
}
