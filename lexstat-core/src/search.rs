//! Regular-expression pattern search

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One match of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Matched text
    pub value: String,
    /// Byte offset of the match in the searched text
    pub position: usize,
}

/// Every non-overlapping match of `pattern`, in order of appearance
pub fn find_patterns(text: &str, pattern: &Regex) -> Vec<SearchMatch> {
    pattern
        .find_iter(text)
        .map(|m| SearchMatch {
            value: m.as_str().to_string(),
            position: m.start(),
        })
        .collect()
}

/// Compile `pattern` and search `text` with it
pub fn find_pattern_str(text: &str, pattern: &str) -> Result<Vec<SearchMatch>> {
    let regex = Regex::new(pattern)?;
    Ok(find_patterns(text, &regex))
}
