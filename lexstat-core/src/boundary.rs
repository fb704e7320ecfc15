//! Boundary character sets
//!
//! A [`BoundarySet`] lists the characters that close an open run of letters.
//! The tokenizer and the statistics accumulator share the same two presets:
//! word boundaries and sentence boundaries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Characters that end a word: space, period, comma, dash, exclamation mark,
/// question mark and newline
pub const DEFAULT_WORD_BOUNDARIES: &[char] = &[' ', '.', ',', '-', '!', '?', '\n'];

/// Characters that end a sentence
pub const DEFAULT_SENTENCE_BOUNDARIES: &[char] = &['.', '!', '?'];

/// Immutable set of boundary characters
///
/// Ordered storage keeps `Hash` and `Eq` independent of insertion order, so a
/// set can take part in a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<char>", into = "Vec<char>")]
pub struct BoundarySet {
    chars: BTreeSet<char>,
}

impl BoundarySet {
    /// Create a set from any collection of characters
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// The default word-boundary preset
    pub fn word() -> Self {
        Self::new(DEFAULT_WORD_BOUNDARIES.iter().copied())
    }

    /// The default sentence-boundary preset
    pub fn sentence() -> Self {
        Self::new(DEFAULT_SENTENCE_BOUNDARIES.iter().copied())
    }

    /// Check whether `ch` closes a run
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of characters in the set
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the characters in ascending order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl From<&str> for BoundarySet {
    fn from(chars: &str) -> Self {
        Self::new(chars.chars())
    }
}

impl From<&[char]> for BoundarySet {
    fn from(chars: &[char]) -> Self {
        Self::new(chars.iter().copied())
    }
}

impl From<Vec<char>> for BoundarySet {
    fn from(chars: Vec<char>) -> Self {
        Self::new(chars)
    }
}

impl From<BoundarySet> for Vec<char> {
    fn from(set: BoundarySet) -> Self {
        set.chars.into_iter().collect()
    }
}

impl fmt::Display for BoundarySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.chars.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_preset() {
        let set = BoundarySet::word();
        for ch in [' ', '.', ',', '-', '!', '?', '\n'] {
            assert!(set.contains(ch), "missing {ch:?}");
        }
        assert!(!set.contains(';'));
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_sentence_preset() {
        let set = BoundarySet::sentence();
        assert!(set.contains('.'));
        assert!(set.contains('!'));
        assert!(set.contains('?'));
        assert!(!set.contains(' '));
        assert!(!set.contains(','));
    }

    #[test]
    fn test_equality_ignores_order_and_duplicates() {
        assert_eq!(BoundarySet::from(".!?"), BoundarySet::from("?!.."));
        assert_ne!(BoundarySet::from(".!?"), BoundarySet::from(".!"));
    }

    #[test]
    fn test_empty_set() {
        let set = BoundarySet::from("");
        assert!(set.is_empty());
        assert!(!set.contains(' '));
    }
}
