//! Public contract for character classification
//!
//! The tokenizer and the statistics accumulator only ever ask two questions
//! about a character. Both are answered by a [`CharacterClassifier`], so an
//! alphabet can be swapped without touching the scanning code.

/// Letter and vowel classification used by every scan
///
/// Implementations must be pure: the answer for a character may depend only
/// on the character and on configuration fixed at construction time.
pub trait CharacterClassifier: Send + Sync {
    /// Whether `ch` counts as a letter
    fn is_letter(&self, ch: char) -> bool;

    /// Whether `ch` is a vowel for the syllable heuristic
    fn is_vowel(&self, ch: char) -> bool;

    /// Language code of the profile behind this classifier
    fn code(&self) -> &str {
        "custom"
    }
}

impl<T: CharacterClassifier + ?Sized> CharacterClassifier for std::sync::Arc<T> {
    #[inline]
    fn is_letter(&self, ch: char) -> bool {
        (**self).is_letter(ch)
    }

    #[inline]
    fn is_vowel(&self, ch: char) -> bool {
        (**self).is_vowel(ch)
    }

    fn code(&self) -> &str {
        (**self).code()
    }
}

/// Classifier without a language profile
///
/// Letters are Unicode alphabetic characters; vowels are `aeiouy` in either
/// case.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl CharacterClassifier for UnicodeClassifier {
    #[inline]
    fn is_letter(&self, ch: char) -> bool {
        ch.is_alphabetic()
    }

    #[inline]
    fn is_vowel(&self, ch: char) -> bool {
        matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
    }

    fn code(&self) -> &str {
        "unicode"
    }
}
