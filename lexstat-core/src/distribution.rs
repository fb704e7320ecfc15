//! Word frequency distributions

use std::collections::{HashMap, HashSet};

/// Word to number of occurrences
pub type WordDistribution = HashMap<String, usize>;

/// Count every token that is not a stop word
///
/// Stop words are compared exactly. When the tokens were lower-cased, the
/// stop words have to be lower-case as well.
pub fn build_distribution<T, S>(tokens: &[T], stop_words: &[S]) -> WordDistribution
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let stop_words: HashSet<&str> = stop_words.iter().map(AsRef::as_ref).collect();

    let mut distribution = WordDistribution::new();
    for token in tokens {
        let token = token.as_ref();
        if !stop_words.contains(token) {
            *distribution.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    distribution
}

/// The `n` most frequent words, ties broken alphabetically
pub fn most_frequent(distribution: &WordDistribution, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = distribution
        .iter()
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}
