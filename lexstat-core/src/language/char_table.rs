//! Per-profile character sets
//!
//! A language profile lists its extra letters and its vowels as plain
//! characters. Both are queried once per character of every scanned text;
//! ASCII is answered from a bitmap, the few umlauts and other non-ASCII
//! members from a sorted list.

/// Set of characters from a language profile (extra letters or vowels)
#[allow(clippy::len_without_is_empty)]
#[derive(Debug, Clone, Default)]
pub struct CharTable {
    /// Bit `n` set when ASCII code point `n` is a member
    ascii: u128,
    /// Sorted, deduplicated non-ASCII members
    others: Vec<char>,
}

impl CharTable {
    /// Collect the members of a profile list
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut table = Self::default();

        for ch in chars {
            if ch.is_ascii() {
                table.ascii |= 1u128 << (ch as u32);
            } else {
                table.others.push(ch);
            }
        }
        table.others.sort_unstable();
        table.others.dedup();

        table
    }

    /// Whether `ch` was listed in the profile
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.others.binary_search(&ch).is_ok()
        }
    }

    /// Number of distinct members
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.others.len()
    }
}
