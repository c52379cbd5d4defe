#![forbid(unsafe_code)]

//! Stop-word sets.
//!
//! The default set is a closed list of common English function words and
//! negative contractions. Entries are compared against already-normalized
//! (lowercased) tokens, so the list itself is lowercase.

use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// The default English stop words.
pub const ENGLISH: &[&str] = &[
    "the", "and", "a", "an", "in", "on", "at", "for", "with", "about", "as", "by", "to", "of",
    "from", "that", "which", "who", "whom", "this", "these", "those", "it", "its", "they", "their",
    "them", "we", "our", "ours", "you", "your", "yours", "he", "him", "his", "she", "her", "hers",
    "us", "theirs", "i", "me", "my", "myself", "yourself", "yourselves", "was", "were", "is", "am",
    "are", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "if", "each", "how", "what", "without", "through", "over", "under", "above", "below",
    "between", "among", "during", "before", "after", "until", "while", "off", "out", "into",
    "against", "amongst", "throughout", "despite", "towards", "upon", "isn't", "aren't", "wasn't",
    "weren't", "haven't", "hasn't", "hadn't", "doesn't", "didn't", "don't", "won't", "wouldn't",
    "can't", "couldn't", "shouldn't", "mustn't", "needn't", "daren't",
];

/// A set of words excluded from extraction.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: FxHashSet<Box<str>>,
}

impl StopWords {
    /// An empty set: nothing is excluded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fresh copy of the default English set.
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Shared instance of the default English set.
    pub fn english_shared() -> &'static StopWords {
        static ENGLISH_SET: OnceLock<StopWords> = OnceLock::new();
        ENGLISH_SET.get_or_init(StopWords::english)
    }

    /// Whether `token` is a stop word.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Add a word. Input is lowercased so it matches normalized tokens.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase().into_boxed_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<&'a str> for StopWords {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_contains_function_words() {
        let set = StopWords::english();
        for w in ["the", "on", "and", "isn't", "daren't", "myself"] {
            assert!(set.contains(w), "{w} should be a stop word");
        }
        assert!(!set.contains("cat"));
    }

    #[test]
    fn english_is_deduplicated() {
        let set = StopWords::english();
        assert!(set.len() <= ENGLISH.len());
        assert!(!set.is_empty());
    }

    #[test]
    fn shared_matches_fresh() {
        let shared = StopWords::english_shared();
        assert_eq!(shared.len(), StopWords::english().len());
    }

    #[test]
    fn insert_lowercases() {
        let mut set = StopWords::empty();
        assert!(set.insert("Cloud"));
        assert!(set.contains("cloud"));
        assert!(!set.insert("CLOUD"));
    }

    #[test]
    fn collect_from_iter() {
        let set: StopWords = ["alpha", "beta"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("beta"));
    }
}
