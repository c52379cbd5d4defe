#![forbid(unsafe_code)]

//! Term frequency extraction.
//!
//! # Invariants
//!
//! 1. No returned term is a stop word.
//! 2. Returned terms are distinct.
//! 3. Every count is at least 1.
//! 4. Entries are ordered by first appearance of their term in the text.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use rustc_hash::FxHashMap;

use crate::normalize::normalize;
use crate::stop_words::StopWords;

/// A normalized word; the identity key of a word across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Term(String);

impl Term {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Term {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(word: &str) -> Self {
        Self(word.to_owned())
    }
}

impl From<String> for Term {
    fn from(word: String) -> Self {
        Self(word)
    }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A term and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyEntry {
    pub term: Term,
    pub count: u32,
}

impl FrequencyEntry {
    pub fn new(term: impl Into<Term>, count: u32) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Extract term counts using the default English stop words.
pub fn extract(text: &str) -> Vec<FrequencyEntry> {
    extract_with(text, StopWords::english_shared())
}

/// Extract from optional input; `None` behaves like the empty string.
pub fn extract_opt(text: Option<&str>) -> Vec<FrequencyEntry> {
    extract(text.unwrap_or_default())
}

/// Extract term counts, excluding `stop_words`.
pub fn extract_with(text: &str, stop_words: &StopWords) -> Vec<FrequencyEntry> {
    let normalized = normalize(text);
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut tokens = 0usize;

    for token in normalized.split(' ').filter(|t| !t.is_empty()) {
        tokens += 1;
        if stop_words.contains(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => entries[i].count = entries[i].count.saturating_add(1),
            None => {
                index.insert(token, entries.len());
                entries.push(FrequencyEntry::new(token, 1));
            }
        }
    }

    tracing::debug!(
        tokens,
        distinct = entries.len(),
        "extracted term frequencies"
    );
    entries
}
