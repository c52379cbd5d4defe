#![forbid(unsafe_code)]

//! Text handling for wcloud.
//!
//! - [`extract`] - turn free text into per-term counts
//! - [`StopWords`] - the fixed English stop-word list, or a custom set
//! - [`normalize_tokens`] - the normalization pipeline on its own
//! - [`WidthCache`] - LRU cache for text width measurements
//!
//! # Example
//! ```
//! use wcloud_text::extract;
//!
//! let entries = extract("The cat sat on the mat. The cat ran!");
//! let counts: Vec<(&str, u32)> = entries.iter().map(|e| (e.term.as_str(), e.count)).collect();
//! assert_eq!(counts, vec![("cat", 2), ("sat", 1), ("mat", 1), ("ran", 1)]);
//! ```

pub mod frequency;
pub mod normalize;
pub mod stop_words;
pub mod width_cache;

pub use frequency::{FrequencyEntry, Term, extract, extract_opt, extract_with};
pub use normalize::{normalize, normalize_tokens};
pub use stop_words::StopWords;
pub use width_cache::{CacheStats, WidthCache};

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in columns (wide East Asian glyphs count as 2).
#[inline]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Number of extended grapheme clusters in `text`.
///
/// This is the "length" of a word as a reader perceives it; combining marks
/// do not add to it.
#[inline]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_ascii() {
        assert_eq!(display_width("cloud"), 5);
        assert_eq!(grapheme_count("cloud"), 5);
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(grapheme_count("日本"), 2);
    }

    #[test]
    fn combining_marks_are_one_grapheme() {
        // "e" + combining acute accent
        assert_eq!(grapheme_count("e\u{301}"), 1);
    }
}
