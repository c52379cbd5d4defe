//! Property-based invariant tests for term extraction.
//!
//! 1. No stop word survives.
//! 2. Terms are distinct and counts are positive.
//! 3. Expanding each entry `count` times reproduces the multiset of
//!    non-stop-word tokens of the normalization pipeline.
//! 4. Entries follow first-appearance order.
//! 5. Tokens are never empty, never start or end with whitespace and never
//!    hold two adjacent whitespace characters.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use wcloud_text::{StopWords, extract, normalize_tokens};

/// Text drawn from a small vocabulary mixing stop words, punctuation,
/// contractions and odd whitespace so collisions are frequent.
fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("the"),
        Just("The"),
        Just("cat"),
        Just("CAT"),
        Just("mat."),
        Just("isn't"),
        Just("Don't"),
        Just("rust!"),
        Just("(cloud)"),
        Just("well-known"),
        Just("\"quoted\""),
        Just("日本"),
        Just("on"),
        Just("#tag"),
    ];
    let sep = prop_oneof![Just(" "), Just("  "), Just("\t"), Just("\n"), Just(", "), Just("")];
    proptest::collection::vec((word, sep), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(w, s)| [w, s])
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn no_stop_words_survive(text in text_strategy()) {
        let stop = StopWords::english();
        for entry in extract(&text) {
            prop_assert!(!stop.contains(entry.term.as_str()), "stop word leaked: {}", entry.term);
        }
    }

    #[test]
    fn terms_distinct_counts_positive(text in text_strategy()) {
        let entries = extract(&text);
        let mut seen = HashSet::new();
        for entry in &entries {
            prop_assert!(entry.count >= 1);
            prop_assert!(seen.insert(entry.term.clone()), "duplicate term {}", entry.term);
        }
    }

    #[test]
    fn counts_reconstruct_token_multiset(text in text_strategy()) {
        let stop = StopWords::english();
        let mut expected: BTreeMap<String, u32> = BTreeMap::new();
        for token in normalize_tokens(&text) {
            if !stop.contains(&token) {
                *expected.entry(token).or_default() += 1;
            }
        }
        let actual: BTreeMap<String, u32> = extract(&text)
            .into_iter()
            .map(|e| (e.term.into_string(), e.count))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn first_appearance_order(text in text_strategy()) {
        let stop = StopWords::english();
        let mut order: Vec<String> = Vec::new();
        for token in normalize_tokens(&text) {
            if !stop.contains(&token) && !order.contains(&token) {
                order.push(token);
            }
        }
        let terms: Vec<String> = extract(&text).into_iter().map(|e| e.term.into_string()).collect();
        prop_assert_eq!(terms, order);
    }

    #[test]
    fn tokens_hold_only_lone_inner_whitespace(text in text_strategy()) {
        for token in normalize_tokens(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
            prop_assert_eq!(token.trim(), token.as_str());
            let chars: Vec<char> = token.chars().collect();
            prop_assert!(
                !chars.windows(2).any(|w| w[0].is_whitespace() && w[1].is_whitespace()),
                "adjacent whitespace in {:?}", token
            );
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".*") {
        let _ = extract(&text);
    }
}
