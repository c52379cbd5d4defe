#![forbid(unsafe_code)]

//! Keyed diff between two rendered batches.
//!
//! Compares the previous batch against the next by key:
//! - `enter`: keys only in the next batch
//! - `update`: keys in both, paired as (previous, next)
//! - `exit`: keys only in the previous batch
//!
//! Each group keeps the order of the batch it is drawn from. Duplicate keys
//! within a batch count once (the first occurrence wins).

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::placement::LayoutResult;

/// One key present in both batches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update<'a, T> {
    pub previous: &'a T,
    pub next: &'a T,
}

/// Result of a keyed diff.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedDiff<'a, T> {
    pub enter: Vec<&'a T>,
    pub update: Vec<Update<'a, T>>,
    pub exit: Vec<&'a T>,
}

/// Diff `previous` against `next` by `key`.
pub fn keyed_diff<'a, T, K, F>(previous: &'a [T], next: &'a [T], key: F) -> KeyedDiff<'a, T>
where
    K: Eq + Hash + ?Sized + 'a,
    F: Fn(&'a T) -> &'a K,
{
    let mut before: FxHashMap<&K, &T> = FxHashMap::default();
    for item in previous {
        before.entry(key(item)).or_insert(item);
    }

    let mut seen: FxHashSet<&K> = FxHashSet::default();
    let mut enter = Vec::new();
    let mut update = Vec::new();
    for item in next {
        let k = key(item);
        if !seen.insert(k) {
            continue;
        }
        match before.get(k) {
            Some(prev) => update.push(Update {
                previous: *prev,
                next: item,
            }),
            None => enter.push(item),
        }
    }

    let mut exited: FxHashSet<&K> = FxHashSet::default();
    let exit = previous
        .iter()
        .filter(|item| {
            let k = key(*item);
            !seen.contains(k) && exited.insert(k)
        })
        .collect();

    tracing::trace!(
        previous = previous.len(),
        next = next.len(),
        entering = enter.len(),
        updating = update.len(),
        "keyed diff"
    );

    KeyedDiff {
        enter,
        update,
        exit,
    }
}

/// A keyed diff of layout batches.
pub type Reconciliation<'a> = KeyedDiff<'a, LayoutResult>;

/// Diff two layout batches by term.
pub fn reconcile<'a>(previous: &'a [LayoutResult], next: &'a [LayoutResult]) -> Reconciliation<'a> {
    keyed_diff(previous, next, |r: &'a LayoutResult| r.term.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcloud_text::Term;

    fn batch(terms: &[&str]) -> Vec<LayoutResult> {
        terms
            .iter()
            .enumerate()
            .map(|(rank, t)| LayoutResult {
                term: Term::from(*t),
                count: 1,
                rank,
                x: rank as f64,
                y: 0.0,
                font_size_px: 22.0,
            })
            .collect()
    }

    fn terms<'a>(items: &[&'a LayoutResult]) -> Vec<&'a str> {
        items.iter().map(|r| r.term.as_str()).collect()
    }

    #[test]
    fn first_render_is_all_enter() {
        let next = batch(&["a", "b"]);
        let diff = reconcile(&[], &next);
        assert_eq!(terms(&diff.enter), vec!["a", "b"]);
        assert!(diff.update.is_empty());
        assert!(diff.exit.is_empty());
    }

    #[test]
    fn partitions_by_term() {
        let prev = batch(&["a", "b", "c"]);
        let next = batch(&["c", "d", "a"]);
        let diff = reconcile(&prev, &next);
        assert_eq!(terms(&diff.enter), vec!["d"]);
        assert_eq!(terms(&diff.exit), vec!["b"]);
        let updated: Vec<_> = diff.update.iter().map(|u| u.next.term.as_str()).collect();
        assert_eq!(updated, vec!["c", "a"]);
    }

    #[test]
    fn update_pairs_previous_with_next() {
        let prev = batch(&["a", "b"]);
        let next = batch(&["b"]);
        let diff = reconcile(&prev, &next);
        assert_eq!(diff.update[0].previous.x, 1.0);
        assert_eq!(diff.update[0].next.x, 0.0);
    }

    #[test]
    fn same_keys_reordered_is_all_update() {
        let prev = batch(&["a", "b"]);
        let next = batch(&["b", "a"]);
        let diff = reconcile(&prev, &next);
        assert!(diff.enter.is_empty() && diff.exit.is_empty());
        let updated: Vec<_> = diff.update.iter().map(|u| u.next.term.as_str()).collect();
        assert_eq!(updated, vec!["b", "a"]);
    }

    #[test]
    fn everything_exits_into_empty() {
        let prev = batch(&["a", "b"]);
        let diff = reconcile(&prev, &[]);
        assert_eq!(terms(&diff.exit), vec!["a", "b"]);
    }

    #[test]
    fn duplicate_keys_count_once() {
        let diff = keyed_diff(&[1, 1, 2], &[2, 3, 3], |n: &i32| n);
        assert_eq!(diff.enter, vec![&3]);
        assert_eq!(diff.exit, vec![&1]);
        assert_eq!(diff.update.len(), 1);
    }
}
