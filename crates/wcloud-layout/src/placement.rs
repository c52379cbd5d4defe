#![forbid(unsafe_code)]

//! Top-K selection and placement.
//!
//! Words are ranked by descending count (ties keep input order) and the
//! first `max_words` are placed:
//!
//! - font size grows linearly with count over the configured font range;
//! - `x` spreads words left to right by rank across the horizontal extent;
//! - `y` rises with count, most frequent at the top of the vertical extent;
//! - both coordinates are then clamped so the word's estimated footprint
//!   stays inside the canvas margins.
//!
//! # Invariants
//!
//! 1. The result holds at most `max_words` entries, distinct by term.
//! 2. Results are in rank order: counts never increase.
//! 3. Every position lies within the canvas margins.
//! 4. Layout is a pure function of its inputs.

use rustc_hash::FxHashSet;
use wcloud_core::Interval;
use wcloud_text::{FrequencyEntry, Term};

use crate::config::LayoutConfig;
use crate::footprint::FootprintPolicy;
use crate::scale::{Degenerate, LinearScale};

/// A word selected for display, with its 0-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub term: Term,
    pub count: u32,
    pub rank: usize,
}

/// Where and how large one word is drawn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    pub term: Term,
    pub count: u32,
    pub rank: usize,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

/// Rank entries by descending count and keep the first `k`.
///
/// The sort is stable. A term repeated in `entries` keeps only its
/// highest-ranked occurrence.
pub fn rank_top_k(entries: &[FrequencyEntry], k: usize) -> Vec<RankedWord> {
    if k == 0 {
        return Vec::new();
    }
    let mut order: Vec<&FrequencyEntry> = entries.iter().collect();
    order.sort_by(|a, b| b.count.cmp(&a.count));

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    order
        .into_iter()
        .filter(|e| seen.insert(e.term.as_str()))
        .take(k)
        .enumerate()
        .map(|(rank, e)| RankedWord {
            term: e.term.clone(),
            count: e.count,
            rank,
        })
        .collect()
}

/// The three scales derived from one ranked batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudScales {
    pub font: LinearScale,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl CloudScales {
    /// Build scales for `ranked`, which must be non-empty to be meaningful.
    pub fn new(ranked: &[RankedWord], config: &LayoutConfig) -> Self {
        let (min, max) = ranked.iter().fold((u32::MAX, 0), |(lo, hi), w| {
            (lo.min(w.count), hi.max(w.count))
        });
        let min = min.max(1);
        let max = max.max(min);
        let counts = Interval::new(f64::from(min), f64::from(max));

        let canvas = &config.canvas;
        let font = LinearScale::new(
            counts,
            Interval::new(config.font_range.min_px, config.font_range.max_px),
        )
        .degenerate(Degenerate::RangeStart);

        // No `max(1, n - 1)` guard on the rank domain: a lone word's domain
        // is degenerate, so it sits at the horizontal centre, not the left edge.
        let last_rank = ranked.len().saturating_sub(1) as f64;
        let x = LinearScale::new(Interval::new(0.0, last_rank), canvas.x_extent());

        let y_extent = canvas.y_extent();
        let y = LinearScale::new(counts, Interval::new(y_extent.end, y_extent.start));

        Self { font, x, y }
    }

    pub fn font_size(&self, count: u32) -> f64 {
        self.font.map(f64::from(count))
    }
}

/// Keep a word of half size `half` centred at `value` inside `extent`.
///
/// A word too large for the extent is centred on it.
fn fit_axis(extent: Interval, half: f64, value: f64) -> f64 {
    let half = if half.is_nan() { 0.0 } else { half.max(0.0) };
    if half * 2.0 > extent.end - extent.start {
        return extent.midpoint();
    }
    extent.inset(half).clamp_or_midpoint(value)
}

/// Select, size and position the top words of `entries`.
pub fn compute_layout(
    entries: &[FrequencyEntry],
    config: &LayoutConfig,
    footprint: &dyn FootprintPolicy,
) -> Vec<LayoutResult> {
    let ranked = rank_top_k(entries, config.max_words);
    if ranked.is_empty() {
        return Vec::new();
    }
    let scales = CloudScales::new(&ranked, config);
    let x_extent = config.canvas.x_extent();
    let y_extent = config.canvas.y_extent();

    ranked
        .into_iter()
        .map(|word| {
            let font_size_px = scales.font_size(word.count);
            let fp = footprint.estimate(word.term.as_str(), font_size_px);
            let x = fit_axis(x_extent, fp.half_width, scales.x.map(word.rank as f64));
            let y = fit_axis(y_extent, fp.half_height, scales.y.map(f64::from(word.count)));
            LayoutResult {
                term: word.term,
                count: word.count,
                rank: word.rank,
                x,
                y,
                font_size_px,
            }
        })
        .collect()
}
