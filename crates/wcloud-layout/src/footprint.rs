#![forbid(unsafe_code)]

//! Word footprint estimation.
//!
//! Placement keeps a word inside the canvas by insetting each axis by half
//! the word's estimated size. The estimate is pluggable through
//! [`FootprintPolicy`]; any `Fn(&str, f64) -> Footprint` also works.

use std::cell::RefCell;

use wcloud_text::{WidthCache, display_width, grapheme_count};

/// Half extents of a word's bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Footprint {
    pub half_width: f64,
    pub half_height: f64,
}

impl Footprint {
    pub const fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }
}

/// Estimates how much room a word needs at a given font size.
pub trait FootprintPolicy {
    fn estimate(&self, term: &str, font_size_px: f64) -> Footprint;
}

impl<F> FootprintPolicy for F
where
    F: Fn(&str, f64) -> Footprint,
{
    fn estimate(&self, term: &str, font_size_px: f64) -> Footprint {
        self(term, font_size_px)
    }
}

/// Size from character count alone.
///
/// `half_width = width_factor * size * graphemes`,
/// `half_height = height_factor * size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicFootprint {
    pub width_factor: f64,
    pub height_factor: f64,
}

impl Default for HeuristicFootprint {
    fn default() -> Self {
        Self {
            width_factor: 0.3,
            height_factor: 0.5,
        }
    }
}

impl FootprintPolicy for HeuristicFootprint {
    fn estimate(&self, term: &str, font_size_px: f64) -> Footprint {
        let glyphs = grapheme_count(term) as f64;
        Footprint::new(
            self.width_factor * font_size_px * glyphs,
            self.height_factor * font_size_px,
        )
    }
}

/// Size from display columns, so wide (CJK, emoji) glyphs get more room.
///
/// Widths are memoized in an LRU [`WidthCache`].
#[derive(Debug)]
pub struct MeasuredFootprint {
    pub width_factor: f64,
    pub height_factor: f64,
    cache: RefCell<WidthCache>,
}

impl MeasuredFootprint {
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            width_factor: 0.3,
            height_factor: 0.5,
            cache: RefCell::new(WidthCache::new(cache_capacity)),
        }
    }

    /// Cache hit/miss counters.
    pub fn cache_stats(&self) -> wcloud_text::CacheStats {
        self.cache.borrow().stats()
    }

    fn columns(&self, term: &str) -> usize {
        match self.cache.try_borrow_mut() {
            Ok(mut cache) => cache.get_or_compute(term),
            Err(_) => display_width(term),
        }
    }
}

impl Default for MeasuredFootprint {
    fn default() -> Self {
        Self::new(wcloud_text::width_cache::DEFAULT_CACHE_CAPACITY)
    }
}

impl FootprintPolicy for MeasuredFootprint {
    fn estimate(&self, term: &str, font_size_px: f64) -> Footprint {
        let columns = self.columns(term) as f64;
        Footprint::new(
            self.width_factor * font_size_px * columns,
            self.height_factor * font_size_px,
        )
    }
}
