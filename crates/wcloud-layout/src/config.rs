#![forbid(unsafe_code)]

//! Layout and animation configuration.

use std::time::Duration;

use wcloud_core::CanvasSpec;

/// Number of words displayed by default.
pub const DEFAULT_MAX_WORDS: usize = 5;

/// Font size range in pixels, least frequent to most frequent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRange {
    pub min_px: f64,
    pub max_px: f64,
}

impl Default for FontRange {
    fn default() -> Self {
        Self {
            min_px: 22.0,
            max_px: 56.0,
        }
    }
}

/// Placement configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub canvas: CanvasSpec,
    /// Maximum number of words displayed (K).
    pub max_words: usize,
    pub font_range: FontRange,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::DEFAULT,
            max_words: DEFAULT_MAX_WORDS,
            font_range: FontRange::default(),
        }
    }
}

/// Transition timing and initial appearance of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Position and size transitions.
    pub transition: Duration,
    /// Fade-out before an exiting word is removed.
    pub exit_fade: Duration,
    /// Delay after the first paint before the first-paint flag flips.
    pub settle_delay: Duration,
    /// Font size entering words grow from during the first paint.
    pub initial_font_px: f64,
    /// Opacity of newly created words.
    pub opacity: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(900),
            exit_fade: Duration::from_millis(400),
            settle_delay: Duration::from_millis(950),
            initial_font_px: 1.0,
            opacity: 0.9,
        }
    }
}

/// Everything a [`CloudEngine`](crate::CloudEngine) needs besides its
/// footprint policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
}
