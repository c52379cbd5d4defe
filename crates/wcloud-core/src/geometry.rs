#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! The cloud is laid out in logical units on a fixed canvas. Coordinates are
//! `f64`, origin at top-left, `y` grows downward.

/// Margins around the plot area, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Create margins with specific values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// A closed interval `[start, end]` on one axis.
///
/// `start` may be greater than `end`; see [`Interval::clamp_or_midpoint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Midpoint of the two bounds.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Whether `start <= end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Shrink both ends inward by `inset` (a negative inset grows the interval).
    #[inline]
    pub fn inset(&self, inset: f64) -> Self {
        Self::new(self.start + inset, self.end - inset)
    }

    /// Constrain `value` to the interval.
    ///
    /// When the interval is inverted (`start > end`) there is no valid
    /// position, and the result collapses to the midpoint of the bounds.
    /// NaN values also resolve to the midpoint.
    pub fn clamp_or_midpoint(&self, value: f64) -> f64 {
        if !self.is_valid() || value.is_nan() {
            return self.midpoint();
        }
        value.clamp(self.start, self.end)
    }
}

/// The fixed drawing area: overall size plus margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl CanvasSpec {
    /// 1000×420 with margins {top: 28, right: 40, bottom: 40, left: 40}.
    pub const DEFAULT: Self = Self {
        width: 1000.0,
        height: 420.0,
        margin: Margins::new(28.0, 40.0, 40.0, 40.0),
    };

    pub const fn new(width: f64, height: f64, margin: Margins) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal extent of the plot area, `[left, width - right]`.
    #[inline]
    pub fn x_extent(&self) -> Interval {
        Interval::new(self.margin.left, self.width - self.margin.right)
    }

    /// Vertical extent of the plot area, `[top, height - bottom]`.
    #[inline]
    pub fn y_extent(&self) -> Interval {
        Interval::new(self.margin.top, self.height - self.margin.bottom)
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
