#![forbid(unsafe_code)]

//! Linear scales.
//!
//! A [`LinearScale`] maps a domain interval onto a range interval. Output is
//! clamped to the range. A zero-width domain cannot be normalized, so it maps
//! every input to a fixed point of the range chosen by [`Degenerate`].

use wcloud_core::Interval;

/// Where a zero-width domain maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// The first end of the range.
    RangeStart,
    /// Halfway along the range.
    Midpoint,
}

impl Degenerate {
    fn t(self) -> f64 {
        match self {
            Self::RangeStart => 0.0,
            Self::Midpoint => 0.5,
        }
    }
}

/// A clamped linear map from `domain` to `range`.
///
/// The range may be inverted (`start > end`), e.g. for screen `y` where
/// larger values should sit higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Interval,
    range: Interval,
    degenerate: Degenerate,
}

impl LinearScale {
    /// A scale that maps a degenerate domain to the range midpoint.
    pub fn new(domain: Interval, range: Interval) -> Self {
        Self {
            domain,
            range,
            degenerate: Degenerate::Midpoint,
        }
    }

    /// Set the degenerate-domain policy (builder).
    #[must_use]
    pub fn degenerate(mut self, degenerate: Degenerate) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn domain(&self) -> Interval {
        self.domain
    }

    pub fn range(&self) -> Interval {
        self.range
    }

    /// Whether the domain has zero (or non-finite) width.
    pub fn is_degenerate(&self) -> bool {
        let span = self.domain.end - self.domain.start;
        span == 0.0 || !span.is_finite()
    }

    /// Map `value` into the range.
    pub fn map(&self, value: f64) -> f64 {
        let t = if self.is_degenerate() {
            self.degenerate.t()
        } else {
            let t = (value - self.domain.start) / (self.domain.end - self.domain.start);
            if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
        };
        self.range.start + (self.range.end - self.range.start) * t
    }
}
