#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Animations are advanced explicitly with [`Animation::tick`]; nothing here
//! reads a clock. [`Tween`] interpolates one `f64` shape property (position,
//! font size or opacity) along a cubic in-out curve.

use std::time::Duration;

/// Cubic ease-in-out (slow start and end), clamping `t` to [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress, clamped to [0.0, 1.0].
    fn value(&self) -> f32;
}

/// Interpolates an `f64` property from `from` to `to` over a duration.
///
/// Elapsed time is kept as a [`Duration`] so many small ticks do not drift.
/// A zero duration completes on the first tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: duration.max(Duration::from_nanos(1)),
        }
    }

    /// A tween already resting at `value`.
    pub fn settled(value: f64) -> Self {
        let mut tween = Self::new(value, value, Duration::ZERO);
        tween.elapsed = tween.duration;
        tween
    }

    /// Linear progress before easing.
    fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn current(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let t = f64::from(self.value());
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Restart toward `to` from the current interpolated value.
    pub fn retarget(&mut self, to: f64, duration: Duration) {
        *self = Self::new(self.current(), to, duration);
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        ease_in_out_cubic(self.progress())
    }
}
