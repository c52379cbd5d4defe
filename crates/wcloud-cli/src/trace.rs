#![forbid(unsafe_code)]

//! A surface decorator that logs every instruction.

use std::time::Duration;

use wcloud::render::{ShapeSpec, ShapeTarget, Surface, TimerId};

/// Forwards to the inner surface, emitting one `info` event per call.
#[derive(Debug)]
pub struct LoggedSurface<S> {
    inner: S,
}

impl<S: Surface> LoggedSurface<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Surface> Surface for LoggedSurface<S> {
    fn create_shape(&mut self, shape: ShapeSpec) {
        tracing::info!(
            op = "create",
            term = %shape.term,
            x = shape.x,
            y = shape.y,
            font_size_px = shape.font_size_px,
            opacity = shape.opacity
        );
        self.inner.create_shape(shape);
    }

    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration) {
        tracing::info!(
            op = "update",
            term,
            x = target.x,
            y = target.y,
            font_size_px = target.font_size_px,
            duration_ms = duration.as_millis() as u64
        );
        self.inner.update_shape(term, target, duration);
    }

    fn remove_shape(&mut self, term: &str, fade: Duration) {
        tracing::info!(op = "remove", term, fade_ms = fade.as_millis() as u64);
        self.inner.remove_shape(term, fade);
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.inner.schedule(delay);
        tracing::info!(op = "schedule", timer = %id, delay_ms = delay.as_millis() as u64);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        tracing::info!(op = "cancel", timer = %timer);
        self.inner.cancel(timer);
    }
}
