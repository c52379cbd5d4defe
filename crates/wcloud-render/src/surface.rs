#![forbid(unsafe_code)]

//! The drawing capabilities consumed by the layout engine.

use std::time::Duration;

use wcloud_core::timer::TimerId;

/// Initial properties of a newly created labeled shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    /// Label text; also the shape's identity.
    pub term: String,
    /// Horizontal centre of the label.
    pub x: f64,
    /// Vertical centre of the label.
    pub y: f64,
    pub font_size_px: f64,
    pub opacity: f64,
}

/// Target properties for a shape transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTarget {
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

/// A vector drawing surface holding labeled shapes keyed by their text.
///
/// Implementations own animation: `update_shape` and `remove_shape` return
/// immediately and the surface plays the transition over the given duration.
/// Instructions for unknown terms are ignored.
pub trait Surface {
    /// Add a shape. A shape with the same term is replaced.
    fn create_shape(&mut self, shape: ShapeSpec);

    /// Transition an existing shape to `target` over `duration`.
    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration);

    /// Fade a shape to zero opacity over `fade`, then remove it.
    fn remove_shape(&mut self, term: &str, fade: Duration);

    /// Schedule a one-shot timer. The surface reports it back to its owner
    /// once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer returned by [`schedule`](Surface::schedule).
    fn cancel(&mut self, timer: TimerId);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn create_shape(&mut self, shape: ShapeSpec) {
        (**self).create_shape(shape);
    }

    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration) {
        (**self).update_shape(term, target, duration);
    }

    fn remove_shape(&mut self, term: &str, fade: Duration) {
        (**self).remove_shape(term, fade);
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        (**self).cancel(timer);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn create_shape(&mut self, shape: ShapeSpec) {
        (**self).create_shape(shape);
    }

    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration) {
        (**self).update_shape(term, target, duration);
    }

    fn remove_shape(&mut self, term: &str, fade: Duration) {
        (**self).remove_shape(term, fade);
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        (**self).cancel(timer);
    }
}
