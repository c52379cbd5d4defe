#![forbid(unsafe_code)]

//! Retained, time-advanced scene.
//!
//! [`SceneSurface`] holds one animated shape per term. Each property is a
//! [`Tween`]; the owner drives time with [`SceneSurface::advance`], which
//! also reports fired timers.
//!
//! # Invariants
//!
//! 1. At most one shape per term.
//! 2. An exiting shape is dropped once its opacity tween completes.
//! 3. Updating a shape mid-transition continues from its current values.
//! 4. Shapes keep creation order, which is also paint order.

use std::time::Duration;

use wcloud_core::CanvasSpec;
use wcloud_core::animation::{Animation, Tween};
use wcloud_core::timer::{TimerId, TimerQueue};

use crate::surface::{ShapeSpec, ShapeTarget, Surface};

/// Upper bound on steps taken by [`SceneSurface::advance_until_idle`].
const MAX_IDLE_STEPS: usize = 10_000;

#[derive(Debug, Clone)]
struct SceneShape {
    term: String,
    x: Tween,
    y: Tween,
    font_size: Tween,
    opacity: Tween,
    exiting: bool,
}

impl SceneShape {
    fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
        self.font_size.tick(dt);
        self.opacity.tick(dt);
    }

    fn is_settled(&self) -> bool {
        self.x.is_complete()
            && self.y.is_complete()
            && self.font_size.is_complete()
            && self.opacity.is_complete()
    }

    fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            term: self.term.clone(),
            x: self.x.current(),
            y: self.y.current(),
            font_size_px: self.font_size.current(),
            opacity: self.opacity.current(),
            exiting: self.exiting,
        }
    }
}

/// Current drawn state of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSnapshot {
    pub term: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub opacity: f64,
    /// Whether the shape is fading out.
    pub exiting: bool,
}

/// An animated scene on a fixed canvas.
#[derive(Debug)]
pub struct SceneSurface {
    canvas: CanvasSpec,
    shapes: Vec<SceneShape>,
    timers: TimerQueue,
}

impl SceneSurface {
    pub fn new(canvas: CanvasSpec) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
            timers: TimerQueue::new(),
        }
    }

    pub fn canvas(&self) -> &CanvasSpec {
        &self.canvas
    }

    /// Virtual time elapsed.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Snapshot of every shape in paint order.
    pub fn shapes(&self) -> Vec<ShapeSnapshot> {
        self.shapes.iter().map(SceneShape::snapshot).collect()
    }

    /// Snapshot of one shape.
    pub fn shape(&self, term: &str) -> Option<ShapeSnapshot> {
        self.shapes
            .iter()
            .find(|s| s.term == term)
            .map(SceneShape::snapshot)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// No transition running and no timer pending.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty() && self.shapes.iter().all(|s| !s.exiting && s.is_settled())
    }

    /// Advance all transitions and timers by `dt`.
    ///
    /// Returns the timers that fired, in deadline order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        for shape in &mut self.shapes {
            shape.tick(dt);
        }
        self.shapes.retain(|s| {
            let done = s.exiting && s.opacity.is_complete();
            if done {
                tracing::trace!(term = %s.term, "shape removed after fade");
            }
            !done
        });
        self.timers.advance(dt)
    }

    /// Advance in `step` increments until idle, returning all fired timers.
    pub fn advance_until_idle(&mut self, step: Duration) -> Vec<TimerId> {
        let step = if step.is_zero() {
            Duration::from_millis(16)
        } else {
            step
        };
        let mut fired = Vec::new();
        for _ in 0..MAX_IDLE_STEPS {
            if self.is_idle() {
                break;
            }
            fired.extend(self.advance(step));
        }
        fired
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.term == term)
    }
}

impl Surface for SceneSurface {
    fn create_shape(&mut self, shape: ShapeSpec) {
        if let Some(idx) = self.position(&shape.term) {
            tracing::trace!(term = %shape.term, "replacing existing shape");
            self.shapes.remove(idx);
        }
        self.shapes.push(SceneShape {
            x: Tween::settled(shape.x),
            y: Tween::settled(shape.y),
            font_size: Tween::settled(shape.font_size_px),
            opacity: Tween::settled(shape.opacity),
            term: shape.term,
            exiting: false,
        });
    }

    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration) {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.term == term && !s.exiting) else {
            tracing::trace!(term, "update for unknown shape ignored");
            return;
        };
        shape.x.retarget(target.x, duration);
        shape.y.retarget(target.y, duration);
        shape.font_size.retarget(target.font_size_px, duration);
    }

    fn remove_shape(&mut self, term: &str, fade: Duration) {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.term == term && !s.exiting) else {
            tracing::trace!(term, "remove for unknown shape ignored");
            return;
        };
        shape.exiting = true;
        shape.opacity.retarget(0.0, fade);
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.timers.schedule(delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.cancel(timer);
    }
}
