#![forbid(unsafe_code)]

//! A surface that records instructions instead of drawing.
//!
//! Used by tests to assert on exactly what the engine asked for, and by the
//! CLI's `--trace-ops` mode. Timers run on a virtual clock advanced with
//! [`RecordingSurface::advance`].

use std::time::Duration;

use wcloud_core::timer::{TimerId, TimerQueue};

use crate::surface::{ShapeSpec, ShapeTarget, Surface};

/// One recorded surface instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Create(ShapeSpec),
    Update {
        term: String,
        target: ShapeTarget,
        duration: Duration,
    },
    Remove {
        term: String,
        fade: Duration,
    },
    Schedule {
        id: TimerId,
        delay: Duration,
    },
    Cancel(TimerId),
}

impl SurfaceOp {
    /// The shape term this op targets, if any.
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Create(spec) => Some(spec.term.as_str()),
            Self::Update { term, .. } | Self::Remove { term, .. } => Some(term.as_str()),
            Self::Schedule { .. } | Self::Cancel(_) => None,
        }
    }
}

/// Instruction log plus a virtual timer queue.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    timers: TimerQueue,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All ops recorded since creation or the last [`take_ops`](Self::take_ops).
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the op log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Terms created, in instruction order.
    pub fn created(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Create(spec) => Some(spec.term.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Terms updated, in instruction order.
    pub fn updated(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Update { term, .. } => Some(term.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Terms removed, in instruction order.
    pub fn removed(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Remove { term, .. } => Some(term.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of timers still pending.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Advance the virtual clock and return timers that fired.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        self.timers.advance(dt)
    }
}

impl Surface for RecordingSurface {
    fn create_shape(&mut self, shape: ShapeSpec) {
        self.ops.push(SurfaceOp::Create(shape));
    }

    fn update_shape(&mut self, term: &str, target: ShapeTarget, duration: Duration) {
        self.ops.push(SurfaceOp::Update {
            term: term.to_owned(),
            target,
            duration,
        });
    }

    fn remove_shape(&mut self, term: &str, fade: Duration) {
        self.ops.push(SurfaceOp::Remove {
            term: term.to_owned(),
            fade,
        });
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.timers.schedule(delay);
        self.ops.push(SurfaceOp::Schedule { id, delay });
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.cancel(timer);
        self.ops.push(SurfaceOp::Cancel(timer));
    }
}
