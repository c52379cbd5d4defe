#![forbid(unsafe_code)]

//! One-shot timers driven by explicit time advancement.
//!
//! A [`TimerQueue`] never sleeps or spawns: the owner advances it with
//! [`TimerQueue::advance`] and receives the ids of timers whose deadline has
//! passed. Consumers match ids against what they scheduled, so a timer that
//! outlives its requester is harmless.
//!
//! # Invariants
//!
//! 1. Ids are never reused within one queue.
//! 2. A timer fires at most once; cancelled timers never fire.
//! 3. Timers fired by one `advance` call are returned in deadline order,
//!    ties broken by scheduling order.

use std::fmt;
use std::time::Duration;

/// Identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Construct an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TimerId,
    deadline: Duration,
}

/// A queue of one-shot timers on a virtual clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer to fire after `delay`.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            deadline: self.now.saturating_add(delay),
        });
        tracing::trace!(%id, delay_ms = delay.as_millis() as u64, "timer scheduled");
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired, was
    /// already cancelled, or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let removed = self.pending.len() != before;
        if removed {
            tracing::trace!(%id, "timer cancelled");
        }
        removed
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the clock by `dt` and return the timers that fired.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerId> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;
        let mut fired: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.deadline <= now {
                fired.push(*p);
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|p| (p.deadline, p.id));
        fired
            .into_iter()
            .map(|p| {
                tracing::trace!(id = %p.id, "timer fired");
                p.id
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_950: Duration = Duration::from_millis(950);

    #[test]
    fn fires_after_delay() {
        let mut q = TimerQueue::new();
        let id = q.schedule(MS_950);
        assert!(q.advance(Duration::from_millis(900)).is_empty());
        assert_eq!(q.advance(Duration::from_millis(50)), vec![id]);
        assert!(q.is_empty());
    }

    #[test]
    fn fires_once() {
        let mut q = TimerQueue::new();
        let id = q.schedule(MS_100);
        assert_eq!(q.advance(MS_100), vec![id]);
        assert!(q.advance(MS_100).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let id = q.schedule(MS_100);
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert!(q.advance(MS_950).is_empty());
    }

    #[test]
    fn fired_in_deadline_order() {
        let mut q = TimerQueue::new();
        let late = q.schedule(MS_950);
        let early = q.schedule(MS_100);
        let tie = q.schedule(MS_100);
        assert_eq!(q.advance(Duration::from_secs(1)), vec![early, tie, late]);
    }

    #[test]
    fn ids_are_unique() {
        let mut q = TimerQueue::new();
        let a = q.schedule(MS_100);
        q.advance(MS_100);
        let b = q.schedule(MS_100);
        assert_ne!(a, b);
    }

    #[test]
    fn clock_accumulates_advances() {
        let mut q = TimerQueue::new();
        q.schedule(MS_950);
        q.advance(MS_100);
        assert_eq!(q.now(), MS_100);
        assert!(q.advance(Duration::from_millis(849)).is_empty());
        assert_eq!(q.advance(Duration::from_millis(1)).len(), 1);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut q = TimerQueue::new();
        let id = q.schedule(Duration::ZERO);
        assert_eq!(q.len(), 1);
        assert_eq!(q.advance(Duration::ZERO), vec![id]);
    }

    #[test]
    fn display_format() {
        assert_eq!(TimerId::from_raw(7).to_string(), "timer#7");
        assert_eq!(TimerId::from_raw(7).raw(), 7);
    }
}
