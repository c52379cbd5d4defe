#![forbid(unsafe_code)]

//! The cloud engine: layout, reconcile, then drive a surface.
//!
//! Each render computes the new top-K layout, diffs it against the previous
//! batch by term, and issues instructions:
//!
//! | Phase | Entering | Updating | Exiting |
//! |-------|----------|----------|---------|
//! | first paint | create tiny, grow to size | transition | fade out |
//! | steady | create at size, transition | transition | fade out |
//!
//! The first paint ends when the host reports the settle timer fired via
//! [`RenderState::on_timer`].

use wcloud_render::{ShapeSpec, ShapeTarget, Surface};
use wcloud_text::FrequencyEntry;

use crate::config::EngineConfig;
use crate::footprint::{FootprintPolicy, HeuristicFootprint};
use crate::placement::{LayoutResult, compute_layout};
use crate::reconcile::reconcile;
use crate::state::RenderState;

/// Lays out word frequencies and animates them on a [`Surface`].
pub struct CloudEngine {
    config: EngineConfig,
    footprint: Box<dyn FootprintPolicy>,
}

impl std::fmt::Debug for CloudEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for CloudEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CloudEngine {
    /// An engine using [`HeuristicFootprint`].
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            footprint: Box::new(HeuristicFootprint::default()),
        }
    }

    /// Replace the footprint policy (builder).
    #[must_use]
    pub fn with_footprint(mut self, footprint: impl FootprintPolicy + 'static) -> Self {
        self.footprint = Box::new(footprint);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Layout without touching any surface.
    pub fn layout(&self, entries: &[FrequencyEntry]) -> Vec<LayoutResult> {
        compute_layout(entries, &self.config.layout, self.footprint.as_ref())
    }

    /// Render `entries` onto `surface`, returning the new layout and state.
    ///
    /// Never fails: empty input fades out every drawn word.
    pub fn render<S: Surface + ?Sized>(
        &self,
        entries: &[FrequencyEntry],
        mut state: RenderState,
        surface: &mut S,
    ) -> (Vec<LayoutResult>, RenderState) {
        let results = self.layout(entries);
        let anim = &self.config.animation;
        let first_paint = !state.is_first_paint_done();

        {
            let diff = reconcile(state.previous(), &results);
            tracing::debug!(
                entries = entries.len(),
                shown = results.len(),
                entering = diff.enter.len(),
                updating = diff.update.len(),
                exiting = diff.exit.len(),
                first_paint,
                "render"
            );

            for gone in &diff.exit {
                tracing::trace!(term = %gone.term, "exit");
                surface.remove_shape(gone.term.as_str(), anim.exit_fade);
            }

            for word in &diff.enter {
                let font_size_px = if first_paint {
                    anim.initial_font_px
                } else {
                    word.font_size_px
                };
                tracing::trace!(term = %word.term, x = word.x, y = word.y, "enter");
                surface.create_shape(ShapeSpec {
                    term: word.term.to_string(),
                    x: word.x,
                    y: word.y,
                    font_size_px,
                    opacity: anim.opacity,
                });
            }

            if first_paint {
                for word in diff.enter.iter().copied().chain(diff.update.iter().map(|u| u.next)) {
                    surface.update_shape(word.term.as_str(), target(word), anim.transition);
                }
            } else {
                for word in &results {
                    surface.update_shape(word.term.as_str(), target(word), anim.transition);
                }
            }
        }

        if first_paint && !results.is_empty() && state.pending_timer().is_none() {
            let id = surface.schedule(anim.settle_delay);
            tracing::debug!(timer = %id, delay_ms = anim.settle_delay.as_millis() as u64, "first paint timer scheduled");
            state.set_pending_timer(id);
        }

        state.set_previous(results.clone());
        (results, state)
    }

    /// Render the term frequencies of `text` using the English stop words.
    pub fn render_text<S: Surface + ?Sized>(
        &self,
        text: &str,
        state: RenderState,
        surface: &mut S,
    ) -> (Vec<LayoutResult>, RenderState) {
        self.render(&wcloud_text::extract(text), state, surface)
    }

    /// Detach from a surface: cancel the pending settle timer, if any.
    pub fn teardown<S: Surface + ?Sized>(&self, state: &mut RenderState, surface: &mut S) {
        if let Some(id) = state.take_pending_timer() {
            tracing::debug!(timer = %id, "cancelling first paint timer");
            surface.cancel(id);
        }
    }
}

fn target(word: &LayoutResult) -> ShapeTarget {
    ShapeTarget {
        x: word.x,
        y: word.y,
        font_size_px: word.font_size_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tracing_test::traced_test;
    use wcloud_render::{RecordingSurface, SurfaceOp};

    fn entries(pairs: &[(&str, u32)]) -> Vec<FrequencyEntry> {
        pairs.iter().map(|&(t, c)| FrequencyEntry::new(t, c)).collect()
    }

    #[test]
    fn first_paint_creates_tiny_then_grows() {
        let engine = CloudEngine::default();
        let mut surface = RecordingSurface::new();
        let (results, state) = engine.render(&entries(&[("hello", 1)]), RenderState::new(), &mut surface);

        assert_eq!(results.len(), 1);
        let ops = surface.ops();
        assert_eq!(ops.len(), 3);
        match &ops[0] {
            SurfaceOp::Create(spec) => {
                assert_eq!(spec.term, "hello");
                assert_eq!(spec.font_size_px, 1.0);
                assert_eq!((spec.x, spec.y), (500.0, 204.0));
                assert_eq!(spec.opacity, 0.9);
            }
            other => panic!("expected create, got {other:?}"),
        }
        match &ops[1] {
            SurfaceOp::Update { term, target, duration } => {
                assert_eq!(term, "hello");
                assert_eq!(target.font_size_px, 22.0);
                assert_eq!(*duration, Duration::from_millis(900));
            }
            other => panic!("expected update, got {other:?}"),
        }
        assert!(matches!(
            ops[2],
            SurfaceOp::Schedule { delay, .. } if delay == Duration::from_millis(950)
        ));
        assert!(state.pending_timer().is_some());
        assert!(!state.is_first_paint_done());
    }

    #[test]
    fn empty_mount_schedules_nothing() {
        let engine = CloudEngine::default();
        let mut surface = RecordingSurface::new();
        let (results, state) = engine.render(&[], RenderState::new(), &mut surface);
        assert!(results.is_empty());
        assert!(surface.ops().is_empty());
        assert_eq!(state.pending_timer(), None);
    }

    #[test]
    fn steady_phase_creates_at_size() {
        let engine = CloudEngine::default();
        let mut surface = RecordingSurface::new();
        let (_, mut state) = engine.render(&entries(&[("a", 1)]), RenderState::new(), &mut surface);
        let fired = surface.advance(Duration::from_millis(950));
        assert!(state.on_timer(fired[0]));
        surface.take_ops();

        let (_, _) = engine.render(&entries(&[("a", 2), ("b", 1)]), state, &mut surface);
        match &surface.ops()[0] {
            SurfaceOp::Create(spec) => {
                assert_eq!(spec.term, "b");
                assert_eq!(spec.font_size_px, 22.0);
            }
            other => panic!("expected create, got {other:?}"),
        }
        assert_eq!(surface.updated(), vec!["a", "b"]);
        assert_eq!(surface.pending_timers(), 0);
    }

    #[test]
    fn teardown_cancels_pending_timer() {
        let engine = CloudEngine::default();
        let mut surface = RecordingSurface::new();
        let (_, mut state) = engine.render(&entries(&[("a", 1)]), RenderState::new(), &mut surface);
        let id = state.pending_timer().expect("timer scheduled");
        engine.teardown(&mut state, &mut surface);
        assert_eq!(surface.ops().last(), Some(&SurfaceOp::Cancel(id)));
        assert_eq!(state.pending_timer(), None);
        assert!(surface.advance(Duration::from_secs(5)).is_empty());
        assert!(!state.is_first_paint_done());
    }

    #[test]
    fn custom_footprint_policy() {
        let engine = CloudEngine::default()
            .with_footprint(|_: &str, _: f64| crate::footprint::Footprint::new(460.0, 0.0));
        let out = engine.layout(&entries(&[("a", 2), ("b", 1)]));
        assert!(out.iter().all(|r| r.x == 500.0));
    }

    #[test]
    #[traced_test]
    fn logs_render_summary() {
        let engine = CloudEngine::default();
        let mut surface = RecordingSurface::new();
        engine.render_text("the cat sat on the mat", RenderState::new(), &mut surface);
        assert!(logs_contain("entering=3"));
        assert!(logs_contain("first_paint=true"));
    }
}
