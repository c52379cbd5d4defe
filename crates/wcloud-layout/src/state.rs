#![forbid(unsafe_code)]

//! State carried from one render to the next.

use wcloud_core::timer::TimerId;

use crate::placement::LayoutResult;

/// What the engine remembers between renders.
///
/// Owned by the host and threaded through
/// [`CloudEngine::render`](crate::CloudEngine::render).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    previous: Vec<LayoutResult>,
    first_paint_done: bool,
    pending_first_paint: Option<TimerId>,
}

impl RenderState {
    /// State before the first render.
    pub fn new() -> Self {
        Self::default()
    }

    /// The batch produced by the last render.
    pub fn previous(&self) -> &[LayoutResult] {
        &self.previous
    }

    /// The last rendered layout of `term`.
    pub fn get(&self, term: &str) -> Option<&LayoutResult> {
        self.previous.iter().find(|r| r.term.as_str() == term)
    }

    /// Whether the first-paint settle delay has elapsed.
    ///
    /// Before it has, entering words grow from a tiny size; afterwards
    /// they appear at full size and slide into place.
    pub fn is_first_paint_done(&self) -> bool {
        self.first_paint_done
    }

    /// The settle timer still waiting to fire, if any.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending_first_paint
    }

    /// Notify the state that a surface timer fired.
    ///
    /// Returns `true` if `id` was the pending settle timer, in which case
    /// the first paint is now done. Unknown or stale ids are ignored.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending_first_paint != Some(id) {
            tracing::trace!(timer = %id, "ignoring unrelated timer");
            return false;
        }
        self.pending_first_paint = None;
        self.first_paint_done = true;
        tracing::debug!(timer = %id, "first paint settled");
        true
    }

    pub(crate) fn set_previous(&mut self, batch: Vec<LayoutResult>) {
        self.previous = batch;
    }

    pub(crate) fn set_pending_timer(&mut self, id: TimerId) {
        self.pending_first_paint = Some(id);
    }

    pub(crate) fn take_pending_timer(&mut self) -> Option<TimerId> {
        self.pending_first_paint.take()
    }
}
