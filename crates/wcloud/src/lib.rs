#![forbid(unsafe_code)]

//! Animated word-cloud public facade crate.
//!
//! Re-exports the common types of the internal crates and offers a prelude
//! for day-to-day usage.
//!
//! ```
//! use wcloud::prelude::*;
//!
//! let engine = CloudEngine::default();
//! let mut scene = SceneSurface::new(CanvasSpec::DEFAULT);
//! let (words, mut state) = engine.render_text("rust rust cloud", RenderState::new(), &mut scene);
//! for id in scene.advance_until_idle(std::time::Duration::from_millis(16)) {
//!     state.on_timer(id);
//! }
//! assert_eq!(words[0].term.as_str(), "rust");
//! assert!(SvgExporter::default().export(&scene).contains(">cloud</text>"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use wcloud_core::animation::{Animation, Tween};
pub use wcloud_core::timer::{TimerId, TimerQueue};
pub use wcloud_core::{CanvasSpec, Interval, Margins};

// --- Text re-exports -------------------------------------------------------

pub use wcloud_text::{
    FrequencyEntry, StopWords, Term, WidthCache, extract, extract_opt, extract_with,
    normalize_tokens,
};

// --- Render re-exports -----------------------------------------------------

pub use wcloud_render::{
    RecordingSurface, SceneSurface, ShapeSnapshot, ShapeSpec, ShapeTarget, Surface, SurfaceOp,
    SvgExporter,
};

// --- Layout re-exports -----------------------------------------------------

pub use wcloud_layout::{
    AnimationConfig, CloudEngine, EngineConfig, FontRange, Footprint, FootprintPolicy,
    HeuristicFootprint, LayoutConfig, LayoutResult, MeasuredFootprint, Reconciliation,
    RenderState, compute_layout, reconcile,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CanvasSpec, CloudEngine, EngineConfig, FrequencyEntry, LayoutConfig, LayoutResult,
        RenderState, SceneSurface, Surface, SvgExporter, Term, extract,
    };

    pub use crate::{core, layout, render, text};
}

pub use wcloud_core as core;
pub use wcloud_layout as layout;
pub use wcloud_render as render;
pub use wcloud_text as text;
