#![forbid(unsafe_code)]

//! Word-cloud layout and transition engine.
//!
//! [`compute_layout`] turns term frequencies into sized, positioned words.
//! [`CloudEngine`] adds the stateful part: it diffs each new layout against
//! the previous one and drives a [`Surface`](wcloud_render::Surface) with
//! enter, update and exit instructions.
//!
//! # Example
//!
//! ```
//! use wcloud_layout::{CloudEngine, RenderState};
//! use wcloud_render::RecordingSurface;
//!
//! let engine = CloudEngine::default();
//! let mut surface = RecordingSurface::new();
//! let (words, state) = engine.render_text(
//!     "the cat sat on the mat the cat ran",
//!     RenderState::new(),
//!     &mut surface,
//! );
//! assert_eq!(words[0].term.as_str(), "cat");
//! assert_eq!(words[0].font_size_px, 56.0);
//! assert_eq!(surface.created(), vec!["cat", "sat", "mat", "ran"]);
//! assert!(state.pending_timer().is_some());
//! ```

pub mod config;
pub mod engine;
pub mod footprint;
pub mod placement;
pub mod reconcile;
pub mod scale;
pub mod state;

pub use config::{AnimationConfig, DEFAULT_MAX_WORDS, EngineConfig, FontRange, LayoutConfig};
pub use engine::CloudEngine;
pub use footprint::{Footprint, FootprintPolicy, HeuristicFootprint, MeasuredFootprint};
pub use placement::{CloudScales, LayoutResult, RankedWord, compute_layout, rank_top_k};
pub use reconcile::{KeyedDiff, Reconciliation, Update, keyed_diff, reconcile};
pub use scale::{Degenerate, LinearScale};
pub use state::RenderState;
