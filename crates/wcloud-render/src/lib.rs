#![forbid(unsafe_code)]

//! Rendering surfaces for wcloud.
//!
//! The layout engine never draws. It issues instructions against the
//! [`Surface`] trait: create a labeled shape, move or resize it over a
//! duration, fade it out and remove it, and schedule a timer. This crate
//! provides the trait and two implementations:
//!
//! - [`RecordingSurface`] logs every instruction, for tests and tracing.
//! - [`SceneSurface`] keeps a retained, time-advanced scene that
//!   [`SvgExporter`] turns into an SVG document.

pub mod export;
pub mod recording;
pub mod scene;
pub mod surface;

pub use export::SvgExporter;
pub use recording::{RecordingSurface, SurfaceOp};
pub use scene::{SceneSurface, ShapeSnapshot};
pub use surface::{ShapeSpec, ShapeTarget, Surface};
pub use wcloud_core::timer::TimerId;
