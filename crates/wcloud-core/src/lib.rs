#![forbid(unsafe_code)]

//! Core: canvas geometry, easing and animation primitives, and timers.

pub mod animation;
pub mod geometry;
pub mod timer;

pub use geometry::{CanvasSpec, Interval, Margins};
