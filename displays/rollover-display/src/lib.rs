//! Face rendering components for Rollover
//!
//! This crate provides:
//! - `ClockFace`, the tick driver that turns wall-clock readings into
//!   numbered face updates
//! - `Face`, the renderer-side cache that applies updates in tick order
//! - `FaceBackend` trait for anything that can show the three digit layers
//! - `CanvasBackend`, a `FaceBackend` painting onto an `embedded-graphics`
//!   draw target
//! - Face geometry and the linear slide animation
//!
//! # Architecture
//!
//! ```text
//! clock source ─▶ ClockFace ─▶ FaceUpdate ─▶ Face ─▶ FaceBackend ─▶ display
//!                 (resolve +                 (order,  (CanvasBackend,
//!                  engine)                    diff)    ...)
//! ```
//!
//! The display driver only ever sees glyph changes and slide start/reset
//! requests; all digit logic stays in `rollover-core`.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod canvas;
pub mod clock;
pub mod face;
pub mod layout;
pub mod slide;

// Re-export key types
pub use backend::{DisplayError, FaceBackend};
pub use canvas::CanvasBackend;
pub use clock::ClockFace;
pub use face::{Applied, Face, FaceError, FaceUpdate};
pub use layout::{FACE_HEIGHT, FACE_WIDTH};
pub use slide::{SlideAnimation, SLIDE_DURATION_MS};
