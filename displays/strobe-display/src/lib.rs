//! Parallel-bus panel driver and incremental rendering engine
//!
//! This crate turns logical drawing requests (pixel, line, glyph, widget)
//! into the exact word sequence a write-only, sequentially-addressed panel
//! controller expects, while issuing as few bus words as possible.
//!
//! # Layers
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  widget: Label (diff-update), Picture     │
//! └───────────────────────────────────────────┘
//!                     │  Canvas
//!                     ▼
//! ┌───────────────────────────────────────────┐
//! │  driver: pixel, line, glyph, bulk fill    │
//! └───────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌───────────────────────────────────────────┐
//! │  window addressing + coordinate transform │
//! └───────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌───────────────────────────────────────────┐
//! │  bus: BusChannel (D[n], DC, WR, CS, RST)  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! The driver holds no widget state. All drawing must happen from a single
//! execution context: the controller keeps the active window as global state
//! between calls and the driver takes no locks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "test-utils"))]
extern crate std;

pub mod bus;
pub mod canvas;
pub mod color;
pub mod command;
pub mod driver;
pub mod error;
pub mod font;
pub mod geometry;
pub mod line;
pub mod widget;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export key types
pub use bus::{BusChannel, ParallelBus};
pub use canvas::{BackgroundMode, Canvas, TextStyle};
pub use color::Rgb565;
pub use driver::{Display, FillJob, InitTiming};
pub use error::{DisplayError, StateViolation};
pub use font::{FontBlob, Glyph, GlyphSource, SeekFont, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use geometry::{Geometry, Rotation, Window};
pub use line::{Bresenham, Point};
pub use widget::{Bitmap, Label, Picture, Visibility};
