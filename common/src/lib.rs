//! Arc watch face: platform-agnostic core.
//!
//! Renders the time of day as a radial ring of three colored segments
//! (seconds, minutes, hours) with blended overlaps, four marker dots and a
//! digital time/date readout. Everything here draws through
//! `embedded-graphics`, so the face runs on any `DrawTarget<Color = Rgb565>`:
//!
//! - [`colors`]: RGB565 color constants
//! - [`config`]: Display, angle and layout constants
//! - [`palette`]: Theme-aware palette and the overlap color mixer
//! - [`segment`]: Time segments and the angle sorter
//! - [`ring`]: Ring slices, arc drawing and marker dots
//! - [`clock`]: Clock controller, hour format and the second ticker
//! - [`styles`]: Pre-computed text styles
//! - [`pages`]: Page navigation enum
//! - [`log_buffer`]: Leveled log ring and `log_*!` macros
//! - [`widgets`]: Toast overlays
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. Text lives in fixed-capacity
//! `heapless` buffers and nothing allocates at runtime.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod config;
pub mod log_buffer;
pub mod pages;
pub mod palette;
pub mod ring;
pub mod segment;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use clock::{ClockFace, HourFormat, SecondTicker};
pub use colors::*;
pub use config::*;
pub use log_buffer::{LogBuffer, LogEntry, LogLevel};
pub use pages::Page;
pub use palette::{ColorDepth, Palette};
