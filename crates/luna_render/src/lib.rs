//! Human-facing renderings of the Moon's phase.
//!
//! This crate provides:
//! - Eight-way phase names with northern and southern emoji
//! - `%`-directive format strings for one-line phase reports
//! - An ASCII-art moon with the terminator drawn at the current phase

mod backgrounds;

pub mod ascii;
pub mod error;
pub mod format;
pub mod names;

pub use ascii::{DEFAULT_LINES, format_countdown, render_moon, render_moon_at};
pub use error::RenderError;
pub use format::{DEFAULT_FORMAT, format_phase};
pub use names::{Hemisphere, PhaseName};
