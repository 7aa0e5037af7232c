//! Quarter-phase search.
//!
//! This crate provides:
//! - Mean and true (Meeus-corrected) instants of the principal phases
//! - `phase_hunt`: the quarter instants bracketing a Julian Date
//! - Brown lunation numbers
//! - Range search and next/previous search for a specific quarter

pub mod error;
pub mod hunt;
pub mod hunt_types;
pub mod lunation;
pub mod search;

pub use error::SearchError;
pub use hunt::{phase_hunt, phase_hunt_with};
pub use hunt_types::{HuntConfig, PhaseEvent, PhaseHunt, Quarter};
pub use lunation::{lunation_number, mean_phase, true_phase};
pub use search::{QuarterEvent, next_quarter, prev_quarter, search_quarters};
