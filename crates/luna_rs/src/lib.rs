//! Convenience wrapper for the lunar phase engine.
//!
//! High-level functions that accept UTC calendar times directly, removing
//! the need to convert to Julian Dates or juggle per-crate error types.
//!
//! # Quick start
//!
//! ```rust
//! use luna_rs::*;
//!
//! let date: CivilTime = "2024-01-25T17:54:00Z".parse().unwrap();
//! let p = phase_at(&date).unwrap();
//! assert!(p.illuminated_fraction > 0.99);
//! println!("{}", report_at(&date, DEFAULT_FORMAT).unwrap());
//! ```

pub mod convenience;
pub mod error;

// Primary re-exports: users should only need `use luna_rs::*`
pub use convenience::{
    art_at, hunt_at, lunation_at, next_quarter_at, phase_at, phase_name_at, prev_quarter_at,
    quarters_between, report_at, state_at,
};
pub use error::LunaError;

pub use luna_core::{MoonPhase, MoonState, SYNODIC_MONTH_DAYS};
pub use luna_render::{DEFAULT_FORMAT, DEFAULT_LINES, Hemisphere, PhaseName, format_countdown};
pub use luna_search::{PhaseEvent, PhaseHunt, Quarter, QuarterEvent};
pub use luna_time::CivilTime;
