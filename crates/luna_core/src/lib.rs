//! Lunar phase engine.
//!
//! Computes the apparent phase of the Moon for an astronomical Julian Date
//! using the low-precision Sun/Moon theory from Duffett-Smith, *Practical
//! Astronomy With Your Calculator* (2nd ed.), with elements at epoch
//! 1980 January 0.0.
//!
//! This crate provides:
//! - A Newton–Raphson solver for Kepler's equation
//! - Sun ecliptic longitude and Moon longitude with periodic corrections
//! - Phase fraction, illuminated fraction and age of the Moon
//! - Extended state: distances and angular diameters of Sun and Moon
//!
//! Every function is a pure function of its arguments; nothing is cached.

pub mod angle;
pub mod constants;
pub mod error;
pub mod kepler;
pub mod phase;
pub mod position;
pub mod state;

pub use angle::{dcos, dsin, fixangle};
pub use constants::{HALF_SYNODIC_MONTH_DAYS, SYNODIC_MONTH_DAYS};
pub use error::CoreError;
pub use kepler::{KEPLER_TOLERANCE_RAD, KeplerConfig, solve_kepler, solve_kepler_with};
pub use phase::{MoonPhase, phase, phase_with};
pub use position::{SolarLunarPosition, compute_longitudes, compute_longitudes_with};
pub use state::{MoonState, moon_state, moon_state_with};
