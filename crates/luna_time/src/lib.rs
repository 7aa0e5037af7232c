//! Civil calendar ↔ Julian Date conversions.
//!
//! This crate provides:
//! - Gregorian calendar day numbers and astronomical Julian Dates
//! - Time-of-day extraction from a Julian Date
//! - Unix timestamp ↔ Julian Date conversion
//! - A `CivilTime` type for UTC calendar instants with whole-second precision

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilTime;
pub use error::TimeError;
pub use julian::{
    J1900_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, civil_day_number, civil_to_jd, jd_to_civil,
    jd_to_time, jd_to_unix, unix_to_jd,
};
