//! UTC calendar date/time with whole-second precision.
//!
//! `CivilTime` is the timestamp handed to the engine by every front end
//! (system clock, date parser, Unix time). Field values are not validated
//! by the numeric constructors; only [`str::parse`] checks ranges.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    SECONDS_PER_DAY, civil_from_day_number, civil_seconds, civil_to_jd, jd_to_unix, unix_to_jd,
};

/// UTC calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilTime {
    /// Proleptic Gregorian year (astronomical numbering, 0 = 1 BC).
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
    /// Second, 0-59.
    pub second: u32,
}

impl CivilTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar date.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Astronomical Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        civil_to_jd(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Civil instant nearest to a Julian Date, rounded to the whole second.
    ///
    /// Date and time come from the same rounded second count, so 23:59:59.7
    /// rolls over to 00:00:00 of the following day.
    pub fn from_jd(jd: f64) -> Self {
        let total = civil_seconds(jd);
        let day_number = (total / SECONDS_PER_DAY).floor();
        let seconds_of_day = (total - day_number * SECONDS_PER_DAY) as u32;
        let (year, month, day) = civil_from_day_number(day_number);
        Self {
            year,
            month,
            day,
            hour: seconds_of_day / 3600,
            minute: (seconds_of_day / 60) % 60,
            second: seconds_of_day % 60,
        }
    }

    pub fn from_unix(unix_seconds: i64) -> Self {
        Self::from_jd(unix_to_jd(unix_seconds))
    }

    pub fn to_unix(&self) -> i64 {
        jd_to_unix(self.to_jd())
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DDThh:mm:ssZ`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(invalid());
        }
        let year: i32 = date_parts[0].parse().map_err(|_| invalid())?;
        let month = parse_field(date_parts[1], "month", 1, 12).ok_or_else(invalid)??;
        let day = parse_field(date_parts[2], "day", 1, 31).ok_or_else(invalid)??;

        let (hour, minute, second) = match time {
            None => (0, 0, 0),
            Some(t) => {
                let parts: Vec<&str> = t.split(':').collect();
                if parts.len() != 3 {
                    return Err(invalid());
                }
                (
                    parse_field(parts[0], "hour", 0, 23).ok_or_else(invalid)??,
                    parse_field(parts[1], "minute", 0, 59).ok_or_else(invalid)??,
                    parse_field(parts[2], "second", 0, 59).ok_or_else(invalid)??,
                )
            }
        };

        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

/// `None` when the text is not a number, `Some(Err)` when it is out of range.
fn parse_field(text: &str, field: &'static str, min: u32, max: u32) -> Option<Result<u32, TimeError>> {
    let value: i64 = text.parse().ok()?;
    if value < i64::from(min) || value > i64::from(max) {
        return Some(Err(TimeError::FieldOutOfRange { field, value }));
    }
    Some(Ok(value as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = CivilTime::new(2024, 3, 20, 12, 30, 45);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert_eq!(t.second, 45);
    }

    #[test]
    fn display_iso() {
        let t = CivilTime::new(2024, 1, 15, 7, 5, 9);
        assert_eq!(t.to_string(), "2024-01-15T07:05:09Z");
    }

    #[test]
    fn jd_roundtrip() {
        let t = CivilTime::new(2000, 1, 21, 4, 41, 0);
        assert_eq!(CivilTime::from_jd(t.to_jd()), t);
    }

    #[test]
    fn from_jd_rolls_over_midnight() {
        // 23:59:59.8 on 2023-12-31
        let jd = CivilTime::new(2023, 12, 31, 23, 59, 59).to_jd() + 0.8 / SECONDS_PER_DAY;
        assert_eq!(CivilTime::from_jd(jd), CivilTime::midnight(2024, 1, 1));
    }

    #[test]
    fn unix_roundtrip() {
        let t = CivilTime::from_unix(1_763_596_800);
        assert_eq!(t, CivilTime::midnight(2025, 11, 20));
        assert_eq!(t.to_unix(), 1_763_596_800);
    }

    #[test]
    fn parse_full() {
        let t: CivilTime = "2024-03-20T12:00:05Z".parse().unwrap();
        assert_eq!(t, CivilTime::new(2024, 3, 20, 12, 0, 5));
    }

    #[test]
    fn parse_without_zone_suffix() {
        let t: CivilTime = "1999-12-31T23:59:59".parse().unwrap();
        assert_eq!(t, CivilTime::new(1999, 12, 31, 23, 59, 59));
    }

    #[test]
    fn parse_date_only() {
        let t: CivilTime = "1980-01-01".parse().unwrap();
        assert_eq!(t, CivilTime::midnight(1980, 1, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "yesterday".parse::<CivilTime>(),
            Err(TimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03-20T12:00".parse::<CivilTime>(),
            Err(TimeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_month() {
        assert_eq!(
            "2024-13-01".parse::<CivilTime>(),
            Err(TimeError::FieldOutOfRange {
                field: "month",
                value: 13
            })
        );
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilTime::new(2024, 1, 1, 23, 0, 0);
        let b = CivilTime::new(2024, 1, 2, 0, 0, 0);
        assert!(a < b);
    }
}
