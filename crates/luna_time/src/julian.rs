//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Astronomical Julian Dates start at noon; civil days start at midnight.
//! Every crossing between the two conventions adds or subtracts 0.5 day.
//!
//! Day-number algorithm: the March-based Gregorian scheme from Meeus,
//! *Astronomical Formulae for Calculators*, with integer divisions that
//! truncate toward zero.

/// Julian Date of 1900 January 0.5 (the epoch of the lunation polynomials).
pub const J1900_JD: f64 = 2_415_020.0;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Day-number offset of the March-based calendar (1 March, year 0).
const MARCH_BASE_DAY: i64 = 1_721_119;

/// Civil (midnight-based) day number for a Gregorian calendar date.
///
/// Day and month overflow are not checked: `(2024, 1, 32)` yields the day
/// after `(2024, 1, 31)`, and a month of 13 yields a meaningless number.
pub fn civil_day_number(year: i32, month: u32, day: u32) -> i64 {
    let mut y = i64::from(year);
    let mut m = i64::from(month);
    if m > 2 {
        m -= 3;
    } else {
        m += 9;
        y -= 1;
    }
    let century = y / 100;
    y -= 100 * century;
    i64::from(day) + (century * 146_097) / 4 + (y * 1461) / 4 + (m * 153 + 2) / 5 + MARCH_BASE_DAY
}

/// Astronomical Julian Date for a UTC civil date and time of day.
pub fn civil_to_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let day_seconds = f64::from(second) + 60.0 * (f64::from(minute) + 60.0 * f64::from(hour));
    (civil_day_number(year, month, day) as f64 - 0.5) + day_seconds / SECONDS_PER_DAY
}

/// Calendar date `(year, month, day)` containing an astronomical Julian Date.
pub fn jd_to_civil(jd: f64) -> (i32, u32, u32) {
    civil_from_day_number((jd + 0.5).floor())
}

/// Time of day `(hour, minute, second)` of an astronomical Julian Date.
///
/// Seconds are rounded to the nearest whole second, so a JD built with
/// [`civil_to_jd`] maps back to the exact clock time it came from.
pub fn jd_to_time(jd: f64) -> (u32, u32, u32) {
    let seconds_of_day = civil_seconds(jd).rem_euclid(SECONDS_PER_DAY) as u32;
    (
        seconds_of_day / 3600,
        (seconds_of_day / 60) % 60,
        seconds_of_day % 60,
    )
}

/// Julian Date for a Unix timestamp in seconds.
pub fn unix_to_jd(unix_seconds: i64) -> f64 {
    unix_seconds as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Unix timestamp (whole seconds) for a Julian Date.
pub fn jd_to_unix(jd: f64) -> i64 {
    ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64
}

/// Seconds elapsed since civil midnight of the JD epoch, rounded.
pub(crate) fn civil_seconds(jd: f64) -> f64 {
    ((jd + 0.5) * SECONDS_PER_DAY).round()
}

/// Inverse of [`civil_day_number`], taking the day number as a float.
pub(crate) fn civil_from_day_number(day_number: f64) -> (i32, u32, u32) {
    let mut j = day_number - MARCH_BASE_DAY as f64;
    let mut y = ((4.0 * j - 1.0) / 146_097.0).floor();
    j = 4.0 * j - (1.0 + 146_097.0 * y);
    let mut d = (j / 4.0).floor();
    j = ((4.0 * d + 3.0) / 1461.0).floor();
    d = (4.0 * d + 3.0) - 1461.0 * j;
    d = ((d + 4.0) / 4.0).floor();
    let mut m = ((5.0 * d - 3.0) / 153.0).floor();
    d = 5.0 * d - (3.0 + 153.0 * m);
    d = ((d + 5.0) / 5.0).floor();
    y = 100.0 * y + j;
    if m < 10.0 {
        m += 3.0;
    } else {
        m -= 9.0;
        y += 1.0;
    }
    (y as i32, m as u32, d as u32)
}
