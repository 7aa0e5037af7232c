//! Free-text date parsing. Everything is interpreted as UTC.
//!
//! Accepted, tried in this order:
//! - `@<unix seconds>`
//! - `+HH:MM[:SS]`, `-HH:MM[:SS]`, `+Nd HH:MM`: offsets from now
//! - `dd/mm/YYYY`, `dd-Mon-YYYY`, `dd Mon YYYY`, `YYYY-MM-DD`, with an
//!   optional time of day
//! - `Wdy Mon dd HH:MM:SS YYYY` (ctime)
//! - a time of day alone, on today's date
//! - `[Wdy] Mon dd [HH:MM:SS]` in the current year

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc, Weekday,
};
use tracing::debug;

use crate::error::CliError;

const DATE_TIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    "%d %b %Y %I:%M:%S %p",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%a %b %d %H:%M:%S %Y",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%b-%Y", "%d %b %Y", "%Y-%m-%d"];

const TIME_FORMATS: &[&str] = &["%I:%M:%S %p", "%H:%M:%S", "%H:%M"];

/// Parse `text` relative to `now`.
pub fn parse_date(text: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, CliError> {
    let text = text.trim();
    let unknown = || CliError::DateParse(text.to_string());

    if let Some(secs) = text.strip_prefix('@') {
        let secs: i64 = secs.trim().parse().map_err(|_| unknown())?;
        return DateTime::from_timestamp(secs, 0).ok_or_else(unknown);
    }

    if let Some(sign) = text.chars().next().filter(|c| *c == '+' || *c == '-') {
        let offset = parse_offset(&text[1..]).ok_or_else(unknown)?;
        return if sign == '+' {
            now.checked_add_signed(offset)
        } else {
            now.checked_sub_signed(offset)
        }
        .ok_or_else(unknown);
    }

    let iso = text.strip_suffix('Z').unwrap_or(text);
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(iso, fmt) {
            debug!(text, fmt, "parsed date and time");
            return Ok(dt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            debug!(text, fmt, "parsed date");
            return Ok(d.and_time(NaiveTime::MIN).and_utc());
        }
    }
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(text, fmt) {
            debug!(text, fmt, "parsed time of day");
            return Ok(now.date_naive().and_time(t).and_utc());
        }
    }

    // Month and day without a year. A leading weekday name is not checked
    // against the date.
    let month_day = match text.split_once(' ') {
        Some((wday, rest)) if wday.parse::<Weekday>().is_ok() => rest.trim_start(),
        _ => text,
    };
    let with_year = format!("{} {month_day}", now.year());
    if let Ok(dt) = NaiveDateTime::parse_from_str(&with_year, "%Y %b %d %H:%M:%S") {
        return Ok(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(&with_year, "%Y %b %d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }

    Err(unknown())
}

/// `HH:MM[:SS]` or `Nd HH:MM` as a duration.
fn parse_offset(body: &str) -> Option<TimeDelta> {
    if body.starts_with(['+', '-']) {
        return None;
    }
    let clock = |t: NaiveTime| TimeDelta::try_seconds(i64::from(t.num_seconds_from_midnight()));
    if let Some((days, time)) = body.split_once("d ") {
        let days: i64 = days.parse().ok()?;
        let t = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
        return TimeDelta::try_days(days)?.checked_add(&clock(t)?);
    }
    NaiveTime::parse_from_str(body, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(body, "%H:%M"))
        .ok()
        .and_then(clock)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap()
    }

    fn ymd_hms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn unix_seconds() {
        assert_eq!(parse_date("@0", now()).unwrap(), ymd_hms(1970, 1, 1, 0, 0, 0));
        assert_eq!(
            parse_date("@1706205240", now()).unwrap(),
            ymd_hms(2024, 1, 25, 17, 54, 0)
        );
    }

    #[test]
    fn relative_offsets() {
        assert_eq!(parse_date("+01:30", now()).unwrap(), ymd_hms(2024, 1, 25, 13, 30, 0));
        assert_eq!(parse_date("-00:00:10", now()).unwrap(), ymd_hms(2024, 1, 25, 11, 59, 50));
        assert_eq!(parse_date("+2d 03:00", now()).unwrap(), ymd_hms(2024, 1, 27, 15, 0, 0));
        assert!(parse_date("++01:00", now()).is_err());
    }

    #[test]
    fn day_month_year() {
        assert_eq!(parse_date("20/07/1969", now()).unwrap(), ymd_hms(1969, 7, 20, 0, 0, 0));
        assert_eq!(
            parse_date("20/07/1969 20:17:00", now()).unwrap(),
            ymd_hms(1969, 7, 20, 20, 17, 0)
        );
        assert_eq!(parse_date("6-Jan-2000", now()).unwrap(), ymd_hms(2000, 1, 6, 0, 0, 0));
        assert_eq!(
            parse_date("06-Jan-2000 18:14:00", now()).unwrap(),
            ymd_hms(2000, 1, 6, 18, 14, 0)
        );
    }

    #[test]
    fn day_name_year_with_times() {
        assert_eq!(
            parse_date("25 Jan 2024 05:54:00 PM", now()).unwrap(),
            ymd_hms(2024, 1, 25, 17, 54, 0)
        );
        assert_eq!(
            parse_date("25 Jan 2024 17:54", now()).unwrap(),
            ymd_hms(2024, 1, 25, 17, 54, 0)
        );
        assert_eq!(parse_date("25 jan 2024", now()).unwrap(), ymd_hms(2024, 1, 25, 0, 0, 0));
    }

    #[test]
    fn ctime_and_iso() {
        assert_eq!(
            parse_date("Sun Jul 20 20:17:00 1969", now()).unwrap(),
            ymd_hms(1969, 7, 20, 20, 17, 0)
        );
        assert_eq!(
            parse_date("2000-01-06T18:14:00Z", now()).unwrap(),
            ymd_hms(2000, 1, 6, 18, 14, 0)
        );
        assert_eq!(parse_date("2000-01-06", now()).unwrap(), ymd_hms(2000, 1, 6, 0, 0, 0));
    }

    #[test]
    fn time_only_is_today() {
        assert_eq!(parse_date("18:30", now()).unwrap(), ymd_hms(2024, 1, 25, 18, 30, 0));
        assert_eq!(parse_date("06:30:15 AM", now()).unwrap(), ymd_hms(2024, 1, 25, 6, 30, 15));
    }

    #[test]
    fn month_day_current_year() {
        assert_eq!(parse_date("Mar 10", now()).unwrap(), ymd_hms(2024, 3, 10, 0, 0, 0));
        assert_eq!(
            parse_date("Mar 10 09:02:45", now()).unwrap(),
            ymd_hms(2024, 3, 10, 9, 2, 45)
        );
    }

    #[test]
    fn weekday_month_day_current_year() {
        assert_eq!(parse_date("Sun Jul 20", now()).unwrap(), ymd_hms(2024, 7, 20, 0, 0, 0));
        assert_eq!(parse_date("Sat Jul 20", now()).unwrap(), ymd_hms(2024, 7, 20, 0, 0, 0));
    }

    #[test]
    fn garbage_rejected() {
        for text in [
            "",
            "tomorrow",
            "32/01/2024",
            "@abc",
            "+1 day",
            "+200000000000000d 00:00",
            "-9223372036854775807d 00:00",
            "Sun 20",
        ] {
            assert!(
                matches!(parse_date(text, now()), Err(CliError::DateParse(_))),
                "{text:?}"
            );
        }
    }
}
