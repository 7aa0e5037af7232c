//! End-to-end rendering against computed phases.

use luna_core::phase;
use luna_render::{DEFAULT_FORMAT, PhaseName, format_phase, render_moon_at};
use luna_time::civil_to_jd;

/// Apollo 11 landing, 1969-Jul-20 20:17 UTC: a waxing crescent.
#[test]
fn apollo_11_report() {
    let jd = civil_to_jd(1969, 7, 20, 20, 17, 0);
    let p = phase(jd).unwrap();
    assert_eq!(PhaseName::of(&p), PhaseName::WaxingCrescent);
    assert_eq!(
        format_phase(DEFAULT_FORMAT, jd, &p).unwrap(),
        "Waxing Crescent: 🌒 (33.0%)"
    );
    assert_eq!(format_phase("%a days, JD %J", jd, &p).unwrap(), "5.8 days, JD 2440423.3");
}

#[test]
fn full_moon_jan_2024_report() {
    let jd = civil_to_jd(2024, 1, 25, 17, 54, 0);
    let p = phase(jd).unwrap();
    assert_eq!(format_phase("%p %s", jd, &p).unwrap(), "Full 🌕");
}

/// The morning after the 2024-Jan-25 full moon.
#[test]
fn art_after_full_moon() {
    let jd = civil_to_jd(2024, 1, 26, 0, 0, 0);
    let art = render_moon_at(23, jd).unwrap();
    let rows: Vec<&str> = art.lines().collect();
    assert_eq!(rows.len(), 23);
    assert!(rows[9].ends_with("\t Full Moon +"), "{:?}", rows[9]);
    assert!(rows[10].ends_with("\t 0  6:05:16"), "{:?}", rows[10]);
    assert!(rows[11].ends_with("\t Last Quarter -"), "{:?}", rows[11]);
    assert!(rows[12].ends_with("\t 7 23:20:08"), "{:?}", rows[12]);
}

#[test]
fn art_rejects_zero_lines() {
    assert!(render_moon_at(0, 2_451_545.0).is_err());
}
