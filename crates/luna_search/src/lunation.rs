//! Mean and true instants of the principal phases.
//!
//! Lunation index `k` counts synodic months from the new moon of
//! 1900 January 0.5 (JD 2415020.75933). The true-phase corrections are the
//! series from Meeus, *Astronomical Formulae for Calculators*.

use luna_core::constants::LUNATION_BASE_JD;
use luna_core::{SYNODIC_MONTH_DAYS, dcos, dsin};
use luna_time::J1900_JD;

use crate::hunt_types::Quarter;

/// Mean new moon of lunation 0.
const MEAN_NEW_MOON_1900_JD: f64 = 2_415_020.759_33;
/// Lunations per Julian century.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

/// Mean new moon of lunation `k`, with Julian centuries taken from `sdate`.
pub fn mean_phase(sdate: f64, k: i64) -> f64 {
    let t = (sdate - J1900_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    MEAN_NEW_MOON_1900_JD + SYNODIC_MONTH_DAYS * k as f64 + 0.000_117_8 * t2
        - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2)
}

/// True instant of `quarter` in lunation `k`.
pub fn true_phase(k: i64, quarter: Quarter) -> f64 {
    let k = k as f64 + quarter.fraction();
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut pt = MEAN_NEW_MOON_1900_JD + SYNODIC_MONTH_DAYS * k + 0.000_117_8 * t2
        - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2);

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mp = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    match quarter {
        Quarter::New | Quarter::Full => {
            pt += (0.1734 - 0.000_393 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
                - 0.4068 * dsin(mp)
                + 0.0161 * dsin(2.0 * mp)
                - 0.0004 * dsin(3.0 * mp)
                + 0.0104 * dsin(2.0 * f)
                - 0.0051 * dsin(m + mp)
                - 0.0074 * dsin(m - mp)
                + 0.0004 * dsin(2.0 * f + m)
                - 0.0004 * dsin(2.0 * f - m)
                - 0.0006 * dsin(2.0 * f + mp)
                + 0.0010 * dsin(2.0 * f - mp)
                + 0.0005 * dsin(m + 2.0 * mp);
        }
        Quarter::FirstQuarter | Quarter::LastQuarter => {
            pt += (0.1721 - 0.0004 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
                - 0.6280 * dsin(mp)
                + 0.0089 * dsin(2.0 * mp)
                - 0.0004 * dsin(3.0 * mp)
                + 0.0079 * dsin(2.0 * f)
                - 0.0119 * dsin(m + mp)
                - 0.0047 * dsin(m - mp)
                + 0.0003 * dsin(2.0 * f + m)
                - 0.0004 * dsin(2.0 * f - m)
                - 0.0006 * dsin(2.0 * f + mp)
                + 0.0021 * dsin(2.0 * f - mp)
                + 0.0003 * dsin(m + 2.0 * mp)
                + 0.0004 * dsin(m - 2.0 * mp)
                - 0.0003 * dsin(2.0 * m + mp);
            let quarter_correction = 0.0028 - 0.0004 * dcos(m) + 0.0003 * dcos(mp);
            if quarter == Quarter::FirstQuarter {
                pt += quarter_correction;
            } else {
                pt -= quarter_correction;
            }
        }
    }
    pt
}

/// Brown lunation number of the lunation that began with the new moon at
/// `new_moon_jd`. Lunation 1 began on 1923 January 16.
pub fn lunation_number(new_moon_jd: f64) -> i64 {
    ((new_moon_jd + 7.0 - LUNATION_BASE_JD) / SYNODIC_MONTH_DAYS).floor() as i64 + 1
}
