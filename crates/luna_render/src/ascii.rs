//! ASCII-art moon.
//!
//! The disc is drawn one text row at a time. Each row spans the chord of a
//! circle (stretched horizontally by the character aspect ratio); the
//! terminator pulls one edge of the chord in by `-cos(2π·phase)`. Lit
//! columns are copied from a canned full-moon background when one exists
//! for the requested height, and filled with `@` otherwise.

use std::f64::consts::PI;

use luna_core::{MoonPhase, phase};
use luna_search::{PhaseHunt, phase_hunt};

use crate::backgrounds::background;
use crate::error::RenderError;

/// Height used when none is given.
pub const DEFAULT_LINES: usize = 23;

/// Character height over width. The canned backgrounds assume 0.5.
const ASPECT_RATIO: f64 = 0.5;

/// Annotations are only drawn beside short moons.
const MAX_ANNOTATED_LINES: usize = 27;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Render the Moon at `jd` with the given height.
pub fn render_moon_at(lines: usize, jd: f64) -> Result<String, RenderError> {
    let phase = phase(jd)?;
    let hunt = phase_hunt(jd)?;
    render_moon(lines, jd, &phase, &hunt)
}

/// Render a precomputed phase and hunt.
///
/// Rows are newline-terminated. Heights up to 27 carry the previous and
/// next quarter with countdowns beside the middle rows.
pub fn render_moon(
    lines: usize,
    jd: f64,
    phase: &MoonPhase,
    hunt: &PhaseHunt,
) -> Result<String, RenderError> {
    if lines == 0 {
        return Err(RenderError::InvalidHeight(lines));
    }

    let angphase = phase.phase_fraction * 2.0 * PI;
    let mcap = -angphase.cos();
    let yrad = lines as f64 / 2.0;
    let xrad = yrad / ASPECT_RATIO;
    let midlin = (lines / 2) as i64;
    let bg = background(lines);

    let mut out = String::new();
    for lin in 0..lines {
        let y = lin as f64 + 0.5 - yrad;
        let mut xright = xrad * (1.0 - (y * y) / (yrad * yrad)).sqrt();
        let mut xleft = -xright;
        if (0.0..PI).contains(&angphase) {
            xleft *= mcap;
        } else {
            xright *= mcap;
        }
        let colleft = (xrad + 0.5) as i64 + (xleft + 0.5) as i64;
        let colright = (xrad + 0.5) as i64 + (xright + 0.5) as i64;

        for _ in 0..colleft.max(0) {
            out.push(' ');
        }
        for col in colleft.max(0)..=colright {
            out.push(background_char(bg, lin, col));
        }

        if lines <= MAX_ANNOTATED_LINES {
            let row = lin as i64;
            if row == midlin - 2 {
                out.push_str(&format!("\t {} +", hunt.prev.quarter.name()));
            } else if row == midlin - 1 {
                let secs = ((jd - hunt.prev.jd) * SECONDS_PER_DAY) as i64;
                out.push_str(&format!("\t {}", format_countdown(secs)));
            } else if row == midlin {
                out.push_str(&format!("\t {} -", hunt.next.quarter.name()));
            } else if row == midlin + 1 {
                let secs = ((hunt.next.jd - jd) * SECONDS_PER_DAY) as i64;
                out.push_str(&format!("\t {}", format_countdown(secs)));
            }
        }
        out.push('\n');
    }
    Ok(out)
}

fn background_char(bg: Option<&[&str]>, lin: usize, col: i64) -> char {
    bg.and_then(|rows| rows.get(lin))
        .zip(usize::try_from(col).ok())
        .and_then(|(row, col)| row.as_bytes().get(col))
        .map_or('@', |&b| char::from(b))
}

/// `"D HH:MM:SS"` with the hour right-aligned in two columns.
pub fn format_countdown(seconds: i64) -> String {
    let days = seconds / 86_400;
    let rem = seconds - days * 86_400;
    let hours = rem / 3600;
    let rem = rem - hours * 3600;
    let minutes = rem / 60;
    let secs = rem - minutes * 60;
    format!("{days} {hours:2}:{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use luna_search::{PhaseEvent, Quarter};

    use super::*;

    fn full() -> MoonPhase {
        MoonPhase {
            phase_fraction: 0.5,
            illuminated_fraction: 1.0,
            age_days: 14.765,
        }
    }

    fn hunt(prev_jd: f64, next_jd: f64) -> PhaseHunt {
        PhaseHunt {
            prev: PhaseEvent {
                jd: prev_jd,
                quarter: Quarter::FirstQuarter,
                lunation_index: 1237,
            },
            next: PhaseEvent {
                jd: next_jd,
                quarter: Quarter::Full,
                lunation_index: 1237,
            },
            new_moon_jd: prev_jd - 7.0,
        }
    }

    #[test]
    fn countdown_layout() {
        assert_eq!(format_countdown(0), "0  0:00:00");
        assert_eq!(format_countdown(3 * 86_400 + 5 * 3600 + 7 * 60 + 9), "3  5:07:09");
        assert_eq!(format_countdown(86_399), "0 23:59:59");
    }

    #[test]
    fn zero_height_rejected() {
        assert!(matches!(
            render_moon(0, 2_451_545.0, &full(), &hunt(2_451_540.0, 2_451_548.0)),
            Err(RenderError::InvalidHeight(0))
        ));
    }

    #[test]
    fn full_moon_top_row_from_background() {
        let art = render_moon(23, 2_451_545.0, &full(), &hunt(2_451_540.0, 2_451_548.0)).unwrap();
        let rows: Vec<&str> = art.lines().collect();
        assert_eq!(rows.len(), 23);
        assert_eq!(rows[0], format!("{}{}", " ".repeat(17), ".------------."));
        assert_eq!(rows[22], format!("{}{}", " ".repeat(17), "`------------'"));
    }

    #[test]
    fn annotations_beside_middle_rows() {
        let art = render_moon(
            23,
            2_451_545.0,
            &full(),
            &hunt(2_451_545.0 - 1.5, 2_451_545.0 + 2.25),
        )
        .unwrap();
        let rows: Vec<&str> = art.lines().collect();
        assert!(rows[9].ends_with("\t First Quarter +"));
        assert!(rows[10].ends_with("\t 1 12:00:00"));
        assert!(rows[11].ends_with("\t Full Moon -"));
        assert!(rows[12].ends_with("\t 2  6:00:00"));
        assert!(!rows[8].contains('\t'));
        assert!(!rows[13].contains('\t'));
    }

    #[test]
    fn tall_moon_unannotated_and_filled() {
        let art = render_moon(30, 2_451_545.0, &full(), &hunt(2_451_540.0, 2_451_548.0)).unwrap();
        assert_eq!(art.lines().count(), 30);
        assert!(!art.contains('\t'));
        assert!(art.lines().all(|r| r.trim_start().chars().all(|c| c == '@')));
    }

    #[test]
    fn new_moon_is_a_sliver() {
        let new = MoonPhase {
            phase_fraction: 0.0,
            illuminated_fraction: 0.0,
            age_days: 0.0,
        };
        let art = render_moon(40, 2_451_545.0, &new, &hunt(2_451_540.0, 2_451_548.0)).unwrap();
        for row in art.lines() {
            assert!(row.trim_start().chars().count() <= 2, "row {row:?}");
        }
    }

    #[test]
    fn single_line() {
        let art = render_moon(1, 2_451_545.0, &full(), &hunt(2_451_540.0, 2_451_548.0)).unwrap();
        assert_eq!(art.lines().count(), 1);
    }
}
