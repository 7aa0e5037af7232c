//! One-line phase reports driven by `%` directives.
//!
//! | Directive | Output |
//! |---|---|
//! | `%a` | age in days, one decimal |
//! | `%J` | Julian Date, one decimal |
//! | `%e` | northern-hemisphere emoji |
//! | `%s` | southern-hemisphere emoji |
//! | `%p` | phase name |
//! | `%P` | illuminated percent, one decimal |
//! | `%N` | phase index 0..=7 |
//! | `%n`, `%t`, `%%` | newline, tab, percent |
//!
//! Unknown directives are logged and dropped.

use luna_core::MoonPhase;
use tracing::warn;

use crate::error::RenderError;
use crate::names::{Hemisphere, PhaseName};

/// `"Waxing Gibbous: 🌔 (71.3%)"`
pub const DEFAULT_FORMAT: &str = "%p: %e (%P%%)";

/// Expand `fmt` for the phase at `jd`.
pub fn format_phase(fmt: &str, jd: f64, phase: &MoonPhase) -> Result<String, RenderError> {
    let name = PhaseName::of(phase);
    let mut out = String::with_capacity(fmt.len() + 16);
    let mut chars = fmt.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(directive) = chars.next() else {
            return Err(RenderError::TrailingPercent(fmt.to_string()));
        };
        match directive {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'a' => out.push_str(&format!("{:.1}", phase.age_days)),
            'J' => out.push_str(&format!("{jd:.1}")),
            'e' => out.push_str(name.emoji(Hemisphere::Northern)),
            's' => out.push_str(name.emoji(Hemisphere::Southern)),
            'p' => out.push_str(name.name()),
            'P' => out.push_str(&format!("{:.1}", phase.illuminated_percent())),
            'N' => out.push_str(&name.index().to_string()),
            other => warn!(directive = %other, "unknown format directive"),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waxing_gibbous() -> MoonPhase {
        MoonPhase {
            phase_fraction: 0.35,
            illuminated_fraction: 0.7128,
            age_days: 10.336,
        }
    }

    #[test]
    fn default_format() {
        let s = format_phase(DEFAULT_FORMAT, 2_451_545.0, &waxing_gibbous()).unwrap();
        assert_eq!(s, "Waxing Gibbous: 🌔 (71.3%)");
    }

    #[test]
    fn all_directives() {
        let s = format_phase("%a|%J|%e|%s|%p|%P|%N|%n|%t|%%", 2_451_545.04, &waxing_gibbous())
            .unwrap();
        assert_eq!(s, "10.3|2451545.0|🌔|🌖|Waxing Gibbous|71.3|3|\n|\t|%");
    }

    #[test]
    fn trailing_percent_is_error() {
        assert!(matches!(
            format_phase("age %a %", 2_451_545.0, &waxing_gibbous()),
            Err(RenderError::TrailingPercent(_))
        ));
    }

    #[test]
    fn unknown_directive_skipped() {
        let s = format_phase("[%q]", 2_451_545.0, &waxing_gibbous()).unwrap();
        assert_eq!(s, "[]");
    }

    #[test]
    fn literal_text_untouched() {
        let s = format_phase("moon 🌙 ok", 2_451_545.0, &waxing_gibbous()).unwrap();
        assert_eq!(s, "moon 🌙 ok");
    }
}
