//! Bracketing quarter instants for a Julian Date.
//!
//! A mean-lunation scan locates the lunation `k` whose mean new moon is at
//! or before the query. The true instants of that lunation's phases are then
//! walked in order. True and mean new moons can differ by more than half a
//! day, so the walk starts at the previous lunation's last quarter and runs
//! through the first quarter of lunation `k + 1`.

use luna_core::SYNODIC_MONTH_DAYS;
use luna_time::jd_to_civil;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::hunt_types::{HuntConfig, PhaseEvent, PhaseHunt, Quarter};
use crate::lunation::mean_phase;

/// Quarter instants bracketing `jd` with the default configuration.
pub fn phase_hunt(jd: f64) -> Result<PhaseHunt, SearchError> {
    phase_hunt_with(jd, &HuntConfig::default())
}

/// [`phase_hunt`] with an explicit seed offset and scan cap.
pub fn phase_hunt_with(jd: f64, config: &HuntConfig) -> Result<PhaseHunt, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !jd.is_finite() {
        return Err(SearchError::NonFiniteJd(jd));
    }

    let k = scan_lunation(jd, config)?;

    let candidates = [
        PhaseEvent::compute(k - 1, Quarter::LastQuarter),
        PhaseEvent::compute(k, Quarter::New),
        PhaseEvent::compute(k, Quarter::FirstQuarter),
        PhaseEvent::compute(k, Quarter::Full),
        PhaseEvent::compute(k, Quarter::LastQuarter),
        PhaseEvent::compute(k + 1, Quarter::New),
        PhaseEvent::compute(k + 1, Quarter::FirstQuarter),
    ];

    let (prev, next) = candidates
        .windows(2)
        .find(|w| w[1].jd > jd)
        .map(|w| (w[0], w[1]))
        .ok_or(SearchError::ScanExhausted {
            jd,
            steps: config.max_scan_steps,
        })?;
    if prev.jd > jd {
        warn!(jd, prev = prev.jd, "phase hunt walk started after query");
        return Err(SearchError::ScanExhausted {
            jd,
            steps: config.max_scan_steps,
        });
    }

    let new_moon_jd = match prev.quarter {
        Quarter::New => prev.jd,
        _ => PhaseEvent::compute(prev.lunation_index, Quarter::New).jd,
    };

    debug!(
        jd,
        k,
        prev = prev.jd,
        prev_quarter = prev.quarter.index(),
        next = next.jd,
        next_quarter = next.quarter.index(),
        "phase hunt"
    );

    Ok(PhaseHunt {
        prev,
        next,
        new_moon_jd,
    })
}

/// Lunation index whose mean new moon is at or before `jd` and whose
/// successor's mean new moon is after it.
fn scan_lunation(jd: f64, config: &HuntConfig) -> Result<i64, SearchError> {
    let mut adate = jd - config.seed_offset_days;
    let (year, month, _) = jd_to_civil(adate);
    let years = f64::from(year) + (f64::from(month) - 1.0) * (1.0 / 12.0) - 1900.0;
    let mut k = (years * 12.3685).floor() as i64;

    let mut nt1 = mean_phase(adate, k);
    adate = nt1;
    for _ in 0..config.max_scan_steps {
        adate += SYNODIC_MONTH_DAYS;
        let nt2 = mean_phase(adate, k + 1);
        if nt1 <= jd && nt2 > jd {
            return Ok(k);
        }
        nt1 = nt2;
        k += 1;
    }
    warn!(jd, steps = config.max_scan_steps, "phase hunt scan exhausted");
    Err(SearchError::ScanExhausted {
        jd,
        steps: config.max_scan_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_jan_10_2000() {
        // 2000-01-10 00:00 UTC
        let h = phase_hunt(2_451_553.5).unwrap();
        assert_eq!(h.prev.quarter, Quarter::New);
        assert_eq!(h.next.quarter, Quarter::FirstQuarter);
        assert!((h.prev.jd - 2_451_550.260_386_223_4).abs() < 1e-6);
        assert!((h.next.jd - 2_451_558.065_741_245).abs() < 1e-6);
        assert_eq!(h.prev.lunation_index, 1237);
        assert_eq!(h.new_moon_jd, h.prev.jd);
        assert_eq!(h.lunation_number(), 953);
    }

    #[test]
    fn scan_cap_exhausted() {
        let cfg = HuntConfig {
            seed_offset_days: 45.0,
            max_scan_steps: 1,
        };
        assert!(matches!(
            phase_hunt_with(2_451_553.5, &cfg),
            Err(SearchError::ScanExhausted { steps: 1, .. })
        ));
    }

    #[test]
    fn long_seed_needs_more_steps() {
        let cfg = HuntConfig {
            seed_offset_days: 400.0,
            max_scan_steps: 64,
        };
        let a = phase_hunt_with(2_451_553.5, &cfg).unwrap();
        let b = phase_hunt(2_451_553.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = HuntConfig {
            seed_offset_days: f64::NAN,
            max_scan_steps: 64,
        };
        assert!(matches!(
            phase_hunt_with(2_451_553.5, &cfg),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_finite_jd_rejected() {
        for jd in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(phase_hunt(jd), Err(SearchError::NonFiniteJd(_))),
                "{jd}"
            );
        }
    }

    #[test]
    fn query_on_event_is_prev() {
        let h = phase_hunt(2_451_553.5).unwrap();
        let again = phase_hunt(h.next.jd).unwrap();
        assert_eq!(again.prev, h.next);
    }

    #[test]
    fn new_moon_before_query_when_prev_is_quarter() {
        // 2000-01-17: between first quarter and full
        let h = phase_hunt(2_451_560.5).unwrap();
        assert_eq!(h.prev.quarter, Quarter::FirstQuarter);
        assert!((h.new_moon_jd - 2_451_550.260_386_223_4).abs() < 1e-6);
        assert_eq!(h.lunation_number(), 953);
    }
}
