//! Phase of the Moon from the Sun/Moon elongation.

use tracing::debug;

use crate::angle::{dcos, fixangle};
use crate::constants::{HALF_SYNODIC_MONTH_DAYS, SYNODIC_MONTH_DAYS};
use crate::error::CoreError;
use crate::kepler::KeplerConfig;
use crate::position::compute_longitudes_with;

/// Apparent phase of the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Position in the synodic cycle, [0, 1). 0 = new, 0.25 = first quarter,
    /// 0.5 = full, 0.75 = last quarter.
    pub phase_fraction: f64,
    /// Fraction of the disc illuminated, [0, 1].
    pub illuminated_fraction: f64,
    /// Days since the last new moon, [0, synodic month).
    pub age_days: f64,
}

impl MoonPhase {
    /// True in the second half of the lunation.
    pub fn is_waning(&self) -> bool {
        self.age_days > HALF_SYNODIC_MONTH_DAYS
    }

    /// Illuminated fraction as a percentage.
    pub fn illuminated_percent(&self) -> f64 {
        self.illuminated_fraction * 100.0
    }
}

/// Phase of the Moon at an astronomical Julian Date.
pub fn phase(jd: f64) -> Result<MoonPhase, CoreError> {
    phase_with(jd, &KeplerConfig::default())
}

/// [`phase`] with an explicit Kepler solver configuration.
pub fn phase_with(jd: f64, kepler: &KeplerConfig) -> Result<MoonPhase, CoreError> {
    let pos = compute_longitudes_with(jd, kepler)?;
    Ok(phase_from_elongation(jd, pos.elongation_deg()))
}

pub(crate) fn phase_from_elongation(jd: f64, age_deg: f64) -> MoonPhase {
    let illuminated_fraction = (1.0 - dcos(age_deg)) / 2.0;
    let phase_fraction = fixangle(age_deg) / 360.0;
    let age_days = SYNODIC_MONTH_DAYS * phase_fraction;
    debug!(jd, phase_fraction, illuminated_fraction, age_days, "moon phase");
    MoonPhase {
        phase_fraction,
        illuminated_fraction,
        age_days,
    }
}
