//! Geocentric ecliptic longitudes of the Sun and Moon.
//!
//! The Sun follows a Keplerian ellipse with fixed elements. The Moon starts
//! from linear mean motions and picks up, in this order: evection, the
//! annual equation, the A3 correction, the equation of the centre, the A4
//! correction, and finally the variation.
//!
//! Angles are reduced to [0, 360) only where the theory prescribes it
//! (mean anomaly of the Sun, Sun longitude, Moon mean longitude, Moon mean
//! anomaly). Intermediate corrected quantities stay unreduced.

use crate::angle::{dsin, fixangle};
use crate::constants::{
    EARTH_ECCENTRICITY, EPOCH_1980_JD, MOON_MEAN_LONGITUDE_EPOCH_DEG, MOON_MEAN_MOTION_DEG_PER_DAY,
    MOON_PERIGEE_LONGITUDE_EPOCH_DEG, MOON_PERIGEE_MOTION_DEG_PER_DAY, SUN_LONGITUDE_EPOCH_DEG,
    SUN_LONGITUDE_PERIGEE_DEG, TROPICAL_YEAR_DAYS,
};
use crate::error::CoreError;
use crate::kepler::{KeplerConfig, solve_kepler_with};

/// Intermediate and final quantities of the Sun/Moon position model.
///
/// All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLunarPosition {
    /// Days elapsed since 1980 January 0.0.
    pub days_since_epoch: f64,
    /// Sun's mean anomaly, [0, 360).
    pub sun_mean_anomaly_deg: f64,
    /// Sun's true anomaly.
    pub sun_true_anomaly_deg: f64,
    /// Sun's geocentric ecliptic longitude, [0, 360).
    pub sun_longitude_deg: f64,
    /// Moon's mean longitude, [0, 360).
    pub moon_mean_longitude_deg: f64,
    /// Moon's mean anomaly, [0, 360).
    pub moon_mean_anomaly_deg: f64,
    /// Evection term.
    pub evection_deg: f64,
    /// Annual equation term.
    pub annual_equation_deg: f64,
    /// Moon's corrected anomaly (mean anomaly + evection − annual equation − A3).
    pub moon_corrected_anomaly_deg: f64,
    /// Equation of the centre.
    pub equation_of_centre_deg: f64,
    /// Moon's corrected longitude, before the variation.
    pub moon_corrected_longitude_deg: f64,
    /// Variation term.
    pub variation_deg: f64,
    /// Moon's true orbital longitude (corrected longitude + variation).
    pub moon_true_longitude_deg: f64,
}

impl SolarLunarPosition {
    /// Moon − Sun longitude, not reduced. This is the age of the Moon in degrees.
    pub fn elongation_deg(&self) -> f64 {
        self.moon_true_longitude_deg - self.sun_longitude_deg
    }
}

/// Sun and Moon longitudes at an astronomical Julian Date.
pub fn compute_longitudes(jd: f64) -> Result<SolarLunarPosition, CoreError> {
    compute_longitudes_with(jd, &KeplerConfig::default())
}

/// [`compute_longitudes`] with an explicit Kepler solver configuration.
pub fn compute_longitudes_with(
    jd: f64,
    kepler: &KeplerConfig,
) -> Result<SolarLunarPosition, CoreError> {
    let day = jd - EPOCH_1980_JD;

    // Sun
    let n = fixangle((360.0 / TROPICAL_YEAR_DAYS) * day);
    let m = fixangle(n + SUN_LONGITUDE_EPOCH_DEG - SUN_LONGITUDE_PERIGEE_DEG);
    let ecc_anomaly = solve_kepler_with(m, EARTH_ECCENTRICITY, kepler)?;
    let true_anomaly = 2.0
        * (((1.0 + EARTH_ECCENTRICITY) / (1.0 - EARTH_ECCENTRICITY)).sqrt()
            * (ecc_anomaly / 2.0).tan())
        .atan()
        .to_degrees();
    let sun_longitude = fixangle(true_anomaly + SUN_LONGITUDE_PERIGEE_DEG);

    // Moon
    let ml = fixangle(MOON_MEAN_MOTION_DEG_PER_DAY * day + MOON_MEAN_LONGITUDE_EPOCH_DEG);
    let mm = fixangle(
        ml - MOON_PERIGEE_MOTION_DEG_PER_DAY * day - MOON_PERIGEE_LONGITUDE_EPOCH_DEG,
    );
    let evection = 1.2739 * dsin(2.0 * (ml - sun_longitude) - mm);
    let annual_equation = 0.1858 * dsin(m);
    let a3 = 0.37 * dsin(m);
    let corrected_anomaly = mm + evection - annual_equation - a3;
    let equation_of_centre = 6.2886 * dsin(corrected_anomaly);
    let a4 = 0.214 * dsin(2.0 * corrected_anomaly);
    let corrected_longitude = ml + evection + equation_of_centre - annual_equation + a4;
    let variation = 0.6583 * dsin(2.0 * (corrected_longitude - sun_longitude));
    let true_longitude = corrected_longitude + variation;

    Ok(SolarLunarPosition {
        days_since_epoch: day,
        sun_mean_anomaly_deg: m,
        sun_true_anomaly_deg: true_anomaly,
        sun_longitude_deg: sun_longitude,
        moon_mean_longitude_deg: ml,
        moon_mean_anomaly_deg: mm,
        evection_deg: evection,
        annual_equation_deg: annual_equation,
        moon_corrected_anomaly_deg: corrected_anomaly,
        equation_of_centre_deg: equation_of_centre,
        moon_corrected_longitude_deg: corrected_longitude,
        variation_deg: variation,
        moon_true_longitude_deg: true_longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_sun_near_epoch_longitude() {
        // At the epoch the Sun sits at its tabulated epoch longitude.
        let p = compute_longitudes(EPOCH_1980_JD).unwrap();
        assert!((p.sun_longitude_deg - SUN_LONGITUDE_EPOCH_DEG).abs() < 0.01);
        assert!((p.moon_mean_longitude_deg - MOON_MEAN_LONGITUDE_EPOCH_DEG).abs() < 1e-9);
    }

    #[test]
    fn reduced_angles_in_range() {
        for jd in [2_415_020.0, 2_444_238.5, 2_451_545.0, 2_460_000.5, 2_488_069.5] {
            let p = compute_longitudes(jd).unwrap();
            for a in [
                p.sun_mean_anomaly_deg,
                p.sun_longitude_deg,
                p.moon_mean_longitude_deg,
                p.moon_mean_anomaly_deg,
            ] {
                assert!((0.0..360.0).contains(&a), "jd={jd} angle={a}");
            }
        }
    }

    #[test]
    fn correction_terms_bounded_by_amplitude() {
        let p = compute_longitudes(2_451_545.0).unwrap();
        assert!(p.evection_deg.abs() <= 1.2739);
        assert!(p.annual_equation_deg.abs() <= 0.1858);
        assert!(p.equation_of_centre_deg.abs() <= 6.2886);
        assert!(p.variation_deg.abs() <= 0.6583);
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let a = compute_longitudes(2_451_545.0).unwrap().sun_longitude_deg;
        let b = compute_longitudes(2_451_546.0).unwrap().sun_longitude_deg;
        let step = fixangle(b - a);
        assert!((0.95..1.03).contains(&step), "step={step}");
    }

    #[test]
    fn elongation_is_unreduced_difference() {
        let p = compute_longitudes(2_460_000.5).unwrap();
        assert_eq!(
            p.elongation_deg(),
            p.moon_true_longitude_deg - p.sun_longitude_deg
        );
    }
}
