//! Extended Sun/Moon state: distances, angular sizes and the Moon's
//! ecliptic coordinates, from the same model that drives [`phase`](crate::phase).

use crate::angle::{dcos, dsin, fixangle};
use crate::constants::{
    EARTH_ECCENTRICITY, MOON_ANGULAR_SIZE_DEG, MOON_ECCENTRICITY, MOON_INCLINATION_DEG,
    MOON_NODE_LONGITUDE_EPOCH_DEG, MOON_NODE_MOTION_DEG_PER_DAY, MOON_PARALLAX_DEG,
    MOON_SEMI_MAJOR_AXIS_KM, SUN_ANGULAR_SIZE_DEG, SUN_SEMI_MAJOR_AXIS_KM,
};
use crate::error::CoreError;
use crate::kepler::KeplerConfig;
use crate::phase::{MoonPhase, phase_from_elongation};
use crate::position::compute_longitudes_with;

/// Everything the model knows about the Sun and Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Phase, illumination and age at the same instant.
    pub phase: MoonPhase,
    /// Earth–Sun distance in km.
    pub sun_distance_km: f64,
    /// Apparent diameter of the Sun in degrees.
    pub sun_angular_diameter_deg: f64,
    /// Earth–Moon distance in km.
    pub moon_distance_km: f64,
    /// Apparent diameter of the Moon in degrees.
    pub moon_angular_diameter_deg: f64,
    /// Horizontal parallax of the Moon in degrees.
    pub moon_parallax_deg: f64,
    /// Geocentric ecliptic longitude of the Moon, [0, 360).
    pub moon_longitude_deg: f64,
    /// Geocentric ecliptic latitude of the Moon.
    pub moon_latitude_deg: f64,
}

/// Full Sun/Moon state at an astronomical Julian Date.
pub fn moon_state(jd: f64) -> Result<MoonState, CoreError> {
    moon_state_with(jd, &KeplerConfig::default())
}

/// [`moon_state`] with an explicit Kepler solver configuration.
pub fn moon_state_with(jd: f64, kepler: &KeplerConfig) -> Result<MoonState, CoreError> {
    let pos = compute_longitudes_with(jd, kepler)?;
    let phase = phase_from_elongation(jd, pos.elongation_deg());

    // Sun: distance factor from the true anomaly
    let f = (1.0 + EARTH_ECCENTRICITY * dcos(pos.sun_true_anomaly_deg))
        / (1.0 - EARTH_ECCENTRICITY * EARTH_ECCENTRICITY);
    let sun_distance_km = SUN_SEMI_MAJOR_AXIS_KM / f;
    let sun_angular_diameter_deg = f * SUN_ANGULAR_SIZE_DEG;

    // Moon
    let moon_distance_km = (MOON_SEMI_MAJOR_AXIS_KM
        * (1.0 - MOON_ECCENTRICITY * MOON_ECCENTRICITY))
        / (1.0
            + MOON_ECCENTRICITY
                * dcos(pos.moon_corrected_anomaly_deg + pos.equation_of_centre_deg));
    let relative = moon_distance_km / MOON_SEMI_MAJOR_AXIS_KM;
    let moon_angular_diameter_deg = MOON_ANGULAR_SIZE_DEG / relative;
    let moon_parallax_deg = MOON_PARALLAX_DEG / relative;

    // Ascending node and ecliptic coordinates
    let mean_node = fixangle(
        MOON_NODE_LONGITUDE_EPOCH_DEG - MOON_NODE_MOTION_DEG_PER_DAY * pos.days_since_epoch,
    );
    let node = mean_node - 0.16 * dsin(pos.sun_mean_anomaly_deg);
    let from_node = pos.moon_true_longitude_deg - node;
    let moon_longitude_deg = fixangle(
        (dsin(from_node) * dcos(MOON_INCLINATION_DEG))
            .atan2(dcos(from_node))
            .to_degrees()
            + node,
    );
    let moon_latitude_deg = (dsin(from_node) * dsin(MOON_INCLINATION_DEG))
        .asin()
        .to_degrees();

    Ok(MoonState {
        phase,
        sun_distance_km,
        sun_angular_diameter_deg,
        moon_distance_km,
        moon_angular_diameter_deg,
        moon_parallax_deg,
        moon_longitude_deg,
        moon_latitude_deg,
    })
}
