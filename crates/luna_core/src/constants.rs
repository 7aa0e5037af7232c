//! Orbital elements and physical constants, epoch 1980 January 0.0.
//!
//! Source: Duffett-Smith, *Practical Astronomy With Your Calculator*,
//! 2nd ed., Cambridge University Press, 1981.

/// Julian Date of 1980 January 0.0.
pub const EPOCH_1980_JD: f64 = 2_444_238.5;

/// Length of the tropical year in days, as used by the solar mean motion.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

// Sun's apparent orbit.

/// Ecliptic longitude of the Sun at epoch.
pub const SUN_LONGITUDE_EPOCH_DEG: f64 = 278.833_540;
/// Ecliptic longitude of the Sun at perigee.
pub const SUN_LONGITUDE_PERIGEE_DEG: f64 = 282.596_403;
/// Eccentricity of Earth's orbit.
pub const EARTH_ECCENTRICITY: f64 = 0.016_718;
/// Semi-major axis of Earth's orbit in km.
pub const SUN_SEMI_MAJOR_AXIS_KM: f64 = 1.495_985e8;
/// Sun's angular diameter at the semi-major axis distance.
pub const SUN_ANGULAR_SIZE_DEG: f64 = 0.533_128;

// Moon's orbit.

/// Moon's mean longitude at epoch.
pub const MOON_MEAN_LONGITUDE_EPOCH_DEG: f64 = 64.975_464;
/// Mean longitude of the Moon's perigee at epoch.
pub const MOON_PERIGEE_LONGITUDE_EPOCH_DEG: f64 = 349.383_063;
/// Mean longitude of the Moon's ascending node at epoch.
pub const MOON_NODE_LONGITUDE_EPOCH_DEG: f64 = 151.950_429;
/// Inclination of the Moon's orbit to the ecliptic.
pub const MOON_INCLINATION_DEG: f64 = 5.145_396;
/// Eccentricity of the Moon's orbit.
pub const MOON_ECCENTRICITY: f64 = 0.054_900;
/// Moon's angular diameter at the semi-major axis distance.
pub const MOON_ANGULAR_SIZE_DEG: f64 = 0.5181;
/// Semi-major axis of the Moon's orbit in km.
pub const MOON_SEMI_MAJOR_AXIS_KM: f64 = 384_401.0;
/// Moon's horizontal parallax at the semi-major axis distance.
pub const MOON_PARALLAX_DEG: f64 = 0.9507;

/// Mean synodic month (new Moon to new Moon) in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_68;
/// Half a synodic month (new Moon to full Moon) in days.
pub const HALF_SYNODIC_MONTH_DAYS: f64 = 14.765_294_34;

/// Base date of E. W. Brown's numbered series of lunations (1923 January 16).
pub const LUNATION_BASE_JD: f64 = 2_423_436.0;

// Mean daily motions, degrees per day.

/// Moon's mean daily motion in longitude.
pub(crate) const MOON_MEAN_MOTION_DEG_PER_DAY: f64 = 13.176_396_6;
/// Daily motion of the Moon's perigee.
pub(crate) const MOON_PERIGEE_MOTION_DEG_PER_DAY: f64 = 0.111_404_1;
/// Daily regression of the Moon's node.
pub(crate) const MOON_NODE_MOTION_DEG_PER_DAY: f64 = 0.052_953_9;
