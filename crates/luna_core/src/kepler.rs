//! Newton–Raphson solution of Kepler's equation.
//!
//! Solves `E − e·sin E = M` for the eccentric anomaly `E` given the mean
//! anomaly `M` and eccentricity `e`, starting from `E₀ = M`. Each step
//! evaluates the residual, applies the Newton update, then stops once the
//! residual measured before the update is within tolerance.

use tracing::{trace, warn};

use crate::error::CoreError;

/// Residual tolerance in radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-6;

/// Default iteration cap. Orbits with `e < 0.1` converge in a handful of steps.
const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Tuning for the Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerConfig {
    /// Stop once `|E − e·sin E − M|` is at most this many radians.
    pub tolerance_rad: f64,
    /// Give up with [`CoreError::KeplerNoConvergence`] after this many steps.
    pub max_iterations: u32,
}

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            tolerance_rad: KEPLER_TOLERANCE_RAD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_rad.is_finite() || self.tolerance_rad <= 0.0 {
            return Err("tolerance_rad must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Eccentric anomaly in radians for a mean anomaly in degrees.
pub fn solve_kepler(mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64, CoreError> {
    solve_kepler_with(mean_anomaly_deg, eccentricity, &KeplerConfig::default())
}

/// [`solve_kepler`] with an explicit tolerance and iteration cap.
pub fn solve_kepler_with(
    mean_anomaly_deg: f64,
    eccentricity: f64,
    config: &KeplerConfig,
) -> Result<f64, CoreError> {
    config.validate().map_err(CoreError::InvalidConfig)?;

    let m = mean_anomaly_deg.to_radians();
    let mut e = m;
    for iteration in 1..=config.max_iterations {
        let delta = e - eccentricity * e.sin() - m;
        e -= delta / (1.0 - eccentricity * e.cos());
        if delta.abs() <= config.tolerance_rad {
            trace!(iteration, eccentric_anomaly = e, "kepler converged");
            return Ok(e);
        }
    }

    warn!(
        mean_anomaly_deg,
        eccentricity,
        max_iterations = config.max_iterations,
        "kepler iteration cap reached"
    );
    Err(CoreError::KeplerNoConvergence {
        mean_anomaly_deg,
        eccentricity,
        iterations: config.max_iterations,
    })
}
