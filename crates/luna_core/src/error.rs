//! Error types for the phase engine.

use thiserror::Error;

/// Errors from the Kepler solver or from a rejected configuration.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Newton–Raphson iteration hit its cap without reaching the tolerance.
    #[error(
        "Kepler's equation did not converge after {iterations} iterations \
         (mean anomaly {mean_anomaly_deg} deg, eccentricity {eccentricity})"
    )]
    KeplerNoConvergence {
        mean_anomaly_deg: f64,
        eccentricity: f64,
        iterations: u32,
    },
    /// A caller-supplied configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
