//! Error types for quarter-phase search.

use thiserror::Error;

/// Errors from phase hunting and range search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The mean-lunation scan did not bracket the query within its step cap.
    #[error("phase hunt scan exhausted after {steps} steps for JD {jd}")]
    ScanExhausted { jd: f64, steps: u32 },
    /// A caller-supplied configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// A Julian Date was NaN or infinite.
    #[error("Julian Date must be finite, got {0}")]
    NonFiniteJd(f64),
    /// Range search with the end before the start.
    #[error("invalid range: end JD {end_jd} is before start JD {start_jd}")]
    InvalidRange { start_jd: f64, end_jd: f64 },
}
