//! Error types for rendering.

use luna_core::CoreError;
use luna_search::SearchError;
use thiserror::Error;

/// Errors from format strings, art rendering, or the computations behind them.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A format string ended with a lone `%`.
    #[error("bad output format: trailing '%' in {0:?}")]
    TrailingPercent(String),
    /// ASCII art needs at least one line.
    #[error("invalid art height {0}: must be at least 1 line")]
    InvalidHeight(usize),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
