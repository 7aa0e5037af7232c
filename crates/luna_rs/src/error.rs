use luna_core::CoreError;
use luna_render::RenderError;
use luna_search::SearchError;
use luna_time::TimeError;
use thiserror::Error;

/// Any error from the lunar phase engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LunaError {
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    #[error("phase error: {0}")]
    Core(#[from] CoreError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
