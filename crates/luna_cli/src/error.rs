use luna_rs::LunaError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error("unknown date format: `{0}`")]
    DateParse(String),
    #[error("invalid Julian Date: {0}")]
    InvalidJd(f64),
    #[error(transparent)]
    Luna(#[from] LunaError),
}
