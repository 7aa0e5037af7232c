//! Error types for civil time parsing.

use thiserror::Error;

/// Errors from parsing a textual civil timestamp.
///
/// The numeric conversions in [`crate::julian`] never fail; only the
/// string front door of [`crate::CivilTime`] can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text does not have the `YYYY-MM-DD[Thh:mm:ss[Z]]` shape.
    #[error("expected YYYY-MM-DDThh:mm:ssZ, got {0:?}")]
    InvalidFormat(String),
    /// A component parsed but lies outside its calendar range.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },
}
