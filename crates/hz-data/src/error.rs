//! Reference data errors.

use thiserror::Error;

/// Result type for reference table lookups.
pub type DataResult<T> = Result<T, DataError>;

/// Errors from reference table lookups.
///
/// A missing key is always an explicit `NotFound`; the tables never default
/// to a zero length or capacity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// Key absent from the table (unknown material/size/fitting pairing).
    #[error("No {what} entry for {key}")]
    NotFound { what: &'static str, key: String },

    /// Interpolation argument outside the table's row range.
    #[error("Value out of table range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Name that does not parse to any catalog entry.
    #[error("Unknown {what}: {name}")]
    UnknownName { what: &'static str, name: String },
}
