//! Errors for the hydraulic calculator.

use hz_core::HzError;
use hz_data::DataError;
use thiserror::Error;

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    /// Zero/negative diameter, zero Reynolds number, and similar inputs the
    /// correlations are undefined for.
    #[error(transparent)]
    NonPhysical(#[from] HzError),

    /// Reference table miss while aggregating equivalent lengths.
    #[error(transparent)]
    Data(#[from] DataError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_core_errors() {
        let err: HydraulicsError = HzError::NonPhysical {
            what: "diameter",
            value: 0.0,
        }
        .into();
        assert!(err.to_string().contains("diameter"));
    }
}
