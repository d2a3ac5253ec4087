//! Errors for capacity resolution.

use hz_core::HzError;
use hz_data::DataError;
use thiserror::Error;

pub type CapacityResult<T> = Result<T, CapacityError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapacityError {
    /// Zero/negative ΔT, negative load, offset outside (0, 1].
    #[error(transparent)]
    NonPhysical(#[from] HzError),

    /// Reference table miss (pipe, fluid, or emitter rating).
    #[error(transparent)]
    Data(#[from] DataError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_errors_pass_through() {
        let err: CapacityError = DataError::NotFound {
            what: "pipe",
            key: "PEX 2\"".into(),
        }
        .into();
        assert!(err.to_string().contains("PEX"));
    }
}
