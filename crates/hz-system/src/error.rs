//! System-level errors.

use hz_capacity::CapacityError;
use hz_core::HzError;
use hz_data::DataError;
use hz_hydraulics::HydraulicsError;
use thiserror::Error;

pub type SystemResult<T> = Result<T, SystemError>;

/// Why a zone failed to size.
///
/// One bad zone never aborts the system calculation; the error rides along
/// in the zone's outcome while the rest of the system resolves normally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error(transparent)]
    Hydraulics(#[from] HydraulicsError),

    #[error(transparent)]
    NonPhysical(#[from] HzError),
}
