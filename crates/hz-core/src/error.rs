use thiserror::Error;

pub type HzResult<T> = Result<T, HzError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HzError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}
