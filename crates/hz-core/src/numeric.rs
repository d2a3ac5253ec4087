use crate::HzError;

/// Floating point type used throughout the sizing engine
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HzError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HzError::NonFinite { what, value: v })
    }
}

/// Guard for quantities that must be strictly positive (diameters, lengths,
/// temperature differentials). Zero and negative values resolve to errors
/// here so the correlations downstream never see them.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, HzError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HzError::NonPhysical { what, value: v })
    }
}

/// Guard for quantities that may be zero but not negative (flows, loads,
/// fitting counts folded to length).
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, HzError> {
    let v = ensure_finite(v, what)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(HzError::NonPhysical { what, value: v })
    }
}
