//! Fitting equivalent-length data.
//!
//! Minor losses are folded into the straight-length term as equivalent feet
//! of pipe. The base table is for a 90° elbow per nominal size; 45° elbows
//! and straight-through tees scale down from it, and threaded black iron
//! fittings carry a multiplier over sweat/crimp joints.

use crate::error::{DataError, DataResult};
use crate::pipe::{NominalSize, PipeMaterial, pipe_spec};
use hz_core::units::{Length, feet};

/// Fitting type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FittingType {
    Elbow90,
    Elbow45,
    TeeThrough,
}

impl FittingType {
    pub fn label(self) -> &'static str {
        match self {
            FittingType::Elbow90 => "90° elbow",
            FittingType::Elbow45 => "45° elbow",
            FittingType::TeeThrough => "tee (through)",
        }
    }

    pub fn parse(name: &str) -> DataResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "elbow90" | "elbow_90" | "90" => Ok(FittingType::Elbow90),
            "elbow45" | "elbow_45" | "45" => Ok(FittingType::Elbow45),
            "tee" | "tee_through" | "tee-through" => Ok(FittingType::TeeThrough),
            _ => Err(DataError::UnknownName {
                what: "fitting type",
                name: name.to_string(),
            }),
        }
    }

    /// Scale relative to the 90° elbow base entry.
    fn scale(self) -> f64 {
        match self {
            FittingType::Elbow90 => 1.0,
            FittingType::Elbow45 => 0.5,
            FittingType::TeeThrough => 0.6,
        }
    }
}

/// A fitting type with a count, as entered per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittingCount {
    pub fitting: FittingType,
    pub count: u32,
}

/// Equivalent feet for one 90° elbow, by nominal size.
fn elbow90_base_ft(size: NominalSize) -> f64 {
    match size {
        NominalSize::ThreeEighths => 1.0,
        NominalSize::Half => 1.5,
        NominalSize::FiveEighths => 1.75,
        NominalSize::ThreeQuarter => 2.0,
        NominalSize::One => 2.5,
        NominalSize::OneQuarter => 3.0,
        NominalSize::OneHalf => 4.0,
        NominalSize::Two => 5.5,
    }
}

/// Equivalent length of a single fitting, keyed by (type, material, size).
///
/// The (material, size) pair must exist in the pipe table; a pairing with no
/// pipe behind it is a `NotFound`, not a zero.
pub fn fitting_equivalent_length(
    fitting: FittingType,
    material: PipeMaterial,
    size: NominalSize,
) -> DataResult<Length> {
    pipe_spec(material, size).map_err(|_| DataError::NotFound {
        what: "fitting",
        key: format!(
            "{} for {} {}\"",
            fitting.label(),
            material.label(),
            size.label()
        ),
    })?;

    let material_factor = match material {
        PipeMaterial::BlackIron => 1.3,
        PipeMaterial::Copper | PipeMaterial::Pex => 1.0,
    };
    Ok(feet(
        elbow90_base_ft(size) * fitting.scale() * material_factor,
    ))
}
