//! Pipe geometry and material data.
//!
//! Internal diameters follow the common hydronic product lines: Type L
//! copper tube, schedule 40 black iron, and SDR-9 PEX. Identity of a pipe
//! spec is the (material, nominal size) pair.

use crate::error::{DataError, DataResult};
use hz_core::units::{Length, feet, inches};

/// Pipe material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeMaterial {
    Copper,
    BlackIron,
    Pex,
}

impl PipeMaterial {
    pub fn label(self) -> &'static str {
        match self {
            PipeMaterial::Copper => "copper",
            PipeMaterial::BlackIron => "black iron",
            PipeMaterial::Pex => "PEX",
        }
    }

    /// Parse a user-facing material name.
    pub fn parse(name: &str) -> DataResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "copper" => Ok(PipeMaterial::Copper),
            "black iron" | "black_iron" | "iron" | "steel" => Ok(PipeMaterial::BlackIron),
            "pex" => Ok(PipeMaterial::Pex),
            _ => Err(DataError::UnknownName {
                what: "pipe material",
                name: name.to_string(),
            }),
        }
    }

    /// Absolute roughness of the pipe wall in feet.
    ///
    /// Copper is drawn tubing, black iron matches commercial steel, PEX is
    /// smooth plastic (~1 micron).
    pub fn roughness(self) -> Length {
        match self {
            PipeMaterial::Copper => feet(5.0e-6),
            PipeMaterial::BlackIron => feet(1.5e-4),
            PipeMaterial::Pex => feet(3.0e-6),
        }
    }

    /// Hazen-Williams roughness coefficient C.
    pub fn hazen_williams_c(self) -> f64 {
        match self {
            PipeMaterial::Copper => 150.0,
            PipeMaterial::BlackIron => 100.0,
            PipeMaterial::Pex => 150.0,
        }
    }
}

/// Nominal trade size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominalSize {
    ThreeEighths,
    Half,
    FiveEighths,
    ThreeQuarter,
    One,
    OneQuarter,
    OneHalf,
    Two,
}

impl NominalSize {
    pub fn label(self) -> &'static str {
        match self {
            NominalSize::ThreeEighths => "3/8",
            NominalSize::Half => "1/2",
            NominalSize::FiveEighths => "5/8",
            NominalSize::ThreeQuarter => "3/4",
            NominalSize::One => "1",
            NominalSize::OneQuarter => "1-1/4",
            NominalSize::OneHalf => "1-1/2",
            NominalSize::Two => "2",
        }
    }

    /// Parse a nominal size label such as `3/4` or `1-1/4`.
    pub fn parse(name: &str) -> DataResult<Self> {
        match name.trim() {
            "3/8" => Ok(NominalSize::ThreeEighths),
            "1/2" => Ok(NominalSize::Half),
            "5/8" => Ok(NominalSize::FiveEighths),
            "3/4" => Ok(NominalSize::ThreeQuarter),
            "1" => Ok(NominalSize::One),
            "1-1/4" | "1 1/4" => Ok(NominalSize::OneQuarter),
            "1-1/2" | "1 1/2" => Ok(NominalSize::OneHalf),
            "2" => Ok(NominalSize::Two),
            _ => Err(DataError::UnknownName {
                what: "nominal size",
                name: name.to_string(),
            }),
        }
    }
}

/// Immutable pipe specification resolved from the tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSpec {
    pub material: PipeMaterial,
    pub size: NominalSize,
    pub inner_diameter: Length,
    pub roughness: Length,
    pub hazen_williams_c: f64,
}

struct PipeRow {
    material: PipeMaterial,
    size: NominalSize,
    id_inches: f64,
}

const PIPE_TABLE: [PipeRow; 18] = [
    // Copper, Type L
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::Half, id_inches: 0.545 },
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::ThreeQuarter, id_inches: 0.785 },
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::One, id_inches: 1.025 },
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::OneQuarter, id_inches: 1.265 },
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::OneHalf, id_inches: 1.505 },
    PipeRow { material: PipeMaterial::Copper, size: NominalSize::Two, id_inches: 1.985 },
    // Black iron, schedule 40
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::Half, id_inches: 0.622 },
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::ThreeQuarter, id_inches: 0.824 },
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::One, id_inches: 1.049 },
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::OneQuarter, id_inches: 1.380 },
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::OneHalf, id_inches: 1.610 },
    PipeRow { material: PipeMaterial::BlackIron, size: NominalSize::Two, id_inches: 2.067 },
    // PEX, SDR-9
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::ThreeEighths, id_inches: 0.350 },
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::Half, id_inches: 0.475 },
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::FiveEighths, id_inches: 0.574 },
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::ThreeQuarter, id_inches: 0.681 },
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::One, id_inches: 0.862 },
    PipeRow { material: PipeMaterial::Pex, size: NominalSize::OneQuarter, id_inches: 1.054 },
];

/// Look up the pipe spec for a (material, size) pair.
pub fn pipe_spec(material: PipeMaterial, size: NominalSize) -> DataResult<PipeSpec> {
    PIPE_TABLE
        .iter()
        .find(|row| row.material == material && row.size == size)
        .map(|row| PipeSpec {
            material,
            size,
            inner_diameter: inches(row.id_inches),
            roughness: material.roughness(),
            hazen_williams_c: material.hazen_williams_c(),
        })
        .ok_or_else(|| DataError::NotFound {
            what: "pipe",
            key: format!("{} {}\"", material.label(), size.label()),
        })
}

/// Sizes carried for a material, in table order.
pub fn pipe_sizes_for(material: PipeMaterial) -> Vec<NominalSize> {
    PIPE_TABLE
        .iter()
        .filter(|row| row.material == material)
        .map(|row| row.size)
        .collect()
}
