//! Project schema definitions.
//!
//! Everything here is the on-disk YAML shape: strings for catalog keys and
//! unit-suffixed f64 fields. Parsing to typed enums and range checking
//! happen in [`crate::validate`].

use serde::{Deserialize, Serialize};

/// Current project file version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub systems: Vec<SystemDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    pub name: String,
    /// Fluid key: `water`, `glycol30`, `glycol50`.
    pub fluid: String,
    pub supply_temp_f: f64,
    pub design_load_btu_hr: f64,
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDef {
    pub name: String,
    /// Manual load override; absent means an even share of the system load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_btu_hr: Option<f64>,
    /// Manual design ΔT; absent means the emitter's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_t_f: Option<f64>,
    /// Pipe material key: `copper`, `black_iron`, `pex`.
    pub material: String,
    /// Nominal size label such as `3/4` or `1-1/4`.
    pub size: String,
    pub straight_ft: f64,
    #[serde(default)]
    pub fittings: Vec<FittingDef>,
    /// Emitter key: `baseboard`, `cast_iron`, `radiant`.
    pub emitter: String,
    pub emitter_ft: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FittingDef {
    /// Fitting key: `elbow90`, `elbow45`, `tee`.
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
}
