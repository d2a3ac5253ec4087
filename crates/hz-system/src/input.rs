//! Input snapshot types.
//!
//! Constructed fresh for every calculation and discarded after one result;
//! nothing here is mutated by the engine.

use hz_capacity::DeltaTMode;
use hz_core::units::{Length, Power, Temperature};
use hz_data::{EmitterType, FittingCount, FluidType, NominalSize, PipeMaterial};

/// One heating zone as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneInput {
    pub name: String,
    /// Manual load override; `None` takes an even share of the system load.
    pub load_override: Option<Power>,
    pub delta_t: DeltaTMode,
    pub material: PipeMaterial,
    pub size: NominalSize,
    pub straight_length: Length,
    pub fittings: Vec<FittingCount>,
    pub emitter: EmitterType,
    /// Installed emitter length (feet of baseboard, radiator, or loop).
    pub emitter_length: Length,
}

/// The full system snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInput {
    pub name: String,
    pub fluid: FluidType,
    pub supply_temperature: Temperature,
    /// System design heat load to distribute across zones.
    pub design_load: Power,
    pub zones: Vec<ZoneInput>,
}
