//! Project validation and conversion to engine input types.

use crate::schema::{Project, SCHEMA_VERSION, SystemDef, ZoneDef};
use hz_capacity::DeltaTMode;
use hz_core::units::{btu_hr, delta_f, feet, temp_f};
use hz_data::{
    DataError, EmitterType, FittingCount, FittingType, FluidType, NominalSize, PipeMaterial,
    fluid_properties, pipe_spec,
};
use hz_system::{SystemInput, ZoneInput};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("unsupported project version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Validate a whole project file.
///
/// Runs the same checks as [`system_input`] on every system, so a project
/// that validates converts without error.
pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut system_names = HashSet::new();
    for system in &project.systems {
        if !system_names.insert(&system.name) {
            return Err(ValidationError::DuplicateName {
                name: system.name.clone(),
                context: "systems".to_string(),
            });
        }
        system_input(system)?;
    }
    Ok(())
}

/// Convert every system in a validated project.
pub fn system_inputs(project: &Project) -> Result<Vec<SystemInput>, ValidationError> {
    if project.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }
    project.systems.iter().map(system_input).collect()
}

/// Parse and range-check one system definition into an engine snapshot.
pub fn system_input(def: &SystemDef) -> Result<SystemInput, ValidationError> {
    let fluid = FluidType::parse(&def.fluid)?;

    validate_positive(
        &format!("system '{}' design_load_btu_hr", def.name),
        def.design_load_btu_hr,
    )?;
    validate_finite(
        &format!("system '{}' supply_temp_f", def.name),
        def.supply_temp_f,
    )?;
    let supply_temperature = temp_f(def.supply_temp_f);
    // The property table bounds the usable temperature range.
    fluid_properties(fluid, supply_temperature)?;

    let mut zone_names = HashSet::new();
    let mut zones = Vec::with_capacity(def.zones.len());
    for zone in &def.zones {
        if !zone_names.insert(&zone.name) {
            return Err(ValidationError::DuplicateName {
                name: zone.name.clone(),
                context: format!("system '{}' zones", def.name),
            });
        }
        zones.push(zone_input(zone)?);
    }

    Ok(SystemInput {
        name: def.name.clone(),
        fluid,
        supply_temperature,
        design_load: btu_hr(def.design_load_btu_hr),
        zones,
    })
}

fn zone_input(def: &ZoneDef) -> Result<ZoneInput, ValidationError> {
    let material = PipeMaterial::parse(&def.material)?;
    let size = NominalSize::parse(&def.size)?;
    // The pairing must exist in the pipe table, not just both halves.
    pipe_spec(material, size)?;
    let emitter = EmitterType::parse(&def.emitter)?;

    validate_non_negative(&format!("zone '{}' straight_ft", def.name), def.straight_ft)?;
    validate_positive(&format!("zone '{}' emitter_ft", def.name), def.emitter_ft)?;

    let load_override = match def.load_btu_hr {
        Some(load) => {
            validate_non_negative(&format!("zone '{}' load_btu_hr", def.name), load)?;
            Some(btu_hr(load))
        }
        None => None,
    };
    let delta_t = match def.delta_t_f {
        Some(dt) => {
            validate_positive(&format!("zone '{}' delta_t_f", def.name), dt)?;
            DeltaTMode::Manual(delta_f(dt))
        }
        None => DeltaTMode::Auto,
    };

    let fittings = def
        .fittings
        .iter()
        .map(|f| {
            Ok(FittingCount {
                fitting: FittingType::parse(&f.kind)?,
                count: f.count,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(ZoneInput {
        name: def.name.clone(),
        load_override,
        delta_t,
        material,
        size,
        straight_length: feet(def.straight_ft),
        fittings,
        emitter,
        emitter_length: feet(def.emitter_ft),
    })
}

fn validate_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}

fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be non-negative and finite",
        });
    }
    Ok(())
}
