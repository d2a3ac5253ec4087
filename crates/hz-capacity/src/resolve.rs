//! Causality resolution: requested load vs hydraulic and emitter ceilings.
//!
//! The central invariant of the sizing engine: a zone delivers
//! min(requested, hydraulic ceiling, emitter ceiling), the binding
//! constraint is recorded, actual flow follows from whichever constraint
//! binds, and actual ΔT is computed last, from delivered (never requested)
//! BTU.

use crate::error::CapacityResult;
use crate::limits::{
    DELTA_T_FLOOR_F, VelocityCeiling, hydraulic_capacity, max_flow_from_velocity,
    zone_max_capacity,
};
use hz_core::numeric::{ensure_non_negative, ensure_positive};
use hz_core::units::constants::BTU_HR_PER_GPM_F;
use hz_core::units::{
    FlowRate, Length, Power, TempInterval, Temperature, btu_hr, delta_f, gpm, in_btu_hr,
    in_delta_f, in_gpm,
};
use hz_data::{EmitterSpec, FluidType, PipeSpec};

/// How the zone's design temperature differential is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaTMode {
    /// Use the emitter's default design ΔT.
    Auto,
    /// User-specified ΔT.
    Manual(TempInterval),
}

/// Which ceiling equals the delivered load.
///
/// Hydraulic and emitter limits are kept distinct so UI warnings never
/// conflate an undersized pipe with an undersized emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingConstraint {
    Requested,
    Hydraulic,
    Emitter,
}

impl BindingConstraint {
    pub fn label(self) -> &'static str {
        match self {
            BindingConstraint::Requested => "requested load",
            BindingConstraint::Hydraulic => "hydraulic ceiling",
            BindingConstraint::Emitter => "emitter ceiling",
        }
    }
}

/// The causally consistent operating point for one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneResolution {
    pub requested: Power,
    pub delivered: Power,
    /// Actual circulation rate the zone runs at.
    pub flow: FlowRate,
    pub design_delta_t: TempInterval,
    /// delivered / (500 · flow); the differential the loop actually sees.
    pub actual_delta_t: TempInterval,
    /// Absolute-ceiling throughput before the capacity offset.
    pub raw_hydraulic_ceiling: Power,
    /// Offset-discounted hydraulic ceiling used in the resolution.
    pub hydraulic_ceiling: Power,
    pub emitter_ceiling: Power,
    pub max_absolute_flow: FlowRate,
    pub binding: BindingConstraint,
    /// Resolved ΔT fell below the design floor; a mis-sized or severely
    /// constrained zone, surfaced rather than hidden.
    pub low_delta_t: bool,
}

/// Resolve one zone's requested load against both capacity ceilings.
pub fn resolve_zone_load(
    requested: Power,
    mode: DeltaTMode,
    pipe: &PipeSpec,
    fluid: FluidType,
    emitter: &EmitterSpec,
    installed_length: Length,
    supply: Temperature,
) -> CapacityResult<ZoneResolution> {
    let design_delta_t = match mode {
        DeltaTMode::Auto => emitter.default_delta_t,
        DeltaTMode::Manual(dt) => dt,
    };
    let dt_f = ensure_positive(in_delta_f(design_delta_t), "design ΔT")?;
    let req_btu = ensure_non_negative(in_btu_hr(requested), "requested load")?;

    // Flow the requested load implies at the design differential.
    let requested_flow_gpm = req_btu / (BTU_HR_PER_GPM_F * dt_f);

    // Both ceilings, computed independently.
    let max_absolute_flow =
        max_flow_from_velocity(pipe.inner_diameter, fluid, VelocityCeiling::Absolute)?;
    let raw_hydraulic_ceiling = hydraulic_capacity(max_absolute_flow, design_delta_t)?;
    let hydraulic_ceiling = zone_max_capacity(
        pipe.inner_diameter,
        fluid,
        design_delta_t,
        emitter.capacity_offset,
    )?;
    let emitter_ceiling = emitter.max_output(installed_length, supply, gpm(requested_flow_gpm))?;

    let hyd_btu = in_btu_hr(hydraulic_ceiling);
    let em_btu = in_btu_hr(emitter_ceiling);
    let delivered_btu = req_btu.min(hyd_btu).min(em_btu);

    // Tie-break order: requested, then hydraulic, then emitter.
    let binding = if req_btu <= hyd_btu && req_btu <= em_btu {
        BindingConstraint::Requested
    } else if hyd_btu <= em_btu {
        BindingConstraint::Hydraulic
    } else {
        BindingConstraint::Emitter
    };

    // When hydraulics bind, the pipe runs flat out at its ceiling flow;
    // otherwise the circulator is set for the requested load.
    let actual_flow_gpm = match binding {
        BindingConstraint::Hydraulic => in_gpm(max_absolute_flow),
        _ => requested_flow_gpm,
    };

    // Always last, always from delivered BTU.
    let actual_dt_f = if actual_flow_gpm > 0.0 {
        delivered_btu / (BTU_HR_PER_GPM_F * actual_flow_gpm)
    } else {
        dt_f
    };

    Ok(ZoneResolution {
        requested,
        delivered: btu_hr(delivered_btu),
        flow: gpm(actual_flow_gpm),
        design_delta_t,
        actual_delta_t: delta_f(actual_dt_f),
        raw_hydraulic_ceiling,
        hydraulic_ceiling,
        emitter_ceiling,
        max_absolute_flow,
        binding,
        low_delta_t: delivered_btu > 0.0 && actual_dt_f < DELTA_T_FLOOR_F,
    })
}
