//! System resolution: per-zone sizing plus parallel-branch aggregation.

use crate::distribute::assign_shares;
use crate::error::SystemError;
use crate::input::{SystemInput, ZoneInput};
use hz_capacity::{CapacityCheck, ZoneResolution, check_hydraulic_capacity, resolve_zone_load};
use hz_core::units::{
    FlowRate, Length, Power, Temperature, Velocity, btu_hr, feet, fps, gpm, in_btu_hr, in_feet,
    in_gpm,
};
use hz_data::{FluidType, emitter_spec, fluid_properties, pipe_spec};
use hz_hydraulics::{
    EffectiveLength, effective_length, flow_velocity, friction_factor, head_loss_darcy,
    head_loss_hazen_williams, reynolds_number,
};
use tracing::{debug, warn};

/// Fully sized zone with every intermediate the report trace needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneResult {
    pub name: String,
    /// Load assigned to this zone by distribution (share or override).
    pub assigned: Power,
    pub resolution: ZoneResolution,
    pub lengths: EffectiveLength,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub head_loss_darcy: Length,
    pub head_loss_hazen_williams: Length,
    pub check: CapacityCheck,
    /// assigned − delivered, never negative.
    pub undeliverable: Power,
}

/// Per-zone outcome: sized, or invalid with the reason attached.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneOutcome {
    Sized(Box<ZoneResult>),
    Invalid {
        name: String,
        assigned: Power,
        error: SystemError,
    },
}

impl ZoneOutcome {
    pub fn name(&self) -> &str {
        match self {
            ZoneOutcome::Sized(z) => &z.name,
            ZoneOutcome::Invalid { name, .. } => name,
        }
    }

    pub fn as_sized(&self) -> Option<&ZoneResult> {
        match self {
            ZoneOutcome::Sized(z) => Some(z),
            ZoneOutcome::Invalid { .. } => None,
        }
    }
}

/// The system-level sizing result.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedSystem {
    pub name: String,
    pub fluid: FluidType,
    pub supply_temperature: Temperature,
    pub design_load: Power,
    pub zones: Vec<ZoneOutcome>,
    /// Sum of zone flows; zones are parallel branches of one manifold.
    pub total_flow: FlowRate,
    /// Maximum (not sum) of zone head losses: the pump sees the worst
    /// branch, and every branch sees the same differential.
    pub required_head: Length,
    /// Zone achieving the maximum head loss.
    pub critical_zone: Option<String>,
    pub delivered_total: Power,
    pub undeliverable_total: Power,
}

fn size_zone(
    zone: &ZoneInput,
    assigned: Power,
    fluid: FluidType,
    supply: Temperature,
) -> Result<ZoneResult, SystemError> {
    let pipe = pipe_spec(zone.material, zone.size)?;
    let emitter = emitter_spec(zone.emitter);
    let props = fluid_properties(fluid, supply)?;

    let resolution = resolve_zone_load(
        assigned,
        zone.delta_t,
        &pipe,
        fluid,
        &emitter,
        zone.emitter_length,
        supply,
    )?;

    let emitter_equivalent = feet(emitter.equivalent_length_per_ft * in_feet(zone.emitter_length));
    let lengths = effective_length(
        zone.straight_length,
        &zone.fittings,
        zone.material,
        zone.size,
        emitter_equivalent,
    )?;

    // A zone with nothing assigned idles: no flow, no loss. The friction
    // correlations are undefined at Re = 0, so short-circuit here.
    let (velocity, reynolds, friction, h_darcy, h_hw) = if in_gpm(resolution.flow) > 0.0 {
        let velocity = flow_velocity(resolution.flow, pipe.inner_diameter)?;
        let reynolds =
            reynolds_number(velocity, pipe.inner_diameter, props.kinematic_viscosity_ft2_s)?;
        let friction = friction_factor(reynolds, pipe.roughness, pipe.inner_diameter)?;
        let h_darcy = head_loss_darcy(friction, lengths.total(), velocity, pipe.inner_diameter)?;
        let h_hw = head_loss_hazen_williams(
            resolution.flow,
            lengths.total(),
            pipe.hazen_williams_c,
            pipe.inner_diameter,
        )?;
        (velocity, reynolds, friction, h_darcy, h_hw)
    } else {
        (fps(0.0), 0.0, 0.0, feet(0.0), feet(0.0))
    };

    let check =
        check_hydraulic_capacity(resolution.flow, velocity, pipe.inner_diameter, fluid)?;

    let undeliverable = btu_hr(
        (in_btu_hr(assigned) - in_btu_hr(resolution.delivered)).max(0.0),
    );

    Ok(ZoneResult {
        name: zone.name.clone(),
        assigned,
        resolution,
        lengths,
        velocity,
        reynolds,
        friction_factor: friction,
        head_loss_darcy: h_darcy,
        head_loss_hazen_williams: h_hw,
        check,
        undeliverable,
    })
}

/// Size the whole system from one input snapshot.
///
/// Invalid zones are excluded from the sums but reported individually;
/// their assigned load is booked as undeliverable so the accounting
/// identity Σ delivered + Σ undeliverable = Σ shares holds exactly.
pub fn size_system(input: &SystemInput) -> SizedSystem {
    let shares = assign_shares(input.design_load, &input.zones);

    let mut zones = Vec::with_capacity(input.zones.len());
    let mut total_flow_gpm = 0.0;
    let mut delivered_btu = 0.0;
    let mut undeliverable_btu = 0.0;
    let mut required_head_ft = 0.0;
    let mut critical_zone: Option<String> = None;

    for (zone, share) in input.zones.iter().zip(shares) {
        match size_zone(zone, share, input.fluid, input.supply_temperature) {
            Ok(sized) => {
                debug!(
                    zone = %sized.name,
                    flow_gpm = in_gpm(sized.resolution.flow),
                    head_ft = in_feet(sized.head_loss_darcy),
                    binding = sized.resolution.binding.label(),
                    "zone sized"
                );
                total_flow_gpm += in_gpm(sized.resolution.flow);
                delivered_btu += in_btu_hr(sized.resolution.delivered);
                undeliverable_btu += in_btu_hr(sized.undeliverable);
                if in_btu_hr(sized.undeliverable) > 0.0 {
                    warn!(
                        zone = %sized.name,
                        shortfall_btu_hr = in_btu_hr(sized.undeliverable),
                        binding = sized.resolution.binding.label(),
                        "zone cannot carry its assigned load"
                    );
                }

                let head_ft = in_feet(sized.head_loss_darcy);
                if critical_zone.is_none() || head_ft > required_head_ft {
                    required_head_ft = head_ft;
                    critical_zone = Some(sized.name.clone());
                }
                zones.push(ZoneOutcome::Sized(Box::new(sized)));
            }
            Err(error) => {
                warn!(zone = %zone.name, %error, "zone invalid; excluded from system sums");
                undeliverable_btu += in_btu_hr(share);
                zones.push(ZoneOutcome::Invalid {
                    name: zone.name.clone(),
                    assigned: share,
                    error,
                });
            }
        }
    }

    SizedSystem {
        name: input.name.clone(),
        fluid: input.fluid,
        supply_temperature: input.supply_temperature,
        design_load: input.design_load,
        zones,
        total_flow: gpm(total_flow_gpm),
        required_head: feet(required_head_ft),
        critical_zone,
        delivered_total: btu_hr(delivered_btu),
        undeliverable_total: btu_hr(undeliverable_btu),
    }
}
