//! Report trace data types.

use hz_core::units::{in_btu_hr, in_delta_f, in_feet, in_fps, in_gpm, in_temp_f};
use hz_system::{SizedSystem, ZoneOutcome, ZoneResult};
use serde::{Deserialize, Serialize};

/// Full derivation for one sized zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDerivation {
    pub delivered_btu_hr: f64,
    pub undeliverable_btu_hr: f64,
    pub flow_gpm: f64,
    pub velocity_ft_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub design_delta_t_f: f64,
    pub actual_delta_t_f: f64,
    // Length breakdown, so the report can show the sum being built.
    pub straight_ft: f64,
    pub fittings_ft: f64,
    pub emitter_equiv_ft: f64,
    pub total_length_ft: f64,
    // Both head-loss methods.
    pub head_loss_darcy_ft: f64,
    pub head_loss_hazen_williams_ft: f64,
    // The capacity ladder.
    pub raw_hydraulic_ceiling_btu_hr: f64,
    pub hydraulic_ceiling_btu_hr: f64,
    pub emitter_ceiling_btu_hr: f64,
    pub max_recommended_gpm: f64,
    pub max_absolute_gpm: f64,
    pub utilization_percent: f64,
    pub binding_constraint: String,
    // Diagnostics.
    pub exceeds_recommended: bool,
    pub exceeds_absolute: bool,
    pub has_low_velocity: bool,
    pub low_delta_t: bool,
}

/// One zone in the trace: sized with its derivation, or invalid with the
/// reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneTrace {
    pub zone: String,
    pub assigned_btu_hr: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivation: Option<ZoneDerivation>,
}

/// The system-level trace handed to the report collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemTrace {
    pub system: String,
    pub fluid: String,
    pub supply_temp_f: f64,
    pub design_load_btu_hr: f64,
    pub total_flow_gpm: f64,
    pub required_head_ft: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_zone: Option<String>,
    pub delivered_btu_hr: f64,
    pub undeliverable_btu_hr: f64,
    pub zones: Vec<ZoneTrace>,
}

fn derivation_of(zone: &ZoneResult) -> ZoneDerivation {
    ZoneDerivation {
        delivered_btu_hr: in_btu_hr(zone.resolution.delivered),
        undeliverable_btu_hr: in_btu_hr(zone.undeliverable),
        flow_gpm: in_gpm(zone.resolution.flow),
        velocity_ft_s: in_fps(zone.velocity),
        reynolds: zone.reynolds,
        friction_factor: zone.friction_factor,
        design_delta_t_f: in_delta_f(zone.resolution.design_delta_t),
        actual_delta_t_f: in_delta_f(zone.resolution.actual_delta_t),
        straight_ft: in_feet(zone.lengths.straight),
        fittings_ft: in_feet(zone.lengths.fittings),
        emitter_equiv_ft: in_feet(zone.lengths.emitter),
        total_length_ft: in_feet(zone.lengths.total()),
        head_loss_darcy_ft: in_feet(zone.head_loss_darcy),
        head_loss_hazen_williams_ft: in_feet(zone.head_loss_hazen_williams),
        raw_hydraulic_ceiling_btu_hr: in_btu_hr(zone.resolution.raw_hydraulic_ceiling),
        hydraulic_ceiling_btu_hr: in_btu_hr(zone.resolution.hydraulic_ceiling),
        emitter_ceiling_btu_hr: in_btu_hr(zone.resolution.emitter_ceiling),
        max_recommended_gpm: in_gpm(zone.check.max_recommended_flow),
        max_absolute_gpm: in_gpm(zone.check.max_absolute_flow),
        utilization_percent: zone.check.utilization_percent,
        binding_constraint: zone.resolution.binding.label().to_string(),
        exceeds_recommended: zone.check.exceeds_recommended,
        exceeds_absolute: zone.check.exceeds_absolute,
        has_low_velocity: zone.check.has_low_velocity,
        low_delta_t: zone.resolution.low_delta_t,
    }
}

impl SystemTrace {
    /// Copy a sizing result into the trace; no value is recomputed.
    pub fn from_sized(result: &SizedSystem) -> Self {
        let zones = result
            .zones
            .iter()
            .map(|outcome| match outcome {
                ZoneOutcome::Sized(zone) => ZoneTrace {
                    zone: zone.name.clone(),
                    assigned_btu_hr: in_btu_hr(zone.assigned),
                    error: None,
                    derivation: Some(derivation_of(zone)),
                },
                ZoneOutcome::Invalid {
                    name,
                    assigned,
                    error,
                } => ZoneTrace {
                    zone: name.clone(),
                    assigned_btu_hr: in_btu_hr(*assigned),
                    error: Some(error.to_string()),
                    derivation: None,
                },
            })
            .collect();

        SystemTrace {
            system: result.name.clone(),
            fluid: result.fluid.label().to_string(),
            supply_temp_f: in_temp_f(result.supply_temperature),
            design_load_btu_hr: in_btu_hr(result.design_load),
            total_flow_gpm: in_gpm(result.total_flow),
            required_head_ft: in_feet(result.required_head),
            critical_zone: result.critical_zone.clone(),
            delivered_btu_hr: in_btu_hr(result.delivered_total),
            undeliverable_btu_hr: in_btu_hr(result.undeliverable_total),
            zones,
        }
    }
}
