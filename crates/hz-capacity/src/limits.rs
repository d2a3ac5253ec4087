//! Velocity ceilings and the flow/BTU capacity they imply.

use crate::error::CapacityResult;
use hz_core::numeric::ensure_positive;
use hz_core::units::constants::{BTU_HR_PER_GPM_F, GPM_PER_CFS};
use hz_core::units::{
    FlowRate, Length, Power, TempInterval, Velocity, btu_hr, fps, gpm, in_delta_f, in_feet,
    in_fps, in_gpm,
};
use hz_data::FluidType;

/// Velocity at or below which the stream can no longer carry entrained air
/// to the separator, ft/s.
pub const LOW_VELOCITY_FPS: f64 = 2.0;

/// Design floor for a resolved temperature differential, °F. Falling below
/// it is flagged, never clamped.
pub const DELTA_T_FLOOR_F: f64 = 10.0;

/// Which velocity ceiling applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityCeiling {
    /// Design target; exceeding it is a noise/erosion warning.
    Recommended,
    /// Hard limit; flow capacity is computed against this ceiling.
    Absolute,
}

/// Velocity ceiling by fluid. Glycol runs slower than water: the more
/// viscous blend erodes and sings at lower velocities.
pub fn velocity_limit(fluid: FluidType, ceiling: VelocityCeiling) -> Velocity {
    let v = match (fluid, ceiling) {
        (FluidType::Water, VelocityCeiling::Recommended) => 4.0,
        (FluidType::Water, VelocityCeiling::Absolute) => 8.0,
        (FluidType::Glycol30, VelocityCeiling::Recommended) => 3.5,
        (FluidType::Glycol30, VelocityCeiling::Absolute) => 7.0,
        (FluidType::Glycol50, VelocityCeiling::Recommended) => 3.0,
        (FluidType::Glycol50, VelocityCeiling::Absolute) => 6.0,
    };
    fps(v)
}

/// Maximum flow a pipe can carry at the applicable velocity ceiling.
///
/// Inverts the velocity formula: Q = V · A.
pub fn max_flow_from_velocity(
    diameter: Length,
    fluid: FluidType,
    ceiling: VelocityCeiling,
) -> CapacityResult<FlowRate> {
    let d_ft = ensure_positive(in_feet(diameter), "pipe inner diameter")?;
    let area = std::f64::consts::PI / 4.0 * d_ft * d_ft;
    let v = in_fps(velocity_limit(fluid, ceiling));
    Ok(gpm(v * area * GPM_PER_CFS))
}

/// Raw hydraulic BTU throughput of a flow at a temperature differential:
/// Q · 500 · ΔT. The 500 BTU/(hr·GPM·°F) constant is water's and is used
/// for all fluid types here, a documented simplification.
pub fn hydraulic_capacity(max_flow: FlowRate, delta_t: TempInterval) -> CapacityResult<Power> {
    let q = ensure_positive(in_gpm(max_flow), "capacity flow")?;
    let dt = ensure_positive(in_delta_f(delta_t), "temperature differential")?;
    Ok(btu_hr(q * BTU_HR_PER_GPM_F * dt))
}

/// Hydraulic BTU ceiling discounted by the emitter's capacity offset.
///
/// The offset (0 < offset ≤ 1) models the emitter's limited thermal use of
/// very high flow and exists to keep the resolved ΔT from collapsing toward
/// zero. It applies only to the thermal ceiling, never to the pipe-sizing
/// flow calculation.
pub fn effective_hydraulic_capacity(
    max_flow: FlowRate,
    delta_t: TempInterval,
    capacity_offset: f64,
) -> CapacityResult<Power> {
    let offset = ensure_positive(capacity_offset, "capacity offset")?;
    if offset > 1.0 {
        return Err(hz_core::HzError::NonPhysical {
            what: "capacity offset",
            value: offset,
        }
        .into());
    }
    let raw = hydraulic_capacity(max_flow, delta_t)?;
    Ok(btu_hr(hz_core::units::in_btu_hr(raw) * offset))
}

/// A zone's maximum deliverable load through its pipe at a design ΔT:
/// the absolute-ceiling flow discounted by the emitter's capacity offset.
pub fn zone_max_capacity(
    diameter: Length,
    fluid: FluidType,
    delta_t: TempInterval,
    capacity_offset: f64,
) -> CapacityResult<Power> {
    let max_flow = max_flow_from_velocity(diameter, fluid, VelocityCeiling::Absolute)?;
    effective_hydraulic_capacity(max_flow, delta_t, capacity_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_core::units::{delta_f, in_btu_hr};
    use hz_data::{NominalSize, PipeMaterial, pipe_spec};

    #[test]
    fn water_ceilings_above_glycol() {
        for ceiling in [VelocityCeiling::Recommended, VelocityCeiling::Absolute] {
            let water = velocity_limit(FluidType::Water, ceiling);
            let g30 = velocity_limit(FluidType::Glycol30, ceiling);
            let g50 = velocity_limit(FluidType::Glycol50, ceiling);
            assert!(water > g30);
            assert!(g30 > g50);
        }
    }

    #[test]
    fn half_inch_copper_flow_limits() {
        // Hand-checked: 1/2" copper (ID 0.545) carries 2.909 GPM at 4 ft/s
        // and 5.817 GPM at 8 ft/s.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::Half).unwrap();
        let rec = max_flow_from_velocity(
            pipe.inner_diameter,
            FluidType::Water,
            VelocityCeiling::Recommended,
        )
        .unwrap();
        let abs = max_flow_from_velocity(
            pipe.inner_diameter,
            FluidType::Water,
            VelocityCeiling::Absolute,
        )
        .unwrap();
        assert!((in_gpm(rec) - 2.909).abs() < 0.001);
        assert!((in_gpm(abs) - 5.817).abs() < 0.001);
    }

    #[test]
    fn capacity_is_flow_times_500_times_dt() {
        let cap = hydraulic_capacity(gpm(4.0), delta_f(20.0)).unwrap();
        assert!((in_btu_hr(cap) - 40_000.0).abs() < 1e-6);
    }

    #[test]
    fn offset_discounts_thermal_ceiling_only() {
        let raw = hydraulic_capacity(gpm(10.0), delta_f(20.0)).unwrap();
        let eff = effective_hydraulic_capacity(gpm(10.0), delta_f(20.0), 0.7).unwrap();
        assert!((in_btu_hr(eff) - 0.7 * in_btu_hr(raw)).abs() < 1e-6);
    }

    #[test]
    fn offset_outside_unit_interval_rejected() {
        assert!(effective_hydraulic_capacity(gpm(10.0), delta_f(20.0), 0.0).is_err());
        assert!(effective_hydraulic_capacity(gpm(10.0), delta_f(20.0), 1.2).is_err());
    }

    #[test]
    fn zero_delta_t_resolves_to_error_not_nan() {
        assert!(hydraulic_capacity(gpm(10.0), delta_f(0.0)).is_err());
    }

    #[test]
    fn zone_max_capacity_composes_flow_and_offset() {
        // 1/2" copper, water, ΔT 20, offset 0.7:
        // 5.817 GPM · 500 · 20 · 0.7 ≈ 40,718 BTU/hr.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::Half).unwrap();
        let cap = zone_max_capacity(pipe.inner_diameter, FluidType::Water, delta_f(20.0), 0.7)
            .unwrap();
        assert!((in_btu_hr(cap) - 40_718.0).abs() < 10.0);

        let abs = max_flow_from_velocity(
            pipe.inner_diameter,
            FluidType::Water,
            VelocityCeiling::Absolute,
        )
        .unwrap();
        let eff = effective_hydraulic_capacity(abs, delta_f(20.0), 0.7).unwrap();
        assert!((in_btu_hr(cap) - in_btu_hr(eff)).abs() < 1e-9);
    }
}
