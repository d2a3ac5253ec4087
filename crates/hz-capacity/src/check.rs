//! Velocity-based capacity diagnostics.
//!
//! These are informational flags on a valid result, never failures; the
//! sizing computation is never blocked on them.

use crate::error::CapacityResult;
use crate::limits::{LOW_VELOCITY_FPS, VelocityCeiling, max_flow_from_velocity, velocity_limit};
use hz_core::units::{FlowRate, Length, Velocity, in_fps, in_gpm};
use hz_data::FluidType;

/// Diagnostics from checking a zone's operating flow against its pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCheck {
    /// Velocity above the recommended ceiling (noise/erosion warning).
    pub exceeds_recommended: bool,
    /// Velocity above the absolute ceiling.
    pub exceeds_absolute: bool,
    /// Operating flow as a percentage of the recommended-ceiling flow.
    pub utilization_percent: f64,
    pub max_recommended_flow: FlowRate,
    pub max_absolute_flow: FlowRate,
    /// At or below the air-separation velocity threshold.
    pub has_low_velocity: bool,
}

/// Check an operating (flow, velocity) point against the pipe's ceilings.
pub fn check_hydraulic_capacity(
    flow: FlowRate,
    velocity: Velocity,
    diameter: Length,
    fluid: FluidType,
) -> CapacityResult<CapacityCheck> {
    let max_recommended_flow =
        max_flow_from_velocity(diameter, fluid, VelocityCeiling::Recommended)?;
    let max_absolute_flow = max_flow_from_velocity(diameter, fluid, VelocityCeiling::Absolute)?;

    let v = in_fps(velocity);
    let v_rec = in_fps(velocity_limit(fluid, VelocityCeiling::Recommended));
    let v_abs = in_fps(velocity_limit(fluid, VelocityCeiling::Absolute));

    Ok(CapacityCheck {
        exceeds_recommended: v > v_rec,
        exceeds_absolute: v > v_abs,
        utilization_percent: 100.0 * in_gpm(flow) / in_gpm(max_recommended_flow),
        max_recommended_flow,
        max_absolute_flow,
        has_low_velocity: v <= LOW_VELOCITY_FPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_core::units::gpm;
    use hz_data::{NominalSize, PipeMaterial, pipe_spec};
    use hz_hydraulics::flow_velocity;

    fn check_at(material: PipeMaterial, size: NominalSize, q_gpm: f64) -> CapacityCheck {
        let pipe = pipe_spec(material, size).unwrap();
        let v = flow_velocity(gpm(q_gpm), pipe.inner_diameter).unwrap();
        check_hydraulic_capacity(gpm(q_gpm), v, pipe.inner_diameter, FluidType::Water).unwrap()
    }

    #[test]
    fn half_inch_copper_at_4_gpm_exceeds_recommended() {
        // 5.50 ft/s: over the 4 ft/s recommendation, under the 8 ft/s limit.
        let check = check_at(PipeMaterial::Copper, NominalSize::Half, 4.0);
        assert!(check.exceeds_recommended);
        assert!(!check.exceeds_absolute);
        assert!(!check.has_low_velocity);
        assert!(check.utilization_percent > 100.0);
    }

    #[test]
    fn inch_and_quarter_copper_at_10_gpm_is_clean() {
        // 2.55 ft/s: inside every ceiling, above the air-separation floor.
        let check = check_at(PipeMaterial::Copper, NominalSize::OneQuarter, 10.0);
        assert!(!check.exceeds_recommended);
        assert!(!check.exceeds_absolute);
        assert!(!check.has_low_velocity);
        assert!((check.utilization_percent - 63.8).abs() < 0.2);
    }

    #[test]
    fn crawling_flow_flags_low_velocity() {
        let check = check_at(PipeMaterial::Copper, NominalSize::OneQuarter, 2.0);
        assert!(check.has_low_velocity);
        assert!(!check.exceeds_recommended);
    }

    #[test]
    fn low_and_high_flags_are_independent() {
        // Low-velocity triggers regardless of the high-velocity checks.
        let slow = check_at(PipeMaterial::Copper, NominalSize::Two, 5.0);
        assert!(slow.has_low_velocity);
        assert!(!slow.exceeds_recommended && !slow.exceeds_absolute);

        let fast = check_at(PipeMaterial::Copper, NominalSize::Half, 6.0);
        assert!(!fast.has_low_velocity);
        assert!(fast.exceeds_recommended && fast.exceeds_absolute);
    }
}
