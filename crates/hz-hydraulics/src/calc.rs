//! Core flow correlations, US customary units.

use crate::error::HydraulicsResult;
use hz_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};
use hz_core::units::constants::{G_FT_PER_S2, GPM_PER_CFS};
use hz_core::units::{FlowRate, Length, Velocity, feet, fps, in_feet, in_fps, in_gpm, in_inches};

/// Transition Reynolds number below which flow is treated as laminar.
pub const RE_LAMINAR_LIMIT: f64 = 2300.0;

fn circular_area_ft2(diameter: Length) -> HydraulicsResult<f64> {
    let d_ft = ensure_positive(in_feet(diameter), "pipe inner diameter")?;
    Ok(std::f64::consts::PI / 4.0 * d_ft * d_ft)
}

/// Mean velocity of a flow through a circular pipe.
pub fn flow_velocity(flow: FlowRate, diameter: Length) -> HydraulicsResult<Velocity> {
    let q_cfs = ensure_non_negative(in_gpm(flow), "flow")? / GPM_PER_CFS;
    let area = circular_area_ft2(diameter)?;
    Ok(fps(q_cfs / area))
}

/// Reynolds number, dimensionless. Kinematic viscosity in ft²/s.
pub fn reynolds_number(
    velocity: Velocity,
    diameter: Length,
    kinematic_viscosity_ft2_s: f64,
) -> HydraulicsResult<f64> {
    let v = ensure_non_negative(in_fps(velocity), "velocity")?;
    let d_ft = ensure_positive(in_feet(diameter), "pipe inner diameter")?;
    let nu = ensure_positive(kinematic_viscosity_ft2_s, "kinematic viscosity")?;
    Ok(v * d_ft / nu)
}

/// Darcy friction factor.
///
/// Laminar flow (Re < 2300) is 64/Re and insensitive to wall roughness.
/// Turbulent flow uses the explicit Swamee-Jain approximation to
/// Colebrook-White, which stays within about 1% of the iterative solution
/// for 5000 < Re < 1e8 and keeps this a pure, non-iterative function.
pub fn friction_factor(
    reynolds: f64,
    roughness: Length,
    diameter: Length,
) -> HydraulicsResult<f64> {
    let re = ensure_positive(reynolds, "Reynolds number")?;
    if re < RE_LAMINAR_LIMIT {
        return Ok(64.0 / re);
    }
    let d_ft = ensure_positive(in_feet(diameter), "pipe inner diameter")?;
    let eps_ft = ensure_non_negative(in_feet(roughness), "roughness")?;
    let arg = eps_ft / (3.7 * d_ft) + 5.74 / re.powf(0.9);
    let f = 0.25 / arg.log10().powi(2);
    ensure_finite(f, "friction factor")?;
    Ok(f)
}

/// Darcy-Weisbach head loss: f · (L/D) · V²/2g, in feet of head.
pub fn head_loss_darcy(
    friction: f64,
    total_length: Length,
    velocity: Velocity,
    diameter: Length,
) -> HydraulicsResult<Length> {
    let f = ensure_non_negative(friction, "friction factor")?;
    let l_ft = ensure_non_negative(in_feet(total_length), "total effective length")?;
    let v = ensure_non_negative(in_fps(velocity), "velocity")?;
    let d_ft = ensure_positive(in_feet(diameter), "pipe inner diameter")?;
    Ok(feet(f * (l_ft / d_ft) * v * v / (2.0 * G_FT_PER_S2)))
}

/// Hazen-Williams head loss: 4.52 · L · Q^1.85 / (C^1.85 · D^4.87), feet.
///
/// Empirical and water-only; carries no temperature or viscosity
/// sensitivity and is documented as less accurate for glycol blends or
/// unusual loop temperatures. Q in GPM, D in inches.
pub fn head_loss_hazen_williams(
    flow: FlowRate,
    total_length: Length,
    hazen_williams_c: f64,
    diameter: Length,
) -> HydraulicsResult<Length> {
    let q = ensure_non_negative(in_gpm(flow), "flow")?;
    let l_ft = ensure_non_negative(in_feet(total_length), "total effective length")?;
    let c = ensure_positive(hazen_williams_c, "Hazen-Williams C")?;
    let d_in = ensure_positive(in_inches(diameter), "pipe inner diameter")?;
    Ok(feet(
        4.52 * l_ft * q.powf(1.85) / (c.powf(1.85) * d_in.powf(4.87)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_core::units::{gpm, temp_f};
    use hz_data::{FluidType, NominalSize, PipeMaterial, fluid_properties, pipe_spec};
    use proptest::prelude::*;

    #[test]
    fn velocity_reference_one_inch_copper() {
        // 1" Type L copper at 10 GPM.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
        let v = flow_velocity(gpm(10.0), pipe.inner_diameter).unwrap();
        assert!((in_fps(v) - 3.888).abs() < 0.001);
    }

    #[test]
    fn reynolds_reference_case() {
        // 1" copper, 10 GPM, water at 60 °F: Re ≈ 27,000 within 5%.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
        let props = fluid_properties(FluidType::Water, temp_f(60.0)).unwrap();
        let v = flow_velocity(gpm(10.0), pipe.inner_diameter).unwrap();
        let re = reynolds_number(v, pipe.inner_diameter, props.kinematic_viscosity_ft2_s).unwrap();
        assert!((re - 27_000.0).abs() / 27_000.0 < 0.05, "Re = {re}");
        assert!((re - 27_289.0).abs() < 5.0);
    }

    #[test]
    fn laminar_friction_is_64_over_re() {
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
        for re in [100.0, 500.0, 1500.0, 2299.0] {
            let f = friction_factor(re, pipe.roughness, pipe.inner_diameter).unwrap();
            assert_eq!(f, 64.0 / re);
        }
    }

    #[test]
    fn laminar_friction_ignores_roughness() {
        let smooth = pipe_spec(PipeMaterial::Pex, NominalSize::ThreeQuarter).unwrap();
        let rough = pipe_spec(PipeMaterial::BlackIron, NominalSize::ThreeQuarter).unwrap();
        let f_smooth = friction_factor(1000.0, smooth.roughness, smooth.inner_diameter).unwrap();
        let f_rough = friction_factor(1000.0, rough.roughness, rough.inner_diameter).unwrap();
        assert_eq!(f_smooth, f_rough);
    }

    #[test]
    fn turbulent_friction_swamee_jain() {
        // 3/4" copper, 5 GPM, water at 120 °F: hand-checked f ≈ 0.02270.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::ThreeQuarter).unwrap();
        let props = fluid_properties(FluidType::Water, temp_f(120.0)).unwrap();
        let v = flow_velocity(gpm(5.0), pipe.inner_diameter).unwrap();
        let re = reynolds_number(v, pipe.inner_diameter, props.kinematic_viscosity_ft2_s).unwrap();
        assert!((re - 35_603.0).abs() < 10.0);
        let f = friction_factor(re, pipe.roughness, pipe.inner_diameter).unwrap();
        assert!((f - 0.02270).abs() < 0.0001);
    }

    #[test]
    fn pex_reference_case() {
        // 3/4" PEX, 15 GPM, water at 140 °F, 100 ft straight run.
        let pipe = pipe_spec(PipeMaterial::Pex, NominalSize::ThreeQuarter).unwrap();
        let props = fluid_properties(FluidType::Water, temp_f(140.0)).unwrap();
        let v = flow_velocity(gpm(15.0), pipe.inner_diameter).unwrap();
        assert!((in_fps(v) - 13.21).abs() / 13.21 < 0.01);

        let re = reynolds_number(v, pipe.inner_diameter, props.kinematic_viscosity_ft2_s).unwrap();
        let f = friction_factor(re, pipe.roughness, pipe.inner_diameter).unwrap();
        let h = head_loss_darcy(f, feet(100.0), v, pipe.inner_diameter).unwrap();
        assert!(
            (in_feet(h) - 80.92).abs() / 80.92 < 0.01,
            "head = {} ft",
            in_feet(h)
        );
    }

    #[test]
    fn doubling_length_doubles_darcy_head() {
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::ThreeQuarter).unwrap();
        let props = fluid_properties(FluidType::Water, temp_f(120.0)).unwrap();
        let v = flow_velocity(gpm(5.0), pipe.inner_diameter).unwrap();
        let re = reynolds_number(v, pipe.inner_diameter, props.kinematic_viscosity_ft2_s).unwrap();
        assert!(re > RE_LAMINAR_LIMIT);
        let f = friction_factor(re, pipe.roughness, pipe.inner_diameter).unwrap();
        let h50 = in_feet(head_loss_darcy(f, feet(50.0), v, pipe.inner_diameter).unwrap());
        let h100 = in_feet(head_loss_darcy(f, feet(100.0), v, pipe.inner_diameter).unwrap());
        assert!((h100 - 2.0 * h50).abs() / h100 < 0.01);
    }

    #[test]
    fn hazen_williams_reference() {
        // 1" copper, 10 GPM, 100 ft, C = 150: hand-checked 2.674 ft.
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
        let h = head_loss_hazen_williams(
            gpm(10.0),
            feet(100.0),
            pipe.hazen_williams_c,
            pipe.inner_diameter,
        )
        .unwrap();
        assert!((in_feet(h) - 2.674).abs() < 0.01);
    }

    #[test]
    fn zero_diameter_is_rejected() {
        assert!(flow_velocity(gpm(10.0), feet(0.0)).is_err());
        assert!(reynolds_number(fps(4.0), feet(0.0), 1e-5).is_err());
        assert!(head_loss_darcy(0.02, feet(100.0), fps(4.0), feet(0.0)).is_err());
        assert!(head_loss_hazen_williams(gpm(10.0), feet(100.0), 150.0, feet(0.0)).is_err());
    }

    #[test]
    fn zero_reynolds_is_rejected() {
        let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
        assert!(friction_factor(0.0, pipe.roughness, pipe.inner_diameter).is_err());
    }

    proptest! {
        #[test]
        fn velocity_scales_linearly_with_flow(q in 0.1..50.0f64) {
            let pipe = pipe_spec(PipeMaterial::Copper, NominalSize::One).unwrap();
            let v1 = in_fps(flow_velocity(gpm(q), pipe.inner_diameter).unwrap());
            let v2 = in_fps(flow_velocity(gpm(2.0 * q), pipe.inner_diameter).unwrap());
            prop_assert!((v2 - 2.0 * v1).abs() < 1e-9 * v2.max(1.0));
        }

        #[test]
        fn friction_factor_is_positive_and_finite(re in 10.0..1e7f64) {
            let pipe = pipe_spec(PipeMaterial::BlackIron, NominalSize::One).unwrap();
            let f = friction_factor(re, pipe.roughness, pipe.inner_diameter).unwrap();
            prop_assert!(f.is_finite() && f > 0.0);
        }
    }
}
