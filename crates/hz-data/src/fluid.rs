//! Fluid property tables for water and glycol blends.
//!
//! Water rows are tabulated in US units at 10 °F steps with linear
//! interpolation between rows. Glycol blends are multiplicative
//! adjustments over water's properties, which is adequate for the velocity
//! and Reynolds ranges a hydronic loop sees.

use crate::error::{DataError, DataResult};
use hz_core::units::{Density, Temperature, in_temp_f, lb_per_ft3};

/// Heat-transfer fluid circulating in the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FluidType {
    Water,
    /// 30% propylene glycol.
    Glycol30,
    /// 50% propylene glycol.
    Glycol50,
}

impl FluidType {
    pub fn label(self) -> &'static str {
        match self {
            FluidType::Water => "water",
            FluidType::Glycol30 => "30% glycol",
            FluidType::Glycol50 => "50% glycol",
        }
    }

    pub fn parse(name: &str) -> DataResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "water" => Ok(FluidType::Water),
            "glycol30" | "glycol 30" | "30% glycol" => Ok(FluidType::Glycol30),
            "glycol50" | "glycol 50" | "50% glycol" => Ok(FluidType::Glycol50),
            _ => Err(DataError::UnknownName {
                what: "fluid type",
                name: name.to_string(),
            }),
        }
    }

    fn density_factor(self) -> f64 {
        match self {
            FluidType::Water => 1.0,
            FluidType::Glycol30 => 1.018,
            FluidType::Glycol50 => 1.040,
        }
    }

    fn viscosity_factor(self) -> f64 {
        match self {
            FluidType::Water => 1.0,
            FluidType::Glycol30 => 2.2,
            FluidType::Glycol50 => 3.8,
        }
    }
}

/// Fluid properties at a given temperature.
///
/// Kinematic viscosity is carried as a bare f64 in ft²/s; it feeds the
/// Reynolds correlation directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: Density,
    pub kinematic_viscosity_ft2_s: f64,
    pub dynamic_viscosity_lb_ft_s: f64,
}

/// (temp °F, density lbm/ft³, kinematic viscosity ft²/s)
const WATER_ROWS: [(f64, f64, f64); 18] = [
    (40.0, 62.43, 1.664e-5),
    (50.0, 62.41, 1.410e-5),
    (60.0, 62.37, 1.217e-5),
    (70.0, 62.30, 1.059e-5),
    (80.0, 62.22, 0.930e-5),
    (90.0, 62.11, 0.826e-5),
    (100.0, 62.00, 0.739e-5),
    (110.0, 61.86, 0.667e-5),
    (120.0, 61.71, 0.609e-5),
    (130.0, 61.55, 0.558e-5),
    (140.0, 61.38, 0.514e-5),
    (150.0, 61.19, 0.476e-5),
    (160.0, 61.00, 0.442e-5),
    (170.0, 60.80, 0.413e-5),
    (180.0, 60.58, 0.385e-5),
    (190.0, 60.36, 0.362e-5),
    (200.0, 60.12, 0.341e-5),
    (210.0, 59.88, 0.319e-5),
];

/// Linear interpolation over a sorted (x, ...) row slice on the given column.
fn interpolate(rows: &[(f64, f64, f64)], x: f64, col: fn(&(f64, f64, f64)) -> f64) -> Option<f64> {
    let first = rows.first()?;
    let last = rows.last()?;
    if x < first.0 || x > last.0 {
        return None;
    }
    for pair in rows.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if x <= hi.0 {
            let t = (x - lo.0) / (hi.0 - lo.0);
            return Some(col(lo) + t * (col(hi) - col(lo)));
        }
    }
    Some(col(last))
}

/// Properties of the fluid at a loop temperature.
///
/// Temperatures outside the 40–210 °F water table are a typed error; there
/// is no extrapolation.
pub fn fluid_properties(fluid: FluidType, temperature: Temperature) -> DataResult<FluidProperties> {
    let t_f = in_temp_f(temperature);
    let out_of_range = || DataError::OutOfRange {
        what: "fluid temperature (°F)",
        value: t_f,
    };
    let rho_water = interpolate(&WATER_ROWS, t_f, |r| r.1).ok_or_else(out_of_range)?;
    let nu_water = interpolate(&WATER_ROWS, t_f, |r| r.2).ok_or_else(out_of_range)?;

    let rho = rho_water * fluid.density_factor();
    let nu = nu_water * fluid.viscosity_factor();
    Ok(FluidProperties {
        density: lb_per_ft3(rho),
        kinematic_viscosity_ft2_s: nu,
        dynamic_viscosity_lb_ft_s: nu * rho,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_core::units::{in_lb_per_ft3, temp_f};

    #[test]
    fn water_at_table_row_is_exact() {
        let props = fluid_properties(FluidType::Water, temp_f(60.0)).unwrap();
        assert!((in_lb_per_ft3(props.density) - 62.37).abs() < 1e-6);
        assert!((props.kinematic_viscosity_ft2_s - 1.217e-5).abs() < 1e-12);
    }

    #[test]
    fn interpolation_between_rows() {
        // 145 °F is midway between the 140 and 150 rows.
        let props = fluid_properties(FluidType::Water, temp_f(145.0)).unwrap();
        let expected_nu = 0.5 * (0.514e-5 + 0.476e-5);
        assert!((props.kinematic_viscosity_ft2_s - expected_nu).abs() < 1e-12);
    }

    #[test]
    fn viscosity_falls_with_temperature() {
        let cold = fluid_properties(FluidType::Water, temp_f(60.0)).unwrap();
        let hot = fluid_properties(FluidType::Water, temp_f(180.0)).unwrap();
        assert!(hot.kinematic_viscosity_ft2_s < cold.kinematic_viscosity_ft2_s);
    }

    #[test]
    fn glycol_is_denser_and_more_viscous() {
        let water = fluid_properties(FluidType::Water, temp_f(140.0)).unwrap();
        let g30 = fluid_properties(FluidType::Glycol30, temp_f(140.0)).unwrap();
        let g50 = fluid_properties(FluidType::Glycol50, temp_f(140.0)).unwrap();
        assert!(g30.density > water.density);
        assert!(g50.density > g30.density);
        assert!(g30.kinematic_viscosity_ft2_s > water.kinematic_viscosity_ft2_s);
        assert!(g50.kinematic_viscosity_ft2_s > g30.kinematic_viscosity_ft2_s);
    }

    #[test]
    fn out_of_range_is_an_error_not_extrapolation() {
        assert!(matches!(
            fluid_properties(FluidType::Water, temp_f(250.0)),
            Err(DataError::OutOfRange { .. })
        ));
        assert!(matches!(
            fluid_properties(FluidType::Water, temp_f(32.0)),
            Err(DataError::OutOfRange { .. })
        ));
    }

    #[test]
    fn dynamic_viscosity_is_nu_times_rho() {
        let props = fluid_properties(FluidType::Water, temp_f(100.0)).unwrap();
        let expected = props.kinematic_viscosity_ft2_s * in_lb_per_ft3(props.density);
        assert!((props.dynamic_viscosity_lb_ft_s - expected).abs() < 1e-12);
    }
}
