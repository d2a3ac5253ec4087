//! Heat emitter catalog.
//!
//! Each emitter type carries an output rating table (BTU/hr per installed
//! foot by supply temperature, rated at 1 GPM), a default design ΔT, a
//! hydraulic equivalent length per installed foot, and a capacity offset
//! factor.
//!
//! The capacity offset discounts the raw hydraulic BTU ceiling to reflect
//! the emitter's limited thermal use of very high flow. Without it, a large
//! pipe feeding a small emitter can be assigned a flow so large that the
//! resolved ΔT collapses toward zero. The offset is a per-type modeling
//! constant kept here, in one auditable table, and it never alters the
//! pipe-sizing flow calculation itself.

use crate::error::{DataError, DataResult};
use hz_core::units::{
    FlowRate, Length, Power, TempInterval, Temperature, btu_hr, delta_f, in_feet, in_gpm,
    in_temp_f,
};

/// Heat emitter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterType {
    FinTubeBaseboard,
    CastIronRadiator,
    RadiantFloor,
}

impl EmitterType {
    pub fn label(self) -> &'static str {
        match self {
            EmitterType::FinTubeBaseboard => "fin-tube baseboard",
            EmitterType::CastIronRadiator => "cast iron radiator",
            EmitterType::RadiantFloor => "radiant floor",
        }
    }

    pub fn parse(name: &str) -> DataResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "baseboard" | "fin_tube" | "fin-tube" | "fin tube" => Ok(EmitterType::FinTubeBaseboard),
            "cast_iron" | "cast iron" | "radiator" => Ok(EmitterType::CastIronRadiator),
            "radiant" | "radiant_floor" | "radiant floor" => Ok(EmitterType::RadiantFloor),
            _ => Err(DataError::UnknownName {
                what: "emitter type",
                name: name.to_string(),
            }),
        }
    }
}

/// Catalog entry for an emitter type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSpec {
    pub emitter: EmitterType,
    pub default_delta_t: TempInterval,
    /// Discount on the raw hydraulic BTU ceiling, 0 < offset ≤ 1.
    pub capacity_offset: f64,
    /// Hydraulic equivalent feet added per installed foot of emitter.
    pub equivalent_length_per_ft: f64,
    /// (supply °F, BTU/hr per installed ft at 1 GPM)
    rating: &'static [(f64, f64)],
}

const FIN_TUBE_RATING: [(f64, f64); 8] = [
    (100.0, 110.0),
    (110.0, 170.0),
    (120.0, 240.0),
    (140.0, 340.0),
    (160.0, 450.0),
    (180.0, 580.0),
    (200.0, 710.0),
    (210.0, 780.0),
];

const CAST_IRON_RATING: [(f64, f64); 7] = [
    (100.0, 150.0),
    (120.0, 260.0),
    (140.0, 380.0),
    (160.0, 510.0),
    (180.0, 650.0),
    (200.0, 800.0),
    (210.0, 880.0),
];

const RADIANT_FLOOR_RATING: [(f64, f64); 7] = [
    (80.0, 8.0),
    (90.0, 14.0),
    (100.0, 20.0),
    (110.0, 26.0),
    (120.0, 32.0),
    (130.0, 38.0),
    (140.0, 44.0),
];

/// Catalog lookup; total over the enum.
pub fn emitter_spec(emitter: EmitterType) -> EmitterSpec {
    match emitter {
        EmitterType::FinTubeBaseboard => EmitterSpec {
            emitter,
            default_delta_t: delta_f(20.0),
            capacity_offset: 0.70,
            equivalent_length_per_ft: 1.0,
            rating: &FIN_TUBE_RATING,
        },
        EmitterType::CastIronRadiator => EmitterSpec {
            emitter,
            default_delta_t: delta_f(20.0),
            capacity_offset: 0.80,
            equivalent_length_per_ft: 0.5,
            rating: &CAST_IRON_RATING,
        },
        EmitterType::RadiantFloor => EmitterSpec {
            emitter,
            default_delta_t: delta_f(15.0),
            capacity_offset: 0.90,
            equivalent_length_per_ft: 1.0,
            rating: &RADIANT_FLOOR_RATING,
        },
    }
}

impl EmitterSpec {
    /// Rated output per installed foot at a supply temperature, BTU/hr·ft.
    ///
    /// Linear interpolation between table rows; outside the rated range is
    /// a typed error (a radiant floor has no 180 °F rating).
    pub fn output_per_ft(&self, supply: Temperature) -> DataResult<f64> {
        let t_f = in_temp_f(supply);
        let first = self.rating[0];
        let last = self.rating[self.rating.len() - 1];
        if t_f < first.0 || t_f > last.0 {
            return Err(DataError::OutOfRange {
                what: "emitter supply temperature (°F)",
                value: t_f,
            });
        }
        for pair in self.rating.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t_f <= hi.0 {
                let t = (t_f - lo.0) / (hi.0 - lo.0);
                return Ok(lo.1 + t * (hi.1 - lo.1));
            }
        }
        Ok(last.1)
    }

    /// Rating adjustment for circulation rate.
    ///
    /// Ratings are published at 1 GPM; high-flow (4 GPM) ratings run about
    /// 5% higher. Linear between, flat outside.
    pub fn flow_factor(&self, flow: FlowRate) -> f64 {
        let q = in_gpm(flow);
        if q <= 1.0 {
            1.0
        } else if q >= 4.0 {
            1.05
        } else {
            1.0 + 0.05 * (q - 1.0) / 3.0
        }
    }

    /// Maximum heat release of an installed run at the given supply
    /// temperature and circulation rate.
    pub fn max_output(
        &self,
        installed_length: Length,
        supply: Temperature,
        flow: FlowRate,
    ) -> DataResult<Power> {
        let per_ft = self.output_per_ft(supply)?;
        Ok(btu_hr(
            per_ft * in_feet(installed_length) * self.flow_factor(flow),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_core::units::{feet, gpm, in_btu_hr, temp_f};

    #[test]
    fn fin_tube_at_180_rates_580_per_ft() {
        let spec = emitter_spec(EmitterType::FinTubeBaseboard);
        assert!((spec.output_per_ft(temp_f(180.0)).unwrap() - 580.0).abs() < 1e-9);
    }

    #[test]
    fn rating_interpolates_between_rows() {
        let spec = emitter_spec(EmitterType::FinTubeBaseboard);
        // 170 °F midway between the 160 and 180 rows.
        let mid = spec.output_per_ft(temp_f(170.0)).unwrap();
        assert!((mid - 515.0).abs() < 1e-9);
    }

    #[test]
    fn radiant_floor_has_no_high_temp_rating() {
        let spec = emitter_spec(EmitterType::RadiantFloor);
        assert!(matches!(
            spec.output_per_ft(temp_f(180.0)),
            Err(DataError::OutOfRange { .. })
        ));
    }

    #[test]
    fn flow_factor_is_bounded() {
        let spec = emitter_spec(EmitterType::FinTubeBaseboard);
        assert_eq!(spec.flow_factor(gpm(0.5)), 1.0);
        assert_eq!(spec.flow_factor(gpm(10.0)), 1.05);
        let mid = spec.flow_factor(gpm(2.5));
        assert!(mid > 1.0 && mid < 1.05);
    }

    #[test]
    fn max_output_scales_with_length() {
        let spec = emitter_spec(EmitterType::FinTubeBaseboard);
        let short = spec
            .max_output(feet(10.0), temp_f(180.0), gpm(1.0))
            .unwrap();
        let long = spec
            .max_output(feet(20.0), temp_f(180.0), gpm(1.0))
            .unwrap();
        assert!((in_btu_hr(long) - 2.0 * in_btu_hr(short)).abs() < 1e-6);
        assert!((in_btu_hr(short) - 5800.0).abs() < 1e-6);
    }

    #[test]
    fn baseboard_offset_below_radiant_offset() {
        let baseboard = emitter_spec(EmitterType::FinTubeBaseboard);
        let radiant = emitter_spec(EmitterType::RadiantFloor);
        assert!(baseboard.capacity_offset < radiant.capacity_offset);
        for spec in [baseboard, radiant, emitter_spec(EmitterType::CastIronRadiator)] {
            assert!(spec.capacity_offset > 0.0 && spec.capacity_offset <= 1.0);
        }
    }
}
