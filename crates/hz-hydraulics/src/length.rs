//! Effective-length aggregation.
//!
//! Total effective length = straight run + fitting equivalents + emitter
//! equivalent. The breakdown is kept so reports can show the derivation
//! rather than just the sum.

use crate::error::HydraulicsResult;
use hz_core::numeric::ensure_non_negative;
use hz_core::units::{Length, feet, in_feet};
use hz_data::{FittingCount, NominalSize, PipeMaterial, fitting_equivalent_length};

/// Length breakdown for one zone's pipe run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveLength {
    pub straight: Length,
    pub fittings: Length,
    pub emitter: Length,
}

impl EffectiveLength {
    pub fn total(&self) -> Length {
        self.straight + self.fittings + self.emitter
    }
}

/// Aggregate the effective length for a run of pipe.
///
/// Fitting equivalents are looked up per (type, material, size); a missing
/// table key fails the whole aggregation rather than contributing zero.
pub fn effective_length(
    straight: Length,
    fittings: &[FittingCount],
    material: PipeMaterial,
    size: NominalSize,
    emitter_equivalent: Length,
) -> HydraulicsResult<EffectiveLength> {
    ensure_non_negative(in_feet(straight), "straight length")?;
    ensure_non_negative(in_feet(emitter_equivalent), "emitter equivalent length")?;

    let mut fittings_ft = 0.0;
    for fc in fittings {
        let each = fitting_equivalent_length(fc.fitting, material, size)?;
        fittings_ft += f64::from(fc.count) * in_feet(each);
    }

    Ok(EffectiveLength {
        straight,
        fittings: feet(fittings_ft),
        emitter: emitter_equivalent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hz_data::FittingType;

    #[test]
    fn sums_straight_fittings_and_emitter() {
        // 3/4" copper: elbow90 = 2.0 ft, tee-through = 1.2 ft.
        let fittings = [
            FittingCount {
                fitting: FittingType::Elbow90,
                count: 4,
            },
            FittingCount {
                fitting: FittingType::TeeThrough,
                count: 2,
            },
        ];
        let el = effective_length(
            feet(80.0),
            &fittings,
            PipeMaterial::Copper,
            NominalSize::ThreeQuarter,
            feet(12.0),
        )
        .unwrap();
        assert!((in_feet(el.fittings) - (4.0 * 2.0 + 2.0 * 1.2)).abs() < 1e-9);
        assert!((in_feet(el.total()) - (80.0 + 10.4 + 12.0)).abs() < 1e-9);
    }

    #[test]
    fn no_fittings_is_just_straight_plus_emitter() {
        let el = effective_length(
            feet(100.0),
            &[],
            PipeMaterial::Pex,
            NominalSize::ThreeQuarter,
            feet(0.0),
        )
        .unwrap();
        assert_eq!(in_feet(el.total()), 100.0);
    }

    #[test]
    fn missing_fitting_key_fails_aggregation() {
        let fittings = [FittingCount {
            fitting: FittingType::Elbow90,
            count: 1,
        }];
        // 2" PEX does not exist in the pipe table.
        let result = effective_length(
            feet(50.0),
            &fittings,
            PipeMaterial::Pex,
            NominalSize::Two,
            feet(0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn negative_straight_length_rejected() {
        let result = effective_length(
            feet(-1.0),
            &[],
            PipeMaterial::Copper,
            NominalSize::One,
            feet(0.0),
        );
        assert!(result.is_err());
    }
}
