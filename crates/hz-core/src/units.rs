// hz-core/src/units.rs

unit! {
    system: uom::si;
    quantity: uom::si::power;

    // uom does not ship a BTU/hr power unit; coefficient is uom's
    // btu_it energy constant (1.055_056_E3 J) divided by 3600 s.
    @btu_it_per_hour: 2.930_711_111_111_111_E-1; "Btu (IT)/h",
        "British thermal unit (IT) per hour",
        "British thermal units (IT) per hour";
}

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity, Power as UomPower, Ratio as UomRatio,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (f64). Sizing math runs in US customary
// units, so each type pairs with constructor/getter helpers below.
pub type Density = UomMassDensity;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;
pub type FlowRate = UomVolumeRate;

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn feet(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn gpm(v: f64) -> FlowRate {
    use uom::si::volume_rate::gallon_per_minute;
    FlowRate::new::<gallon_per_minute>(v)
}

#[inline]
pub fn fps(v: f64) -> Velocity {
    use uom::si::velocity::foot_per_second;
    Velocity::new::<foot_per_second>(v)
}

#[inline]
pub fn btu_hr(v: f64) -> Power {
    Power::new::<btu_it_per_hour>(v)
}

#[inline]
pub fn delta_f(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_fahrenheit;
    TempInterval::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn temp_f(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

#[inline]
pub fn lb_per_ft3(v: f64) -> Density {
    use uom::si::mass_density::pound_per_cubic_foot;
    Density::new::<pound_per_cubic_foot>(v)
}

// Getters paired with the constructors above; correlations extract raw
// US-unit values with these rather than scattering `.get::<..>()` turbofish.
#[inline]
pub fn in_inches(l: Length) -> f64 {
    use uom::si::length::inch;
    l.get::<inch>()
}

#[inline]
pub fn in_feet(l: Length) -> f64 {
    use uom::si::length::foot;
    l.get::<foot>()
}

#[inline]
pub fn in_gpm(q: FlowRate) -> f64 {
    use uom::si::volume_rate::gallon_per_minute;
    q.get::<gallon_per_minute>()
}

#[inline]
pub fn in_fps(v: Velocity) -> f64 {
    use uom::si::velocity::foot_per_second;
    v.get::<foot_per_second>()
}

#[inline]
pub fn in_btu_hr(p: Power) -> f64 {
    p.get::<btu_it_per_hour>()
}

#[inline]
pub fn in_delta_f(dt: TempInterval) -> f64 {
    use uom::si::temperature_interval::degree_fahrenheit;
    dt.get::<degree_fahrenheit>()
}

#[inline]
pub fn in_temp_f(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    t.get::<degree_fahrenheit>()
}

#[inline]
pub fn in_lb_per_ft3(d: Density) -> f64 {
    use uom::si::mass_density::pound_per_cubic_foot;
    d.get::<pound_per_cubic_foot>()
}

pub mod constants {
    /// Standard gravity in ft/s² for the Darcy-Weisbach velocity head term.
    pub const G_FT_PER_S2: f64 = 32.174;

    /// US gallons per minute in one cubic foot per second.
    pub const GPM_PER_CFS: f64 = 448.831;

    /// Water's sensible-heat flow constant: BTU/hr per (GPM · °F).
    /// Fluid-type-insensitive in this model, a documented simplification.
    pub const BTU_HR_PER_GPM_F: f64 = 500.0;
}
