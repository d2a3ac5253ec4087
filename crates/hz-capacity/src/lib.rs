//! hz-capacity: flow ceilings, BTU ceilings, and causality resolution.
//!
//! Translates velocity limits into deliverable flow and heat, applies the
//! per-emitter capacity offset, and resolves requested load, hydraulic
//! ceiling, and emitter ceiling into one physically consistent operating
//! point per zone with the binding constraint recorded.

pub mod check;
pub mod error;
pub mod limits;
pub mod resolve;

pub use check::{CapacityCheck, check_hydraulic_capacity};
pub use error::{CapacityError, CapacityResult};
pub use limits::{
    DELTA_T_FLOOR_F, LOW_VELOCITY_FPS, VelocityCeiling, effective_hydraulic_capacity,
    hydraulic_capacity, max_flow_from_velocity, velocity_limit, zone_max_capacity,
};
pub use resolve::{BindingConstraint, DeltaTMode, ZoneResolution, resolve_zone_load};
