//! hz-hydraulics: pure single-run hydraulic calculator.
//!
//! Velocity, Reynolds number, friction factor (laminar 64/Re or explicit
//! Swamee-Jain), and head loss by Darcy-Weisbach or Hazen-Williams, plus
//! the effective-length aggregation that folds fitting and emitter
//! equivalent lengths into the straight run.
//!
//! Every function is pure and total over validated inputs; zero or
//! negative diameters and flows come back as typed errors rather than NaN.

pub mod calc;
pub mod error;
pub mod length;

pub use calc::{
    flow_velocity, friction_factor, head_loss_darcy, head_loss_hazen_williams, reynolds_number,
};
pub use error::{HydraulicsError, HydraulicsResult};
pub use length::{EffectiveLength, effective_length};
