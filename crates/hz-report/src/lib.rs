//! hz-report: serializable derivation trace for report generation.
//!
//! The external report/PDF collaborator renders a step-by-step derivation
//! of each zone. Everything it needs (velocity, Reynolds number, friction
//! factor, the length breakdown, both head-loss methods, the capacity
//! ladder) is exposed as plain unit-suffixed f64 fields, copied from the
//! sizing result without recomputing any value.

pub mod types;

pub use types::{SystemTrace, ZoneDerivation, ZoneTrace};
