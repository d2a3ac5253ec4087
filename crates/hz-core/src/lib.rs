//! hz-core: stable foundation for hydrozone.
//!
//! Contains:
//! - units (uom types + US-customary constructors used throughout sizing)
//! - numeric (Real + float guards)
//! - error (shared error types)

#[macro_use]
extern crate uom;

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HzError, HzResult};
pub use numeric::*;
pub use units::*;
