//! hz-data: static reference tables for hydronic sizing.
//!
//! Pipe geometry, roughness, and Hazen-Williams coefficients; fitting
//! equivalent lengths; water/glycol property interpolation; the emitter
//! catalog with capacity offset factors. Every lookup is keyed and returns
//! a typed [`DataError`] on a missing key, never a silent zero.

pub mod emitter;
pub mod error;
pub mod fitting;
pub mod fluid;
pub mod pipe;

pub use emitter::{EmitterSpec, EmitterType, emitter_spec};
pub use error::{DataError, DataResult};
pub use fitting::{FittingCount, FittingType, fitting_equivalent_length};
pub use fluid::{FluidProperties, FluidType, fluid_properties};
pub use pipe::{NominalSize, PipeMaterial, PipeSpec, pipe_sizes_for, pipe_spec};
