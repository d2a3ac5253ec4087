//! hz-system: zone aggregation and system-level pump sizing.
//!
//! Distributes the system design load across zones, resolves each zone
//! through the capacity engine, and derives the system operating point:
//! total flow is the sum of zone flows, required pump head is the maximum
//! zone head loss (zones are parallel branches of one manifold), and any
//! undeliverable load is tracked rather than silently dropped.
//!
//! The computation is synchronous and stateless: one input snapshot in,
//! one result snapshot out, identical on re-invocation.

pub mod distribute;
pub mod error;
pub mod input;
pub mod resolve;

pub use distribute::assign_shares;
pub use error::{SystemError, SystemResult as SystemCalcResult};
pub use input::{SystemInput, ZoneInput};
pub use resolve::{SizedSystem, ZoneOutcome, ZoneResult, size_system};
