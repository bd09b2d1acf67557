//! df-core: stable foundation for dagflow.
//!
//! Contains:
//! - ids (compact node identifiers)
//! - numeric (capacity/flow integer widths + pair counting)
//! - timing (opt-in stage timers)

pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
pub use numeric::*;
