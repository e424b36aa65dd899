//! tcr-core: stable foundation for the contact-resistance workspace.
//!
//! Contains:
//! - units (uom SI types, constructors and input-unit conversions)
//! - numeric (Real, tolerances, float helpers, the open-circuit sentinel)
//! - ids (stable compact IDs for library records)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcrError, TcrResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
