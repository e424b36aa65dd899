//! tcr-system: the layered stack a contact-resistance run is computed over.
//!
//! Provides the plain data the engine consumes:
//! - geometries in stack order and the interfaces derived from them
//! - per-geometry material properties as entered (possibly incomplete)
//! - the thermal-interface-material library with stable ids
//! - the ordered list of applied forces
//!
//! Every mutation returns its outcome directly; there are no observers.

pub mod error;
pub mod forces;
pub mod geometry;
pub mod materials;
pub mod stack;
pub mod tim;

pub use error::{SystemError, SystemResult};
pub use forces::{ForceList, PressureRow};
pub use geometry::Geometry;
pub use materials::{Field, IssueKind, MaterialField, MaterialIssue, MaterialProperties, MaterialTable};
pub use stack::{Interface, RebuildReport, SystemStack};
pub use tim::{Tim, TimKind, TimLibrary};
