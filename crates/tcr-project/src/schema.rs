//! Case file schema definitions.

use serde::{Deserialize, Serialize};
use tcr_contact::ContactModel;
use tcr_system::{Field, MaterialTable, TimKind};

pub const CURRENT_VERSION: u32 = 1;

/// One complete simulation setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    /// Stack order, top to bottom.
    #[serde(default)]
    pub geometries: Vec<GeometryDef>,
    /// Contiguous pairs carrying contact resistance.
    #[serde(default)]
    pub tcr_interfaces: Vec<TcrPairDef>,
    #[serde(default)]
    pub materials: MaterialTable,
    #[serde(default)]
    pub tims: Vec<TimDef>,
    #[serde(default)]
    pub assignments: Vec<AssignmentDef>,
    #[serde(default)]
    pub forces_n: Vec<f64>,
    pub boundary: BoundaryDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ContactModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub name: String,
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TcrPairDef {
    pub top: String,
    pub bottom: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimDef {
    pub id: u32,
    pub name: String,
    pub k: f64,
    #[serde(default)]
    pub kind: TimKind,
    #[serde(default)]
    pub pressure_dependent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentDef {
    /// Interface index in stack order.
    pub interface: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tim: Option<String>,
    /// Thickness [m], as a number or as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Field>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundaryDef {
    pub t_hot_k: f64,
    pub t_cold_k: f64,
}
