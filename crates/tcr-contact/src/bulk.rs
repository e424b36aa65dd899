//! Conduction resistance of the solid layers themselves.

use tcr_system::{Geometry, MaterialField, MaterialTable};

/// Sum of layer resistances plus the layers that could not contribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkResistance {
    /// `Σ h/(k·L·W)` over layers with a usable conductivity [K/W]
    pub total: f64,
    /// Layers left out because their conductivity is missing, malformed or
    /// not positive.
    pub skipped: Vec<String>,
}

/// `height/(k·length·width)`, or `None` when `k` or the cross-section is
/// not positive.
pub fn layer_resistance(geometry: &Geometry, k: f64) -> Option<f64> {
    let area = geometry.area();
    (k > 0.0 && area > 0.0).then(|| geometry.height() / (k * area))
}

/// Series conduction resistance of every layer, independent of force.
///
/// Layers without a usable conductivity are left out of the sum, not treated
/// as open circuits.
pub fn bulk_resistance(geometries: &[Geometry], materials: &MaterialTable) -> BulkResistance {
    let mut bulk = BulkResistance::default();
    for g in geometries {
        let k = materials
            .get(g.name())
            .and_then(|props| props.value(MaterialField::K).ok())
            .unwrap_or(0.0);
        match layer_resistance(g, k) {
            Some(r) => bulk.total += r,
            None => bulk.skipped.push(g.name().to_string()),
        }
    }
    bulk
}
