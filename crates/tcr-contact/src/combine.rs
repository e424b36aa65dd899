//! Parallel combination of the contact and gap heat paths.

use tcr_core::numeric::{OPEN_CIRCUIT, resistance_from_conductance};

use crate::common::clamp;
use crate::params::EffectiveParams;

/// Scale of the layer-conductance display metric `K = 1e-4/(R·A)`.
const LAYER_CONDUCTANCE_SCALE: f64 = 1e-4;

/// Everything computed for one interface at one pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceResult {
    /// Contact conductance [W/(m²·K)]
    pub h_contact: f64,
    /// Contact path alone [K/W], open circuit when `h_contact == 0`
    pub r_contact: f64,
    /// Gap conductance [W/(m²·K)]
    pub h_gap: f64,
    /// Gap path alone [K/W], open circuit when `h_gap == 0`
    pub r_gap: f64,
    /// `h_contact + h_gap` [W/(m²·K)]
    pub h_eff: f64,
    /// Interface resistance (TCR) [K/W]
    pub r_total: f64,
    pub pct_contact: f64,
    pub pct_interstitial: f64,
    /// Layer conductance display metric
    pub k_layer: f64,
}

/// Share of the nominal area in metal-to-metal contact, `100·P/Hc` clamped to
/// `[0, 100]`; 0 without a hardness.
pub fn contact_fraction_pct(pressure: f64, hc_soft: f64) -> f64 {
    if hc_soft > 0.0 {
        clamp(100.0 * pressure / hc_soft, 0.0, 100.0)
    } else {
        0.0
    }
}

/// `1e-4/(R·A)` for a finite positive resistance, else 0.
pub fn layer_conductance(r_total: f64, a_nominal: f64) -> f64 {
    if r_total.is_finite() && r_total > 0.0 && a_nominal > 0.0 {
        LAYER_CONDUCTANCE_SCALE / (r_total * a_nominal)
    } else {
        0.0
    }
}

/// Combine both heat paths across the nominal area.
pub fn combine(h_contact: f64, h_gap: f64, pressure: f64, params: &EffectiveParams) -> InterfaceResult {
    let area = params.a_nominal;
    let h_eff = h_contact + h_gap;
    let r_total = if h_eff > 0.0 && area > 0.0 {
        resistance_from_conductance(h_eff, area)
    } else {
        OPEN_CIRCUIT
    };
    let pct_contact = contact_fraction_pct(pressure, params.hc_soft);

    InterfaceResult {
        h_contact,
        r_contact: resistance_from_conductance(h_contact, area),
        h_gap,
        r_gap: resistance_from_conductance(h_gap, area),
        h_eff,
        r_total,
        pct_contact,
        pct_interstitial: 100.0 - pct_contact,
        k_layer: layer_conductance(r_total, area),
    }
}
