//! Interstitial (gap) conductance through the thermal interface material.

use tcr_system::{Tim, TimKind};

use crate::params::EffectiveParams;

/// Gap-thickness correlation constants: `δ = 1.53·σ_s·(P/Hc)^−0.097`.
const GAP_COEFFICIENT: f64 = 1.53;
const GAP_EXPONENT: f64 = -0.097;

/// What fills the gap at one interface.
#[derive(Debug, Clone, Copy)]
pub struct GapInput<'a> {
    pub tim: Option<&'a Tim>,
    /// User bond-line / gap thickness [m]; ignored for pressure-dependent gases.
    pub thickness: Option<f64>,
}

impl GapInput<'static> {
    pub const EMPTY: Self = GapInput {
        tim: None,
        thickness: None,
    };
}

/// Effective thickness of a gas gap that collapses under load [m].
///
/// Larger pressure gives a thinner gap. `None` unless hardness, roughness
/// and pressure are all positive.
pub fn pressure_dependent_gap(params: &EffectiveParams, pressure: f64) -> Option<f64> {
    if !(params.hc_soft > 0.0 && params.sig_s > 0.0 && pressure > 0.0) {
        return None;
    }
    let delta = GAP_COEFFICIENT * params.sig_s * (pressure / params.hc_soft).powf(GAP_EXPONENT);
    (delta.is_finite() && delta > 0.0).then_some(delta)
}

/// Gap conductance `k_tim/δ` [W/(m²·K)].
///
/// No TIM, a missing or non-positive thickness, or a degenerate computed
/// gap all give 0.
pub fn gap_conductance(gap: GapInput<'_>, params: &EffectiveParams, pressure: f64) -> f64 {
    let Some(tim) = gap.tim else {
        return 0.0;
    };
    let delta = match tim.kind() {
        TimKind::Gas if tim.is_pressure_dependent() => pressure_dependent_gap(params, pressure),
        TimKind::Gas | TimKind::Paste => gap.thickness.filter(|t| *t > 0.0),
    };
    match delta {
        Some(d) => {
            let h = tim.k() / d;
            if h.is_finite() { h } else { 0.0 }
        }
        None => 0.0,
    }
}
