//! The batch runner: every configured interface at every force case.

use std::collections::BTreeMap;

use tcr_contact::{
    BulkResistance, ContactModel, EffectiveParams, GapInput, InterfaceResult, bulk_resistance,
    combine, gap_conductance, resolve_interface,
};
use tcr_core::numeric::{OPEN_CIRCUIT, is_open, parse_user_number};
use tcr_core::units::{delta_t_kelvin, k};
use tcr_system::Tim;
use tracing::{debug, info, warn};

use crate::diagnostics::Diagnostic;
use crate::error::{SimError, SimResult};
use crate::input::{InterfaceAssignment, SimulationInput};

/// One (interface, force) result.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub force_index: usize,
    pub force_n: f64,
    pub interface_index: usize,
    pub interface: String,
    pub pressure_pa: f64,
    pub pct_contact: f64,
    pub pct_interstitial: f64,
    pub h_contact: f64,
    pub r_contact: f64,
    pub h_gap: f64,
    pub r_gap: f64,
    pub h_eff: f64,
    /// Interface resistance [K/W]
    pub tcr: f64,
    pub k_layer: f64,
}

impl DetailRow {
    fn new(force_index: usize, force_n: f64, interface_index: usize, label: &str, pressure_pa: f64, r: &InterfaceResult) -> Self {
        Self {
            force_index,
            force_n,
            interface_index,
            interface: label.to_string(),
            pressure_pa,
            pct_contact: r.pct_contact,
            pct_interstitial: r.pct_interstitial,
            h_contact: r.h_contact,
            r_contact: r.r_contact,
            h_gap: r.h_gap,
            r_gap: r.r_gap,
            h_eff: r.h_eff,
            tcr: r.r_total,
            k_layer: r.k_layer,
        }
    }
}

/// System totals for one force case.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub force_index: usize,
    pub force_n: f64,
    /// Conduction through the solid layers [K/W]
    pub r_bulk: f64,
    /// Series sum of interface resistances [K/W]
    pub tcr_sum: f64,
    pub r_total: f64,
    /// Heat flow through the stack [W]
    pub q_w: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub model: ContactModel,
    /// Interface-major: all forces of the first interface, then the next.
    pub details: Vec<DetailRow>,
    /// One per force, in force order.
    pub summaries: Vec<SummaryRow>,
    pub diagnostics: Vec<Diagnostic>,
}

/// An interface that survived configuration, ready for the force loop.
struct Configured<'a> {
    index: usize,
    params: EffectiveParams,
    tim: Option<&'a Tim>,
    thickness: Option<f64>,
}

impl Configured<'_> {
    fn gap(&self) -> GapInput<'_> {
        GapInput {
            tim: self.tim,
            thickness: self.thickness,
        }
    }
}

/// Run the selected contact model over every configured interface and force.
///
/// Fails before computing anything when no interface is configured, no force
/// is defined, or a force or boundary temperature is not finite. Interfaces
/// whose data cannot be used are skipped and reported in
/// [`SimulationOutput::diagnostics`].
pub fn run_simulation(input: &SimulationInput) -> SimResult<SimulationOutput> {
    let delta_t = check_preconditions(input)?;
    info!(
        model = %input.model,
        assignments = input.assignments.len(),
        forces = input.forces.len(),
        "starting contact-resistance run"
    );

    let mut diagnostics = Vec::new();
    let configured = configure_interfaces(input, &mut diagnostics);

    let bulk = bulk_resistance(input.stack.geometries(), &input.materials);
    for name in &bulk.skipped {
        warn!(geometry = %name, "no usable conductivity, layer left out of bulk resistance");
    }

    let mut details = Vec::with_capacity(configured.len() * input.forces.len());
    let mut tcr_sums = vec![0.0; input.forces.len()];

    for c in &configured {
        for (force_index, &force_n) in input.forces.iter().enumerate() {
            let pressure = force_n / c.params.a_nominal;
            let h_c = input.model.h_contact(&c.params, pressure);
            let h_gap = gap_conductance(c.gap(), &c.params, pressure);
            let result = combine(h_c, h_gap, pressure, &c.params);
            debug!(
                interface = %c.params.label,
                force_n,
                pressure,
                h_c,
                h_gap,
                tcr = result.r_total,
                "interface row"
            );
            tcr_sums[force_index] += result.r_total;
            details.push(DetailRow::new(
                force_index,
                force_n,
                c.index,
                &c.params.label,
                pressure,
                &result,
            ));
        }
    }

    let summaries = input
        .forces
        .iter()
        .zip(&tcr_sums)
        .enumerate()
        .map(|(force_index, (&force_n, &tcr_sum))| {
            summarize(force_index, force_n, tcr_sum, !configured.is_empty(), &bulk, delta_t)
        })
        .collect();

    info!(
        rows = details.len(),
        skipped = diagnostics.iter().filter(|d| d.skips_interface()).count(),
        "run finished"
    );

    Ok(SimulationOutput {
        model: input.model,
        details,
        summaries,
        diagnostics,
    })
}

fn report(d: Diagnostic, out: &mut Vec<Diagnostic>) {
    warn!("{d}");
    out.push(d);
}

fn check_preconditions(input: &SimulationInput) -> SimResult<f64> {
    if input.assignments.is_empty() {
        return Err(SimError::NoInterfaces);
    }
    if input.forces.is_empty() {
        return Err(SimError::NoForces);
    }
    if let Some((index, &value)) = input.forces.iter().enumerate().find(|(_, f)| !f.is_finite()) {
        return Err(SimError::NonFiniteForce { index, value });
    }
    let boundary = input.boundary;
    for (which, value) in [("T_hot", boundary.t_hot_k), ("T_cold", boundary.t_cold_k)] {
        if !value.is_finite() {
            return Err(SimError::NonFiniteTemperature { which, value });
        }
    }
    Ok(delta_t_kelvin(k(boundary.t_hot_k), k(boundary.t_cold_k)))
}

/// Resolve parameters and gap filler once per interface.
///
/// Covers every assigned index plus every TCR interface without an
/// assignment, in interface order. Unassigned TCR interfaces run bare.
fn configure_interfaces<'a>(
    input: &'a SimulationInput,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Configured<'a>> {
    let interfaces = input.stack.interfaces();
    let bare = InterfaceAssignment::bare();
    let mut plan: BTreeMap<usize, Option<&InterfaceAssignment>> =
        input.stack.tcr_interfaces().map(|(index, _)| (index, None)).collect();
    for (&index, assignment) in &input.assignments {
        plan.insert(index, Some(assignment));
    }
    let mut configured = Vec::with_capacity(plan.len());

    for (index, assignment) in plan {
        let Some(iface) = interfaces.get(index) else {
            report(Diagnostic::UnknownInterface { interface_index: index }, diagnostics);
            continue;
        };
        if !iface.has_tcr {
            report(
                Diagnostic::NotTcrInterface {
                    interface_index: index,
                    interface: iface.label(),
                },
                diagnostics,
            );
            continue;
        }

        let params = match resolve_interface(iface, &input.materials) {
            Ok(p) => p,
            Err(error) => {
                report(
                    Diagnostic::UnresolvedInterface {
                        interface_index: index,
                        interface: iface.label(),
                        error,
                    },
                    diagnostics,
                );
                continue;
            }
        };
        if params.a_nominal <= 0.0 {
            report(
                Diagnostic::NoContactArea {
                    interface_index: index,
                    interface: params.label,
                },
                diagnostics,
            );
            continue;
        }

        if assignment.is_none() {
            report(
                Diagnostic::Unassigned {
                    interface_index: index,
                    interface: params.label.clone(),
                },
                diagnostics,
            );
        }
        let (tim, thickness, soft) = gap_filler(index, &params.label, assignment.unwrap_or(&bare), input);
        for d in soft {
            report(d, diagnostics);
        }
        configured.push(Configured {
            index,
            params,
            tim,
            thickness,
        });
    }
    configured
}

/// Look up the TIM and parse the thickness; problems only degrade the gap path.
fn gap_filler<'a>(
    index: usize,
    label: &str,
    assignment: &InterfaceAssignment,
    input: &'a SimulationInput,
) -> (Option<&'a Tim>, Option<f64>, Vec<Diagnostic>) {
    let mut soft = Vec::new();

    let tim = match assignment.tim.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => {
            let found = input.tims.by_name(name);
            if found.is_none() {
                soft.push(Diagnostic::UnknownTim {
                    interface_index: index,
                    interface: label.to_string(),
                    tim: name.to_string(),
                });
            }
            found
        }
        None => None,
    };

    // A collapsing gas gap never reads the user thickness.
    let uses_thickness = tim.is_some_and(|t| !t.is_pressure_dependent());
    let thickness = match assignment.thickness.as_deref().filter(|_| uses_thickness) {
        Some(text) => parse_user_number(text, "thickness").unwrap_or_else(|_| {
            soft.push(Diagnostic::BadThickness {
                interface_index: index,
                interface: label.to_string(),
                text: text.to_string(),
            });
            None
        }),
        None => None,
    };

    (tim, thickness, soft)
}

fn summarize(
    force_index: usize,
    force_n: f64,
    tcr_sum: f64,
    any_interface: bool,
    bulk: &BulkResistance,
    delta_t: f64,
) -> SummaryRow {
    let (r_total, q_w) = if !any_interface || is_open(tcr_sum) {
        (OPEN_CIRCUIT, 0.0)
    } else {
        let r_total = bulk.total + tcr_sum;
        (r_total, if r_total > 0.0 { delta_t / r_total } else { 0.0 })
    };
    SummaryRow {
        force_index,
        force_n,
        r_bulk: bulk.total,
        tcr_sum,
        r_total,
        q_w,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulk(total: f64) -> BulkResistance {
        BulkResistance {
            total,
            skipped: Vec::new(),
        }
    }

    #[test]
    fn open_interface_breaks_the_series_path() {
        let row = summarize(0, 10.0, OPEN_CIRCUIT, true, &bulk(1e-4), 50.0);
        assert!(is_open(row.r_total));
        assert_eq!(row.q_w, 0.0);
        assert_eq!(row.r_bulk, 1e-4);
    }

    #[test]
    fn finite_path_adds_bulk() {
        let row = summarize(1, 10.0, 0.4, true, &bulk(0.1), 50.0);
        assert_eq!(row.r_total, 0.5);
        assert_eq!(row.q_w, 100.0);
        assert_eq!(row.force_index, 1);
    }

    #[test]
    fn no_interfaces_means_no_path() {
        let row = summarize(0, 10.0, 0.0, false, &bulk(0.1), 50.0);
        assert!(is_open(row.r_total));
        assert_eq!(row.q_w, 0.0);
    }

    #[test]
    fn zero_total_resistance_gives_no_flow() {
        let row = summarize(0, 10.0, 0.0, true, &bulk(0.0), 50.0);
        assert_eq!(row.r_total, 0.0);
        assert_eq!(row.q_w, 0.0);
    }
}
