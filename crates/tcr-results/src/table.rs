//! CSV rendering of detail and summary rows.
//!
//! Resistances that are open circuits are written as `INF`.

use std::fmt::Write;

use tcr_sim::{DetailRow, SummaryRow};

pub const DETAIL_HEADER: &str = "Force[N],Interface,Pressure[Pa],%Contact,%Interstitial,h_c[W/m^2K],R_c[K/W],h_gap[W/m^2K],R_gap[K/W],h_eff[W/m^2K],TCR[K/W],K_layer";
pub const SUMMARY_HEADER: &str = "Force[N],R_bulk[K/W],TCRsum[K/W],R_total[K/W],Q[W]";

/// Fixed-decimal rendering with `INF` for infinite values.
pub fn format_value(v: f64, decimals: usize) -> String {
    if v.is_infinite() {
        if v > 0.0 { "INF".to_string() } else { "-INF".to_string() }
    } else {
        format!("{v:.decimals$}")
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_detail_csv(rows: &[DetailRow]) -> String {
    let mut out = String::with_capacity(DETAIL_HEADER.len() + rows.len() * 128);
    out.push_str(DETAIL_HEADER);
    out.push('\n');
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            r.force_n,
            quote(&r.interface),
            format_value(r.pressure_pa, 4),
            format_value(r.pct_contact, 2),
            format_value(r.pct_interstitial, 2),
            format_value(r.h_contact, 4),
            format_value(r.r_contact, 4),
            format_value(r.h_gap, 4),
            format_value(r.r_gap, 4),
            format_value(r.h_eff, 4),
            format_value(r.tcr, 4),
            format_value(r.k_layer, 4),
        );
    }
    out
}

pub fn render_summary_csv(rows: &[SummaryRow]) -> String {
    let mut out = String::with_capacity(SUMMARY_HEADER.len() + rows.len() * 64);
    out.push_str(SUMMARY_HEADER);
    out.push('\n');
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            r.force_n,
            format_value(r.r_bulk, 4),
            format_value(r.tcr_sum, 4),
            format_value(r.r_total, 4),
            format_value(r.q_w, 4),
        );
    }
    out
}
