//! Integration test: materials to interface resistance for every model.
//!
//! Two identical steel blocks with a paste and a collapsing gas gap.

use tcr_contact::{
    ContactModel, GapInput, bulk_resistance, combine, gap_conductance, resolve_interface,
};
use tcr_core::TimId;
use tcr_core::numeric::{Tolerances, is_open, nearly_equal};
use tcr_system::{Field, Geometry, MaterialProperties, MaterialTable, SystemStack, Tim, TimKind};

fn steel() -> MaterialProperties {
    MaterialProperties {
        material_name: "steel".into(),
        k: Field::Number(16.0),
        young: Field::Number(200.0),
        poisson: Field::Number(0.29),
        sigma: Field::Text("1,2".into()),
        m: Field::Number(0.1),
        hc: Field::Number(3000.0),
    }
}

fn setup() -> (SystemStack, MaterialTable) {
    let mut stack = SystemStack::from_geometries(vec![
        Geometry::new("Upper", 0.05, 0.05, 0.01).unwrap(),
        Geometry::new("Lower", 0.05, 0.05, 0.01).unwrap(),
    ])
    .unwrap();
    stack.set_tcr(0, true).unwrap();
    let mut materials = MaterialTable::new();
    materials.insert("Upper", steel());
    materials.insert("Lower", steel());
    (stack, materials)
}

#[test]
fn every_model_gives_finite_resistance_under_load() {
    let (stack, materials) = setup();
    let params = resolve_interface(&stack.interfaces()[0], &materials).unwrap();
    assert!(nearly_equal(params.sig_s, (2.0_f64).sqrt() * 1.2e-6, Tolerances::default()));
    assert_eq!(params.k_s, 16.0);

    let pressure = 2.0e6;
    for model in ContactModel::ALL {
        let h_c = model.h_contact(&params, pressure);
        let result = combine(h_c, 0.0, pressure, &params);
        assert!(h_c > 0.0, "{model}");
        assert!(result.r_total.is_finite(), "{model}");
        assert!(nearly_equal(result.r_total, result.r_contact, Tolerances::default()));
        assert!(result.pct_contact > 0.0 && result.pct_contact < 1.0);
    }
}

#[test]
fn gap_fillers_lower_resistance() {
    let (stack, materials) = setup();
    let params = resolve_interface(&stack.interfaces()[0], &materials).unwrap();
    let pressure = 1.0e6;
    let model = ContactModel::Yovanovich;
    let h_c = model.h_contact(&params, pressure);
    let bare = combine(h_c, 0.0, pressure, &params);

    let paste = Tim::new(TimId::FIRST, "paste", 0.8, TimKind::Paste, false).unwrap();
    let gas = Tim::new(TimId::FIRST, "helium", 0.15, TimKind::Gas, true).unwrap();
    for (tim, thickness) in [(&paste, Some(25e-6)), (&gas, None)] {
        let gap = GapInput {
            tim: Some(tim),
            thickness,
        };
        let h_gap = gap_conductance(gap, &params, pressure);
        let filled = combine(h_c, h_gap, pressure, &params);
        assert!(h_gap > 0.0, "{}", tim.name());
        assert!(filled.r_total < bare.r_total, "{}", tim.name());
        assert!(filled.k_layer > bare.k_layer);
    }
}

#[test]
fn unloaded_bare_interface_is_open() {
    let (stack, materials) = setup();
    let params = resolve_interface(&stack.interfaces()[0], &materials).unwrap();
    for model in ContactModel::ALL {
        let result = combine(model.h_contact(&params, 0.0), 0.0, 0.0, &params);
        assert!(is_open(result.r_total));
        assert_eq!(result.pct_interstitial, 100.0);
    }
}

#[test]
fn bulk_of_both_blocks() {
    let (stack, materials) = setup();
    let bulk = bulk_resistance(stack.geometries(), &materials);
    let one = 0.01 / (16.0 * 0.05 * 0.05);
    assert!(nearly_equal(bulk.total, 2.0 * one, Tolerances::default()));
}
