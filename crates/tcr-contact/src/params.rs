//! Effective microsurface parameters of one interface.

use tcr_core::units::input;
use tcr_system::{Interface, MaterialField, MaterialProperties, MaterialTable};

use crate::common::{combined_modulus, harmonic_mean, rss, softer_hardness};
use crate::error::{ParamError, ParamResult};

/// Parameters of an interface after combining both surfaces, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveParams {
    /// `top → bottom`
    pub label: String,
    /// Combined RMS roughness [m]
    pub sig_s: f64,
    /// Combined mean absolute asperity slope [-]
    pub m_s: f64,
    /// Harmonic-mean conductivity [W/m·K]
    pub k_s: f64,
    /// Effective elastic modulus [Pa]
    pub e_s: f64,
    /// Microhardness of the softer surface [Pa]
    pub hc_soft: f64,
    /// Nominal contact area [m²]
    pub a_nominal: f64,
}

/// One side of the interface converted to SI.
struct Surface {
    sigma: f64,
    m: f64,
    k: f64,
    e: f64,
    poisson: f64,
    hc: f64,
}

impl Surface {
    fn from_props(geometry: &str, props: &MaterialProperties) -> ParamResult<Self> {
        let get = |which: MaterialField| {
            props.value(which).map_err(|_| ParamError::Unparsable {
                geometry: geometry.to_string(),
                field: which,
                text: props.field(which).to_string(),
            })
        };
        Ok(Self {
            sigma: input::roughness_m(get(MaterialField::Sigma)?),
            m: get(MaterialField::M)?,
            k: get(MaterialField::K)?,
            e: input::modulus_pa(get(MaterialField::Young)?),
            poisson: get(MaterialField::Poisson)?,
            hc: input::hardness_pa(get(MaterialField::Hc)?),
        })
    }
}

/// Combine the materials on both sides of `iface`.
///
/// A geometry without a material record counts as all-zero properties.
/// Fails only when an entered value cannot be read as a number; the caller
/// skips that interface.
pub fn resolve_interface(iface: &Interface, materials: &MaterialTable) -> ParamResult<EffectiveParams> {
    let blank = MaterialProperties::default();
    let top = Surface::from_props(&iface.top, materials.get(&iface.top).unwrap_or(&blank))?;
    let bottom = Surface::from_props(&iface.bottom, materials.get(&iface.bottom).unwrap_or(&blank))?;

    Ok(EffectiveParams {
        label: iface.label(),
        sig_s: rss(top.sigma, bottom.sigma),
        m_s: rss(top.m, bottom.m),
        k_s: harmonic_mean(top.k, bottom.k),
        e_s: combined_modulus(top.e, top.poisson, bottom.e, bottom.poisson),
        hc_soft: softer_hardness(top.hc, bottom.hc),
        a_nominal: iface.a_nominal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcr_core::numeric::{Tolerances, nearly_equal};
    use tcr_system::{Field, Geometry};

    fn props(k: f64, young: f64, poisson: f64, sigma: f64, m: f64, hc: f64) -> MaterialProperties {
        MaterialProperties {
            material_name: "test".into(),
            k: Field::Number(k),
            young: Field::Number(young),
            poisson: Field::Number(poisson),
            sigma: Field::Number(sigma),
            m: Field::Number(m),
            hc: Field::Number(hc),
        }
    }

    fn iface() -> Interface {
        let a = Geometry::new("A", 1.0, 1.0, 0.01).unwrap();
        let b = Geometry::new("B", 0.5, 1.0, 0.01).unwrap();
        Interface::between(&a, &b, true)
    }

    #[test]
    fn converts_units_and_combines() {
        let mut table = MaterialTable::new();
        table.insert("A", props(200.0, 100.0, 0.3, 3.0, 0.3, 50.0));
        table.insert("B", props(50.0, 100.0, 0.3, 4.0, 0.4, 80.0));

        let p = resolve_interface(&iface(), &table).unwrap();
        let tol = Tolerances::default();
        assert_eq!(p.label, "A → B");
        assert!(nearly_equal(p.sig_s, 5.0e-6, tol));
        assert!(nearly_equal(p.m_s, 0.5, tol));
        assert!(nearly_equal(p.k_s, 80.0, tol));
        assert!(nearly_equal(p.e_s, 100e9 / (2.0 * 0.91), tol));
        assert!(nearly_equal(p.hc_soft, 50.0e6, tol));
        assert_eq!(p.a_nominal, 0.5);
    }

    #[test]
    fn missing_records_resolve_to_zero() {
        let p = resolve_interface(&iface(), &MaterialTable::new()).unwrap();
        assert_eq!((p.sig_s, p.m_s, p.k_s, p.e_s, p.hc_soft), (0.0, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn unparsable_field_is_reported() {
        let mut table = MaterialTable::new();
        table.insert("A", props(200.0, 100.0, 0.3, 1.0, 0.1, 50.0));
        let b = table.ensure_entry("B");
        *b = props(200.0, 100.0, 0.3, 1.0, 0.1, 50.0);
        b.young = Field::Text("stiff".into());

        let err = resolve_interface(&iface(), &table).unwrap_err();
        assert_eq!(
            err,
            ParamError::Unparsable {
                geometry: "B".into(),
                field: MaterialField::Young,
                text: "stiff".into(),
            }
        );
    }
}
