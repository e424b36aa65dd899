//! Per-geometry material properties as entered by the user.
//!
//! Values are kept in their input units (σ in µm, E in GPa, Hc in MPa) and
//! may be blank or malformed; interpretation happens when an interface is
//! resolved, so an incomplete record only affects the interfaces it touches.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tcr_core::TcrResult;
use tcr_core::numeric::parse_user_number;

use crate::error::{SystemError, SystemResult};
use crate::stack::SystemStack;
use crate::tim::TimLibrary;

/// A single material entry: either a number or the raw text typed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Default for Field {
    fn default() -> Self {
        Field::Text(String::new())
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Number(v)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl Field {
    pub fn is_blank(&self) -> bool {
        matches!(self, Field::Text(s) if s.trim().is_empty())
    }

    /// Numeric value; blank means 0, malformed text is an error.
    pub fn value(&self, what: &str) -> TcrResult<f64> {
        match self {
            Field::Number(v) if v.is_finite() => Ok(*v),
            Field::Number(v) => Err(tcr_core::TcrError::Unparsable {
                what: what.to_string(),
                text: v.to_string(),
            }),
            Field::Text(s) => Ok(parse_user_number(s, what)?.unwrap_or(0.0)),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Number(v) => write!(f, "{v}"),
            Field::Text(s) => f.write_str(s),
        }
    }
}

/// Numeric material properties, in the units they are entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialField {
    /// Thermal conductivity [W/m·K]
    K,
    /// Young's modulus [GPa]
    Young,
    /// Poisson ratio [-]
    Poisson,
    /// RMS roughness [µm]
    Sigma,
    /// Mean absolute asperity slope [-]
    M,
    /// Microhardness [MPa]
    Hc,
}

impl MaterialField {
    pub const ALL: [MaterialField; 6] = [
        MaterialField::K,
        MaterialField::Young,
        MaterialField::Poisson,
        MaterialField::Sigma,
        MaterialField::M,
        MaterialField::Hc,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MaterialField::K => "k",
            MaterialField::Young => "young",
            MaterialField::Poisson => "poisson",
            MaterialField::Sigma => "sigma",
            MaterialField::M => "m",
            MaterialField::Hc => "hc",
        }
    }
}

impl fmt::Display for MaterialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    #[serde(default)]
    pub material_name: String,
    #[serde(default)]
    pub k: Field,
    #[serde(default)]
    pub young: Field,
    #[serde(default)]
    pub poisson: Field,
    #[serde(default)]
    pub sigma: Field,
    #[serde(default)]
    pub m: Field,
    #[serde(default)]
    pub hc: Field,
}

impl MaterialProperties {
    pub fn field(&self, which: MaterialField) -> &Field {
        match which {
            MaterialField::K => &self.k,
            MaterialField::Young => &self.young,
            MaterialField::Poisson => &self.poisson,
            MaterialField::Sigma => &self.sigma,
            MaterialField::M => &self.m,
            MaterialField::Hc => &self.hc,
        }
    }

    pub fn value(&self, which: MaterialField) -> TcrResult<f64> {
        self.field(which).value(which.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    NotNumeric,
}

/// One problem found while checking materials before a TCR run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialIssue {
    pub geometry: String,
    pub field: &'static str,
    pub kind: IssueKind,
}

impl fmt::Display for MaterialIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(f, "geometry '{}': missing {}", self.geometry, self.field),
            IssueKind::NotNumeric => write!(
                f,
                "geometry '{}': {} is not a number",
                self.geometry, self.field
            ),
        }
    }
}

/// Material records keyed by geometry name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialTable(BTreeMap<String, MaterialProperties>);

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, geometry: &str) -> Option<&MaterialProperties> {
        self.0.get(geometry)
    }

    pub fn insert(&mut self, geometry: impl Into<String>, props: MaterialProperties) {
        self.0.insert(geometry.into(), props);
    }

    /// The record for `geometry`, created empty if absent.
    pub fn ensure_entry(&mut self, geometry: &str) -> &mut MaterialProperties {
        self.0.entry(geometry.to_string()).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MaterialProperties)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that every geometry touching a TCR interface is fully described.
    ///
    /// Collects every missing or malformed field rather than stopping at the
    /// first, ordered by geometry name then field.
    pub fn validate_for_tcr(&self, stack: &SystemStack, tims: &TimLibrary) -> SystemResult<()> {
        let mut required: Vec<&str> = stack
            .tcr_interfaces()
            .flat_map(|(_, i)| [i.top.as_str(), i.bottom.as_str()])
            .collect();
        if required.is_empty() {
            return Ok(());
        }
        if tims.is_empty() {
            return Err(SystemError::NoTims);
        }
        required.sort_unstable();
        required.dedup();

        let blank = MaterialProperties::default();
        let mut issues = Vec::new();
        for geometry in required {
            let props = self.get(geometry).unwrap_or(&blank);
            if props.material_name.trim().is_empty() {
                issues.push(MaterialIssue {
                    geometry: geometry.to_string(),
                    field: "material_name",
                    kind: IssueKind::Missing,
                });
            }
            for which in MaterialField::ALL {
                let field = props.field(which);
                let kind = if field.is_blank() {
                    Some(IssueKind::Missing)
                } else if field.value(which.name()).is_err() {
                    Some(IssueKind::NotNumeric)
                } else {
                    None
                };
                if let Some(kind) = kind {
                    issues.push(MaterialIssue {
                        geometry: geometry.to_string(),
                        field: which.name(),
                        kind,
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SystemError::IncompleteMaterials { issues })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;
    use crate::tim::TimKind;

    fn steel() -> MaterialProperties {
        MaterialProperties {
            material_name: "Steel".into(),
            k: Field::Number(16.0),
            young: Field::Number(200.0),
            poisson: Field::Number(0.29),
            sigma: "1,2".into(),
            m: Field::Number(0.1),
            hc: Field::Number(3000.0),
        }
    }

    fn stack_ab() -> SystemStack {
        let mut stack = SystemStack::from_geometries(vec![
            Geometry::new("A", 1.0, 1.0, 0.01).unwrap(),
            Geometry::new("B", 1.0, 1.0, 0.01).unwrap(),
        ])
        .unwrap();
        stack.set_tcr(0, true).unwrap();
        stack
    }

    fn one_tim() -> TimLibrary {
        let mut tims = TimLibrary::new();
        tims.add_tim("air", 0.026, TimKind::Gas, false).unwrap();
        tims
    }

    #[test]
    fn field_parsing() {
        assert_eq!(Field::from("").value("k").unwrap(), 0.0);
        assert_eq!(Field::from("2,5").value("k").unwrap(), 2.5);
        assert_eq!(Field::from(3.0).value("k").unwrap(), 3.0);
        assert!(Field::from("n/a").value("k").is_err());
        assert!(Field::Number(f64::NAN).value("k").is_err());
        // Text and number forms agree on non-finite input.
        assert!(Field::from("inf").value("k").is_err());
        assert!(Field::from("NaN").value("k").is_err());
    }

    #[test]
    fn field_deserializes_numbers_and_text() {
        let props: MaterialProperties =
            serde_yaml::from_str("material_name: Cu\nk: 390\nsigma: '0,4'\n").unwrap();
        assert_eq!(props.k, Field::Number(390.0));
        assert_eq!(props.value(MaterialField::Sigma).unwrap(), 0.4);
        assert!(props.hc.is_blank());
    }

    #[test]
    fn complete_materials_pass() {
        let mut table = MaterialTable::new();
        table.insert("A", steel());
        table.insert("B", steel());
        assert!(table.validate_for_tcr(&stack_ab(), &one_tim()).is_ok());
    }

    #[test]
    fn tcr_without_tims_is_rejected() {
        let table = MaterialTable::new();
        assert_eq!(
            table.validate_for_tcr(&stack_ab(), &TimLibrary::new()),
            Err(SystemError::NoTims)
        );
    }

    #[test]
    fn issues_are_listed_per_field() {
        let mut table = MaterialTable::new();
        table.insert("A", steel());
        let b = table.ensure_entry("B");
        *b = steel();
        b.hc = "hard".into();
        b.m = Field::default();

        let err = table.validate_for_tcr(&stack_ab(), &one_tim()).unwrap_err();
        let SystemError::IncompleteMaterials { issues } = err else {
            panic!("expected material issues");
        };
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "m");
        assert_eq!(issues[0].kind, IssueKind::Missing);
        assert_eq!(issues[1].field, "hc");
        assert_eq!(issues[1].kind, IssueKind::NotNumeric);
        assert!(issues[1].to_string().contains("'B'"));
    }

    #[test]
    fn missing_record_reports_every_field() {
        let mut table = MaterialTable::new();
        table.insert("A", steel());
        let err = table.validate_for_tcr(&stack_ab(), &one_tim()).unwrap_err();
        let SystemError::IncompleteMaterials { issues } = err else {
            panic!("expected material issues");
        };
        assert_eq!(issues.len(), 7);
        assert!(issues.iter().all(|i| i.geometry == "B"));
    }

    #[test]
    fn stacks_without_tcr_need_nothing() {
        let stack = SystemStack::from_geometries(vec![
            Geometry::new("A", 1.0, 1.0, 0.01).unwrap(),
            Geometry::new("B", 1.0, 1.0, 0.01).unwrap(),
        ])
        .unwrap();
        assert!(MaterialTable::new().validate_for_tcr(&stack, &TimLibrary::new()).is_ok());
    }
}
