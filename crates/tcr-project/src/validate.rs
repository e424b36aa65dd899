//! Structural case validation.
//!
//! Only checks what makes a case unloadable. Forces and temperatures are
//! checked by the runner; incomplete materials only skip interfaces.

use std::collections::HashSet;

use crate::schema::{CURRENT_VERSION, Case, TimDef};
use tcr_system::TimKind;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate {context}: {id}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > CURRENT_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let mut names = HashSet::new();
    for g in &case.geometries {
        let name = g.name.trim();
        if name.is_empty() {
            return Err(invalid("geometry name", &g.name, "must not be empty"));
        }
        if !names.insert(name) {
            return Err(ValidationError::DuplicateId {
                id: name.to_string(),
                context: "geometry name".to_string(),
            });
        }
        for (what, v) in [("length_m", g.length_m), ("width_m", g.width_m), ("height_m", g.height_m)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(invalid(format!("{name}.{what}"), v, "must be positive"));
            }
        }
    }

    for pair in &case.tcr_interfaces {
        for end in [&pair.top, &pair.bottom] {
            if !names.contains(end.trim()) {
                return Err(ValidationError::MissingReference {
                    id: end.clone(),
                    context: "tcr_interfaces".to_string(),
                });
            }
        }
    }

    let mut tim_ids = HashSet::new();
    for tim in &case.tims {
        validate_tim(tim)?;
        if !tim_ids.insert(tim.id) {
            return Err(ValidationError::DuplicateId {
                id: tim.id.to_string(),
                context: "TIM id".to_string(),
            });
        }
    }

    let interface_count = case.geometries.len().saturating_sub(1);
    let mut assigned = HashSet::new();
    for a in &case.assignments {
        if a.interface >= interface_count {
            return Err(ValidationError::MissingReference {
                id: a.interface.to_string(),
                context: format!("assignments (case has {interface_count} interfaces)"),
            });
        }
        if !assigned.insert(a.interface) {
            return Err(ValidationError::DuplicateId {
                id: a.interface.to_string(),
                context: "assignment interface".to_string(),
            });
        }
        if let Some(tim) = a.tim.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            if !case.tims.iter().any(|t| t.name == tim) {
                return Err(ValidationError::MissingReference {
                    id: tim.to_string(),
                    context: "assignment tim".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_tim(tim: &TimDef) -> Result<(), ValidationError> {
    if tim.id == 0 {
        return Err(invalid(format!("tim '{}'.id", tim.name), 0, "ids start at 1"));
    }
    if !tim.k.is_finite() || tim.k < 0.0 {
        return Err(invalid(format!("tim '{}'.k", tim.name), tim.k, "must be finite and non-negative"));
    }
    if tim.kind == TimKind::Paste && tim.pressure_dependent {
        return Err(invalid(
            format!("tim '{}'.pressure_dependent", tim.name),
            true,
            "only gases can be pressure dependent",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AssignmentDef, BoundaryDef, GeometryDef, TcrPairDef};
    use tcr_system::MaterialTable;

    fn geometry(name: &str) -> GeometryDef {
        GeometryDef {
            name: name.into(),
            length_m: 0.1,
            width_m: 0.1,
            height_m: 0.01,
        }
    }

    fn case() -> Case {
        Case {
            version: CURRENT_VERSION,
            name: "test".into(),
            geometries: vec![geometry("A"), geometry("B")],
            tcr_interfaces: vec![TcrPairDef {
                top: "A".into(),
                bottom: "B".into(),
            }],
            materials: MaterialTable::new(),
            tims: vec![TimDef {
                id: 1,
                name: "air".into(),
                k: 0.026,
                kind: TimKind::Gas,
                pressure_dependent: true,
            }],
            assignments: vec![AssignmentDef {
                interface: 0,
                tim: Some("air".into()),
                thickness: None,
            }],
            forces_n: vec![100.0],
            boundary: BoundaryDef {
                t_hot_k: 350.0,
                t_cold_k: 300.0,
            },
            model: None,
        }
    }

    #[test]
    fn valid_case_passes() {
        validate_case(&case()).unwrap();
    }

    #[test]
    fn rejects_unsupported_version() {
        let mut c = case();
        c.version = 7;
        assert!(matches!(
            validate_case(&c),
            Err(ValidationError::UnsupportedVersion { version: 7 })
        ));
    }

    #[test]
    fn rejects_bad_geometries() {
        let mut dup = case();
        dup.geometries.push(geometry(" A "));
        assert!(matches!(validate_case(&dup), Err(ValidationError::DuplicateId { .. })));

        let mut flat = case();
        flat.geometries[1].height_m = 0.0;
        assert!(matches!(validate_case(&flat), Err(ValidationError::InvalidValue { .. })));

        let mut blank = case();
        blank.geometries[0].name = "  ".into();
        assert!(validate_case(&blank).is_err());
    }

    #[test]
    fn rejects_unknown_references() {
        let mut pair = case();
        pair.tcr_interfaces[0].bottom = "C".into();
        assert!(matches!(validate_case(&pair), Err(ValidationError::MissingReference { .. })));

        let mut index = case();
        index.assignments[0].interface = 1;
        assert!(matches!(validate_case(&index), Err(ValidationError::MissingReference { .. })));

        let mut tim = case();
        tim.assignments[0].tim = Some("argon".into());
        assert!(matches!(validate_case(&tim), Err(ValidationError::MissingReference { .. })));

        let mut blank_tim = case();
        blank_tim.assignments[0].tim = Some(String::new());
        validate_case(&blank_tim).unwrap();
    }

    #[test]
    fn rejects_bad_tims() {
        let mut zero_id = case();
        zero_id.tims[0].id = 0;
        assert!(validate_case(&zero_id).is_err());

        let mut paste = case();
        paste.tims[0].kind = TimKind::Paste;
        assert!(validate_case(&paste).is_err());
        paste.tims[0].pressure_dependent = false;
        validate_case(&paste).unwrap();

        let mut dup = case();
        let mut second = dup.tims[0].clone();
        second.name = "helium".into();
        dup.tims.push(second);
        assert!(matches!(validate_case(&dup), Err(ValidationError::DuplicateId { .. })));

        let mut negative = case();
        negative.tims[0].k = -1.0;
        assert!(validate_case(&negative).is_err());
    }
}
