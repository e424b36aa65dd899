//! Conversion between a case file and the engine's input snapshot.

use std::collections::BTreeMap;

use tcr_contact::ContactModel;
use tcr_core::TimId;
use tcr_sim::{BoundaryTemperatures, InterfaceAssignment, SimulationInput};
use tcr_system::{Field, Geometry, SystemError, SystemStack, Tim, TimLibrary};
use tracing::warn;

use crate::schema::{
    AssignmentDef, BoundaryDef, CURRENT_VERSION, Case, GeometryDef, TcrPairDef, TimDef,
};
use crate::{ProjectError, ProjectResult};

/// A case turned into engine input.
#[derive(Debug, Clone)]
pub struct LoadedCase {
    pub input: SimulationInput,
    /// Flagged pairs that are not adjacent in the stack.
    pub dropped_tcr_pairs: Vec<(String, String)>,
}

impl Case {
    /// Build the geometry stack and apply the contact-resistance flags.
    pub fn to_stack(&self) -> ProjectResult<(SystemStack, Vec<(String, String)>)> {
        let geometries = self
            .geometries
            .iter()
            .map(|g| Geometry::new(g.name.as_str(), g.length_m, g.width_m, g.height_m))
            .collect::<Result<Vec<_>, _>>()?;
        let mut stack = SystemStack::from_geometries(geometries)?;

        let mut dropped = Vec::new();
        for pair in &self.tcr_interfaces {
            match stack.set_tcr_pair(pair.top.trim(), pair.bottom.trim(), true) {
                Ok(_) => {}
                Err(SystemError::UnknownInterface { top, bottom }) => {
                    warn!(%top, %bottom, "flagged pair is not contiguous, dropped");
                    dropped.push((top, bottom));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok((stack, dropped))
    }

    pub fn to_tim_library(&self) -> ProjectResult<TimLibrary> {
        let tims = self
            .tims
            .iter()
            .map(|t| -> ProjectResult<Tim> {
                let id = TimId::new(t.id).ok_or_else(|| ProjectError::Conversion {
                    what: format!("TIM '{}' has id 0", t.name),
                })?;
                Ok(Tim::new(id, t.name.as_str(), t.k, t.kind, t.pressure_dependent)?)
            })
            .collect::<ProjectResult<Vec<_>>>()?;
        let mut library = TimLibrary::new();
        library.set_tims(tims);
        Ok(library)
    }

    /// Engine input for this case; `model` overrides the case's own choice.
    pub fn to_simulation_input(&self, model: Option<ContactModel>) -> ProjectResult<LoadedCase> {
        let (stack, dropped_tcr_pairs) = self.to_stack()?;
        let assignments = self
            .assignments
            .iter()
            .map(|a| {
                (
                    a.interface,
                    InterfaceAssignment {
                        tim: a.tim.clone(),
                        thickness: a.thickness.as_ref().map(Field::to_string),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();

        let input = SimulationInput {
            stack,
            materials: self.materials.clone(),
            tims: self.to_tim_library()?,
            assignments,
            forces: self.forces_n.clone(),
            boundary: BoundaryTemperatures {
                t_hot_k: self.boundary.t_hot_k,
                t_cold_k: self.boundary.t_cold_k,
            },
            model: model.or(self.model).unwrap_or_default(),
        };
        Ok(LoadedCase {
            input,
            dropped_tcr_pairs,
        })
    }

    /// Capture an engine snapshot as a case file.
    pub fn from_input(name: impl Into<String>, input: &SimulationInput) -> Self {
        Self {
            version: CURRENT_VERSION,
            name: name.into(),
            geometries: input
                .stack
                .geometries()
                .iter()
                .map(|g| GeometryDef {
                    name: g.name().to_string(),
                    length_m: g.length(),
                    width_m: g.width(),
                    height_m: g.height(),
                })
                .collect(),
            tcr_interfaces: input
                .stack
                .tcr_interfaces()
                .map(|(_, iface)| TcrPairDef {
                    top: iface.top.clone(),
                    bottom: iface.bottom.clone(),
                })
                .collect(),
            materials: input.materials.clone(),
            tims: input
                .tims
                .as_slice()
                .iter()
                .map(|t| TimDef {
                    id: t.id().get(),
                    name: t.name().to_string(),
                    k: t.k(),
                    kind: t.kind(),
                    pressure_dependent: t.is_pressure_dependent(),
                })
                .collect(),
            assignments: input
                .assignments
                .iter()
                .map(|(&interface, a)| AssignmentDef {
                    interface,
                    tim: a.tim.clone(),
                    thickness: a.thickness.as_deref().map(Field::from),
                })
                .collect(),
            forces_n: input.forces.clone(),
            boundary: BoundaryDef {
                t_hot_k: input.boundary.t_hot_k,
                t_cold_k: input.boundary.t_cold_k,
            },
            model: Some(input.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcr_system::{MaterialTable, TimKind};

    fn case() -> Case {
        let geometry = |name: &str| GeometryDef {
            name: name.into(),
            length_m: 0.1,
            width_m: 0.1,
            height_m: 0.01,
        };
        Case {
            version: CURRENT_VERSION,
            name: "convert".into(),
            geometries: vec![geometry("A"), geometry("B"), geometry("C")],
            tcr_interfaces: vec![
                TcrPairDef {
                    top: "B".into(),
                    bottom: "C".into(),
                },
                TcrPairDef {
                    top: "A".into(),
                    bottom: "C".into(),
                },
            ],
            materials: MaterialTable::new(),
            tims: vec![TimDef {
                id: 4,
                name: "grease".into(),
                k: 2.0,
                kind: TimKind::Paste,
                pressure_dependent: false,
            }],
            assignments: vec![AssignmentDef {
                interface: 1,
                tim: Some("grease".into()),
                thickness: Some(Field::Number(5e-5)),
            }],
            forces_n: vec![10.0, 20.0],
            boundary: BoundaryDef {
                t_hot_k: 400.0,
                t_cold_k: 300.0,
            },
            model: Some(ContactModel::Cmy),
        }
    }

    #[test]
    fn non_contiguous_pairs_are_reported() {
        let (stack, dropped) = case().to_stack().unwrap();
        assert_eq!(stack.interfaces().len(), 2);
        assert!(!stack.interfaces()[0].has_tcr);
        assert!(stack.interfaces()[1].has_tcr);
        assert_eq!(dropped, vec![("A".to_string(), "C".to_string())]);
    }

    #[test]
    fn model_override_wins() {
        let c = case();
        assert_eq!(c.to_simulation_input(None).unwrap().input.model, ContactModel::Cmy);
        let loaded = c.to_simulation_input(Some(ContactModel::Yovanovich)).unwrap();
        assert_eq!(loaded.input.model, ContactModel::Yovanovich);

        let mut no_model = c;
        no_model.model = None;
        assert_eq!(
            no_model.to_simulation_input(None).unwrap().input.model,
            ContactModel::default()
        );
    }

    #[test]
    fn tim_ids_are_kept_and_counter_follows() {
        let mut library = case().to_tim_library().unwrap();
        assert_eq!(library.as_slice()[0].id().get(), 4);
        let next = library.add_tim("air", 0.026, TimKind::Gas, true).unwrap();
        assert_eq!(next.get(), 5);
    }

    #[test]
    fn snapshot_survives_a_round_trip() {
        let original = case();
        let loaded = original.to_simulation_input(None).unwrap();
        assert_eq!(
            loaded.input.assignments[&1].thickness.as_deref(),
            Some("0.00005")
        );

        let back = Case::from_input("convert", &loaded.input);
        // The dropped pair does not come back.
        assert_eq!(back.tcr_interfaces.len(), 1);
        assert_eq!(back.geometries, original.geometries);
        assert_eq!(back.tims, original.tims);
        assert_eq!(back.forces_n, original.forces_n);
        assert_eq!(back.model, Some(ContactModel::Cmy));
    }
}
