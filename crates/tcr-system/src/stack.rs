//! Ordered geometry stack and the interfaces derived from it.

use std::collections::HashSet;

use crate::error::{SystemError, SystemResult};
use crate::geometry::Geometry;

/// Contact between two geometries that are adjacent in stack order.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub top: String,
    pub bottom: String,
    /// Whether microcontact resistance is evaluated here.
    pub has_tcr: bool,
    /// Limiting nominal contact area, `min(area_top, area_bottom)` [m²].
    pub a_nominal: f64,
}

impl Interface {
    pub fn between(top: &Geometry, bottom: &Geometry, has_tcr: bool) -> Self {
        Self {
            top: top.name().to_string(),
            bottom: bottom.name().to_string(),
            has_tcr,
            a_nominal: top.area().min(bottom.area()),
        }
    }

    /// Display label, `top → bottom`.
    pub fn label(&self) -> String {
        format!("{} → {}", self.top, self.bottom)
    }

    fn key(&self) -> (&str, &str) {
        (&self.top, &self.bottom)
    }
}

/// Outcome of regenerating the interfaces after a stack edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebuildReport {
    /// TCR-flagged (top, bottom) pairs that are no longer contiguous.
    pub removed_tcr_pairs: Vec<(String, String)>,
}

/// Geometries in stack order plus their derived interfaces.
///
/// Interfaces are never edited structurally: every geometry edit regenerates
/// them, carrying `has_tcr` over for name pairs that are still adjacent.
#[derive(Debug, Clone, Default)]
pub struct SystemStack {
    geometries: Vec<Geometry>,
    interfaces: Vec<Interface>,
}

impl SystemStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from geometries in order; names must be unique.
    pub fn from_geometries(geometries: Vec<Geometry>) -> SystemResult<Self> {
        let mut seen = HashSet::new();
        for g in &geometries {
            if !seen.insert(g.name()) {
                return Err(SystemError::DuplicateName {
                    name: g.name().to_string(),
                });
            }
        }
        let mut stack = Self {
            geometries,
            interfaces: Vec::new(),
        };
        stack.rebuild_interfaces();
        Ok(stack)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn geometry(&self, name: &str) -> Option<&Geometry> {
        self.geometries.iter().find(|g| g.name() == name)
    }

    /// Interfaces flagged for TCR, with their stack index.
    pub fn tcr_interfaces(&self) -> impl Iterator<Item = (usize, &Interface)> {
        self.interfaces.iter().enumerate().filter(|(_, i)| i.has_tcr)
    }

    fn name_exists(&self, name: &str, exclude: Option<usize>) -> bool {
        self.geometries
            .iter()
            .enumerate()
            .any(|(i, g)| Some(i) != exclude && g.name() == name)
    }

    /// Insert a geometry at `index` (or append) and rebuild interfaces.
    pub fn add_geometry(
        &mut self,
        geometry: Geometry,
        index: Option<usize>,
    ) -> SystemResult<RebuildReport> {
        if self.name_exists(geometry.name(), None) {
            return Err(SystemError::DuplicateName {
                name: geometry.name().to_string(),
            });
        }
        match index {
            None => self.geometries.push(geometry),
            Some(i) if i <= self.geometries.len() => self.geometries.insert(i, geometry),
            Some(i) => {
                return Err(SystemError::IndexOob {
                    what: "geometry insert position",
                    index: i,
                    len: self.geometries.len(),
                });
            }
        }
        Ok(self.rebuild_interfaces())
    }

    pub fn remove_geometry(&mut self, index: usize) -> SystemResult<(Geometry, RebuildReport)> {
        if index >= self.geometries.len() {
            return Err(SystemError::IndexOob {
                what: "geometry",
                index,
                len: self.geometries.len(),
            });
        }
        let removed = self.geometries.remove(index);
        Ok((removed, self.rebuild_interfaces()))
    }

    pub fn update_geometry(&mut self, index: usize, geometry: Geometry) -> SystemResult<RebuildReport> {
        if index >= self.geometries.len() {
            return Err(SystemError::IndexOob {
                what: "geometry",
                index,
                len: self.geometries.len(),
            });
        }
        if self.name_exists(geometry.name(), Some(index)) {
            return Err(SystemError::DuplicateName {
                name: geometry.name().to_string(),
            });
        }
        self.geometries[index] = geometry;
        Ok(self.rebuild_interfaces())
    }

    pub fn set_tcr(&mut self, interface_index: usize, value: bool) -> SystemResult<()> {
        let len = self.interfaces.len();
        let iface = self
            .interfaces
            .get_mut(interface_index)
            .ok_or(SystemError::IndexOob {
                what: "interface",
                index: interface_index,
                len,
            })?;
        iface.has_tcr = value;
        tracing::debug!(interface = %iface.label(), has_tcr = value, "TCR flag changed");
        Ok(())
    }

    /// Flag the interface between two named, adjacent geometries.
    pub fn set_tcr_pair(&mut self, top: &str, bottom: &str, value: bool) -> SystemResult<usize> {
        let index = self
            .interfaces
            .iter()
            .position(|i| i.key() == (top, bottom))
            .ok_or_else(|| SystemError::UnknownInterface {
                top: top.to_string(),
                bottom: bottom.to_string(),
            })?;
        self.set_tcr(index, value)?;
        Ok(index)
    }

    /// Regenerate interfaces from the current geometry order.
    pub fn rebuild_interfaces(&mut self) -> RebuildReport {
        let previous: Vec<((String, String), bool)> = self
            .interfaces
            .iter()
            .map(|i| ((i.top.clone(), i.bottom.clone()), i.has_tcr))
            .collect();
        let flag_for = |top: &str, bottom: &str| {
            previous
                .iter()
                .find(|((t, b), _)| t == top && b == bottom)
                .is_some_and(|(_, flag)| *flag)
        };

        let rebuilt: Vec<Interface> = self
            .geometries
            .windows(2)
            .map(|pair| Interface::between(&pair[0], &pair[1], flag_for(pair[0].name(), pair[1].name())))
            .collect();

        let removed_tcr_pairs: Vec<(String, String)> = previous
            .iter()
            .filter(|((t, b), flag)| {
                *flag && !rebuilt.iter().any(|i| i.key() == (t.as_str(), b.as_str()))
            })
            .map(|(pair, _)| pair.clone())
            .collect();

        for (top, bottom) in &removed_tcr_pairs {
            tracing::info!(%top, %bottom, "TCR interface dropped by stack rebuild");
        }

        self.interfaces = rebuilt;
        RebuildReport { removed_tcr_pairs }
    }

    /// A runnable stack has at least one geometry.
    ///
    /// Individual geometries are validated at construction, so only
    /// emptiness can fail here.
    pub fn validate(&self) -> SystemResult<()> {
        if self.geometries.is_empty() {
            return Err(SystemError::Empty);
        }
        Ok(())
    }
}
