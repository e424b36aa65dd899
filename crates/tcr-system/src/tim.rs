//! Thermal interface material library.

use std::fmt;

use serde::{Deserialize, Serialize};
use tcr_core::TimId;

use crate::error::{SystemError, SystemResult};

/// What fills the interstitial gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimKind {
    #[default]
    Gas,
    Paste,
}

impl fmt::Display for TimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimKind::Gas => f.write_str("gas"),
            TimKind::Paste => f.write_str("paste"),
        }
    }
}

/// A thermal interface material.
///
/// Only gases can be pressure dependent: a paste always has a fixed
/// bond-line thickness, and the constructor and setters enforce that.
#[derive(Debug, Clone, PartialEq)]
pub struct Tim {
    id: TimId,
    name: String,
    k: f64,
    kind: TimKind,
    pressure_dependent: bool,
}

impl Tim {
    /// Build a TIM. `pressure_dependent` is dropped for pastes.
    pub fn new(
        id: TimId,
        name: impl Into<String>,
        k: f64,
        kind: TimKind,
        pressure_dependent: bool,
    ) -> SystemResult<Self> {
        let name = name.into();
        if !k.is_finite() || k < 0.0 {
            return Err(SystemError::InvalidTim {
                name,
                reason: "conductivity must be finite and non-negative",
            });
        }
        Ok(Self {
            id,
            name,
            k,
            kind,
            pressure_dependent: pressure_dependent && kind == TimKind::Gas,
        })
    }

    pub fn id(&self) -> TimId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conductivity [W/m·K].
    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn kind(&self) -> TimKind {
        self.kind
    }

    pub fn is_pressure_dependent(&self) -> bool {
        self.pressure_dependent
    }

    /// Switching to paste clears the pressure-dependent flag.
    pub fn set_kind(&mut self, kind: TimKind) {
        self.kind = kind;
        if kind == TimKind::Paste {
            self.pressure_dependent = false;
        }
    }

    pub fn set_pressure_dependent(&mut self, value: bool) -> SystemResult<()> {
        if value && self.kind == TimKind::Paste {
            return Err(SystemError::InvalidTim {
                name: self.name.clone(),
                reason: "a paste cannot be pressure dependent",
            });
        }
        self.pressure_dependent = value;
        Ok(())
    }
}

/// Ordered TIM records with monotonically allocated ids.
#[derive(Debug, Clone)]
pub struct TimLibrary {
    tims: Vec<Tim>,
    next_id: Option<TimId>,
}

impl Default for TimLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TimLibrary {
    pub fn new() -> Self {
        Self {
            tims: Vec::new(),
            next_id: Some(TimId::FIRST),
        }
    }

    fn allocate_id(&mut self) -> SystemResult<TimId> {
        let id = self.next_id.ok_or(SystemError::TimIdsExhausted)?;
        self.next_id = id.next();
        Ok(id)
    }

    /// Append a new TIM under a freshly allocated id.
    pub fn add_tim(
        &mut self,
        name: impl Into<String>,
        k: f64,
        kind: TimKind,
        pressure_dependent: bool,
    ) -> SystemResult<TimId> {
        let id = self.allocate_id()?;
        self.tims.push(Tim::new(id, name, k, kind, pressure_dependent)?);
        Ok(id)
    }

    /// Replace the records, keeping future ids above every id seen so far.
    pub fn set_tims(&mut self, tims: Vec<Tim>) {
        if let Some(max) = tims.iter().map(Tim::id).max() {
            let after_max = max.next();
            self.next_id = match (self.next_id, after_max) {
                (Some(current), Some(after)) => Some(current.max(after)),
                _ => None,
            };
        }
        self.tims = tims;
    }

    /// Remove every record; ids already handed out are not reused.
    pub fn clear(&mut self) -> usize {
        let count = self.tims.len();
        self.tims.clear();
        count
    }

    /// First TIM with the given name.
    pub fn by_name(&self, name: &str) -> Option<&Tim> {
        self.tims.iter().find(|t| t.name() == name)
    }

    pub fn get_mut(&mut self, id: TimId) -> Option<&mut Tim> {
        self.tims.iter_mut().find(|t| t.id() == id)
    }

    pub fn as_slice(&self) -> &[Tim] {
        &self.tims
    }

    pub fn len(&self) -> usize {
        self.tims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tims.is_empty()
    }
}
