//! Applied force cases and the nominal pressures they produce.

use crate::error::{SystemError, SystemResult};
use crate::stack::SystemStack;

/// Force magnitudes [N] in case order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForceList(Vec<f64>);

impl ForceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Vec<f64>) -> SystemResult<Self> {
        let mut list = Self::new();
        for v in values {
            list.push(v)?;
        }
        Ok(list)
    }

    pub fn push(&mut self, force_n: f64) -> SystemResult<()> {
        if !force_n.is_finite() {
            return Err(SystemError::NonFiniteForce { value: force_n });
        }
        self.0.push(force_n);
        Ok(())
    }

    pub fn clear(&mut self) -> usize {
        let count = self.0.len();
        self.0.clear();
        count
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nominal pressure on every TCR interface for every force case.
    pub fn pressure_report(&self, stack: &SystemStack) -> SystemResult<Vec<PressureRow>> {
        if self.is_empty() {
            return Err(SystemError::NoForces);
        }
        let interfaces: Vec<_> = stack.tcr_interfaces().collect();
        if interfaces.is_empty() {
            return Err(SystemError::NoTcrInterfaces);
        }

        let mut rows = Vec::with_capacity(self.len() * interfaces.len());
        for (force_index, &force_n) in self.0.iter().enumerate() {
            for (interface_index, iface) in &interfaces {
                let pressure_pa = if iface.a_nominal > 0.0 {
                    force_n / iface.a_nominal
                } else {
                    0.0
                };
                rows.push(PressureRow {
                    force_index,
                    force_n,
                    interface_index: *interface_index,
                    interface: iface.label(),
                    area_m2: iface.a_nominal,
                    pressure_pa,
                });
            }
        }
        Ok(rows)
    }
}

/// One (force, interface) entry of the pressure report.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureRow {
    pub force_index: usize,
    pub force_n: f64,
    pub interface_index: usize,
    pub interface: String,
    pub area_m2: f64,
    pub pressure_pa: f64,
}
