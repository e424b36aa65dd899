//! tcr-contact: steady-state contact-resistance kernels.
//!
//! Provides the pure numeric building blocks of a run:
//! - effective interface parameters from two adjoining materials
//! - microcontact conductance correlations (Mikic elastic/plastic, CMY, Yovanovich)
//! - interstitial gap conductance for gas and paste TIMs
//! - combination into one interface resistance
//! - bulk conduction resistance of the solid layers
//!
//! Every kernel consumes SI units and is a deterministic function of its
//! inputs. Degenerate inputs (zero pressure, missing properties) produce zero
//! conductance or an open-circuit resistance rather than an error.
//!
//! # Example
//!
//! ```
//! use tcr_contact::{ContactModel, EffectiveParams, combine};
//!
//! let params = EffectiveParams {
//!     label: "A → B".into(),
//!     sig_s: 1.0e-6,
//!     m_s: 0.1,
//!     k_s: 200.0,
//!     e_s: 60.0e9,
//!     hc_soft: 50.0e6,
//!     a_nominal: 1.0e-4,
//! };
//! let pressure = 1.0e6;
//! let h_c = ContactModel::MikicPlastic.h_contact(&params, pressure);
//! let result = combine(h_c, 0.0, pressure, &params);
//! assert!(result.r_total.is_finite());
//! ```

pub mod bulk;
pub mod combine;
pub mod common;
pub mod conductance;
pub mod error;
pub mod gap;
pub mod params;

// Re-exports
pub use bulk::{BulkResistance, bulk_resistance, layer_resistance};
pub use combine::{InterfaceResult, combine, contact_fraction_pct, layer_conductance};
pub use conductance::ContactModel;
pub use error::{ParamError, ParamResult};
pub use gap::{GapInput, gap_conductance, pressure_dependent_gap};
pub use params::{EffectiveParams, resolve_interface};
