//! Microcontact conductance correlations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::EffectiveParams;

/// Empirical contact-conductance correlation applied for a whole run.
///
/// All variants share the form `h = C·k_s·(m_s/σ_s)·x^n` where `x` is a
/// dimensionless pressure. They return 0 ("no contact established") when
/// roughness, slope or the pressure normaliser is not positive, or when the
/// pressure is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactModel {
    #[default]
    /// Elastic asperity deformation: `x = √2·P/(m_s·E')`, C = 1.54, n = 0.94.
    MikicElastic,
    /// Plastic asperity deformation: `x = P/Hc`, C = 1.13, n = 0.94.
    MikicPlastic,
    /// Cooper–Mikic–Yovanovich: `x = P/Hc`, C = 1.45, n = 0.985.
    Cmy,
    /// Yovanovich: `x = P/Hc`, C = 1.25, n = 0.95.
    Yovanovich,
}

impl ContactModel {
    pub const ALL: [ContactModel; 4] = [
        ContactModel::MikicElastic,
        ContactModel::MikicPlastic,
        ContactModel::Cmy,
        ContactModel::Yovanovich,
    ];

    /// Leading coefficient and exponent of the correlation.
    pub fn constants(self) -> (f64, f64) {
        match self {
            ContactModel::MikicElastic => (1.54, 0.94),
            ContactModel::MikicPlastic => (1.13, 0.94),
            ContactModel::Cmy => (1.45, 0.985),
            ContactModel::Yovanovich => (1.25, 0.95),
        }
    }

    /// Dimensionless pressure, or `None` when the normaliser is not positive.
    fn relative_pressure(self, params: &EffectiveParams, pressure: f64) -> Option<f64> {
        match self {
            ContactModel::MikicElastic => (params.e_s > 0.0)
                .then(|| std::f64::consts::SQRT_2 * pressure / (params.m_s * params.e_s)),
            ContactModel::MikicPlastic | ContactModel::Cmy | ContactModel::Yovanovich => {
                (params.hc_soft > 0.0).then(|| pressure / params.hc_soft)
            }
        }
    }

    /// Contact conductance [W/(m²·K)] at the given contact pressure [Pa].
    pub fn h_contact(self, params: &EffectiveParams, pressure: f64) -> f64 {
        if !(params.sig_s > 0.0 && params.m_s > 0.0) {
            return 0.0;
        }
        match self.relative_pressure(params, pressure) {
            Some(x) if x > 0.0 => {
                let (coefficient, exponent) = self.constants();
                coefficient * params.k_s * (params.m_s / params.sig_s) * x.powf(exponent)
            }
            _ => 0.0,
        }
    }

    /// Short identifier, also used for result directories.
    pub fn tag(self) -> &'static str {
        match self {
            ContactModel::MikicElastic => "mikic_elastic",
            ContactModel::MikicPlastic => "mikic_plastic",
            ContactModel::Cmy => "cmy",
            ContactModel::Yovanovich => "yovanovich",
        }
    }
}

impl fmt::Display for ContactModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactModel::MikicElastic => "Mikic elastic",
            ContactModel::MikicPlastic => "Mikic plastic",
            ContactModel::Cmy => "CMY",
            ContactModel::Yovanovich => "Yovanovich",
        };
        f.write_str(name)
    }
}

impl FromStr for ContactModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ContactModel::ALL
            .into_iter()
            .find(|m| m.tag() == key)
            .ok_or_else(|| {
                let known: Vec<&str> = ContactModel::ALL.iter().map(|m| m.tag()).collect();
                format!("unknown contact model '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcr_core::numeric::{Tolerances, nearly_equal};

    fn unit_params() -> EffectiveParams {
        EffectiveParams {
            label: "A → B".into(),
            sig_s: 1.0,
            m_s: 1.0,
            k_s: 1.0,
            e_s: 1.0,
            hc_soft: 100.0,
            a_nominal: 1.0,
        }
    }

    #[test]
    fn plastic_family_at_hardness_reduces_to_coefficient() {
        let p = unit_params();
        let tol = Tolerances::default();
        assert!(nearly_equal(ContactModel::MikicPlastic.h_contact(&p, 100.0), 1.13, tol));
        assert!(nearly_equal(ContactModel::Cmy.h_contact(&p, 100.0), 1.45, tol));
        assert!(nearly_equal(ContactModel::Yovanovich.h_contact(&p, 100.0), 1.25, tol));
    }

    #[test]
    fn mikic_elastic_formula() {
        let p = EffectiveParams {
            sig_s: 2.0e-6,
            m_s: 0.2,
            k_s: 100.0,
            e_s: 50.0e9,
            ..unit_params()
        };
        let pressure = 1.0e6;
        let inner = 2.0_f64.sqrt() * pressure / (0.2 * 50.0e9);
        let expected = 1.54 * 100.0 * (0.2 / 2.0e-6) * inner.powf(0.94);
        let got = ContactModel::MikicElastic.h_contact(&p, pressure);
        assert!(nearly_equal(got, expected, Tolerances::default()));
        assert!(got > 0.0);
    }

    #[test]
    fn zero_or_negative_pressure_means_no_contact() {
        let p = unit_params();
        for model in ContactModel::ALL {
            assert_eq!(model.h_contact(&p, 0.0), 0.0, "{model}");
            assert_eq!(model.h_contact(&p, -10.0), 0.0, "{model}");
        }
    }

    #[test]
    fn missing_surface_data_means_no_contact() {
        for model in ContactModel::ALL {
            let no_roughness = EffectiveParams {
                sig_s: 0.0,
                ..unit_params()
            };
            let no_slope = EffectiveParams {
                m_s: 0.0,
                ..unit_params()
            };
            assert_eq!(model.h_contact(&no_roughness, 100.0), 0.0);
            assert_eq!(model.h_contact(&no_slope, 100.0), 0.0);
        }
        let no_modulus = EffectiveParams {
            e_s: 0.0,
            ..unit_params()
        };
        assert_eq!(ContactModel::MikicElastic.h_contact(&no_modulus, 100.0), 0.0);
        // Plastic models do not need the modulus.
        assert!(ContactModel::MikicPlastic.h_contact(&no_modulus, 100.0) > 0.0);

        let no_hardness = EffectiveParams {
            hc_soft: 0.0,
            ..unit_params()
        };
        assert_eq!(ContactModel::Cmy.h_contact(&no_hardness, 100.0), 0.0);
        assert!(ContactModel::MikicElastic.h_contact(&no_hardness, 100.0) > 0.0);
    }

    #[test]
    fn conductance_grows_with_pressure() {
        let p = unit_params();
        for model in ContactModel::ALL {
            assert!(model.h_contact(&p, 20.0) < model.h_contact(&p, 40.0));
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("mikic_elastic".parse::<ContactModel>(), Ok(ContactModel::MikicElastic));
        assert_eq!("Mikic-Plastic".parse::<ContactModel>(), Ok(ContactModel::MikicPlastic));
        assert_eq!("CMY".parse::<ContactModel>(), Ok(ContactModel::Cmy));
        assert!("greenwood".parse::<ContactModel>().is_err());
        assert_eq!(ContactModel::Yovanovich.to_string(), "Yovanovich");
    }
}
