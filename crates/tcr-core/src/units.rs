// tcr-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// SI quantity types used at the unit-conversion boundary
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Absolute temperature difference between two boundaries, in kelvin.
#[inline]
pub fn delta_t_kelvin(hot: Temperature, cold: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    (hot.get::<kelvin>() - cold.get::<kelvin>()).abs()
}

/// Conversions from the units materials are entered in to SI.
///
/// Surface data sheets list roughness in micrometres, Young's modulus in
/// gigapascal and microhardness in megapascal; the kernels only see SI.
pub mod input {
    use super::*;

    /// Roughness: µm -> m.
    #[inline]
    pub fn roughness_m(micrometers: f64) -> f64 {
        use uom::si::length::{meter, micrometer};
        Length::new::<micrometer>(micrometers).get::<meter>()
    }

    /// Young's modulus: GPa -> Pa.
    #[inline]
    pub fn modulus_pa(gigapascal: f64) -> f64 {
        use uom::si::pressure::{gigapascal as gpa, pascal};
        Pressure::new::<gpa>(gigapascal).get::<pascal>()
    }

    /// Microhardness: MPa -> Pa.
    #[inline]
    pub fn hardness_pa(megapascal: f64) -> f64 {
        use uom::si::pressure::{megapascal as mpa, pascal};
        Pressure::new::<mpa>(megapascal).get::<pascal>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn input_units_convert_to_si() {
        let tol = Tolerances::default();
        assert!(nearly_equal(input::roughness_m(1.0), 1e-6, tol));
        assert!(nearly_equal(input::modulus_pa(100.0), 100e9, tol));
        assert!(nearly_equal(input::hardness_pa(50.0), 50e6, tol));
        assert_eq!(input::roughness_m(0.0), 0.0);
    }

    #[test]
    fn delta_t_is_absolute() {
        assert!(nearly_equal(delta_t_kelvin(k(350.0), k(300.0)), 50.0, Tolerances::default()));
        assert!(nearly_equal(delta_t_kelvin(k(300.0), k(350.0)), 50.0, Tolerances::default()));
    }
}
