//! Combination rules for the two surfaces meeting at an interface.

/// Root-sum-square of two surface quantities (roughness, slope).
pub fn rss(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Harmonic mean `2ab/(a+b)`, 0 when `a + b` is not positive.
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum > 0.0 { 2.0 * a * b / sum } else { 0.0 }
}

/// Effective elastic modulus of two bodies in contact [Pa].
///
/// `E' = E1·E2 / (E2·(1−ν1²) + E1·(1−ν2²))`, 0 when the denominator is not
/// positive.
pub fn combined_modulus(e_1: f64, v_1: f64, e_2: f64, v_2: f64) -> f64 {
    let denom = e_2 * (1.0 - v_1 * v_1) + e_1 * (1.0 - v_2 * v_2);
    if denom > 0.0 { e_1 * e_2 / denom } else { 0.0 }
}

/// Microhardness of the softer surface: the smaller positive value, else 0.
pub fn softer_hardness(hc_1: f64, hc_2: f64) -> f64 {
    [hc_1, hc_2]
        .into_iter()
        .filter(|h| *h > 0.0)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Clamp a value between min and max.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonic_mean_guards_zero_sum() {
        assert_eq!(harmonic_mean(0.0, 0.0), 0.0);
        assert_eq!(harmonic_mean(200.0, 0.0), 0.0);
        assert_eq!(harmonic_mean(100.0, 100.0), 100.0);
    }

    #[test]
    fn combined_modulus_of_identical_bodies() {
        // Two identical bodies: E' = E / (2(1−ν²)).
        let e = 100e9;
        let v: f64 = 0.3;
        let expected = e / (2.0 * (1.0 - v * v));
        assert!((combined_modulus(e, v, e, v) - expected).abs() < 1.0);
        assert_eq!(combined_modulus(0.0, 0.3, 0.0, 0.3), 0.0);
    }

    #[test]
    fn softer_hardness_ignores_missing() {
        assert_eq!(softer_hardness(3e9, 1e9), 1e9);
        assert_eq!(softer_hardness(0.0, 2e9), 2e9);
        assert_eq!(softer_hardness(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }
}
