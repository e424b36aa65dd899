use crate::TcrError;

/// Floating point type used throughout system
pub type Real = f64;

/// Resistance of a path with no viable heat flow.
///
/// Positive infinity survives series addition (`INF + x == INF`) and is
/// never confused with NaN or a large finite number.
pub const OPEN_CIRCUIT: Real = Real::INFINITY;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// True when `r` is the open-circuit sentinel.
#[inline]
pub fn is_open(r: Real) -> bool {
    r == OPEN_CIRCUIT
}

/// Resistance `1/(h·A)` of a conductance spread over an area.
///
/// Returns [`OPEN_CIRCUIT`] unless both `h` and `area` are positive.
#[inline]
pub fn resistance_from_conductance(h: Real, area: Real) -> Real {
    if h > 0.0 && area > 0.0 {
        1.0 / (h * area)
    } else {
        OPEN_CIRCUIT
    }
}

/// Parse a user-entered number, accepting a decimal comma.
///
/// Blank text yields `None`; anything else that is not a finite number
/// (including `inf` and `NaN`) is an error.
pub fn parse_user_number(text: &str, what: &str) -> Result<Option<Real>, TcrError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.replace(',', ".").parse::<Real>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(TcrError::Unparsable {
            what: what.to_string(),
            text: text.to_string(),
        }),
    }
}
