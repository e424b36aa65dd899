//! Error types for interface parameter resolution.

use tcr_system::MaterialField;
use thiserror::Error;

/// Why an interface's effective parameters are unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Geometry '{geometry}': {field} = '{text}' is not a number")]
    Unparsable {
        geometry: String,
        field: MaterialField,
        text: String,
    },
}

pub type ParamResult<T> = Result<T, ParamError>;
