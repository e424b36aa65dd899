//! Solid blocks making up the stack.

use crate::error::{SystemError, SystemResult};

/// A single rectangular solid layer.
///
/// Dimensions are in metres. A `Geometry` can only be built from a non-empty
/// name and strictly positive, finite dimensions, and is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    name: String,
    length: f64,
    width: f64,
    height: f64,
}

impl Geometry {
    pub fn new(name: impl Into<String>, length: f64, width: f64, height: f64) -> SystemResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(SystemError::InvalidGeometry {
                name,
                reason: "name must not be empty",
            });
        }
        for (value, reason) in [
            (length, "length must be positive and finite"),
            (width, "width must be positive and finite"),
            (height, "height must be positive and finite"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SystemError::InvalidGeometry { name, reason });
            }
        }
        Ok(Self {
            name,
            length,
            width,
            height,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Cross-section facing the neighbouring layers, `length × width` [m²].
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}
