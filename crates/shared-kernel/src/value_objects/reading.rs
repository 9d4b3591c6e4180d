// crates/shared-kernel/src/value_objects/reading.rs
use serde::{Deserialize, Serialize};

/// One row of the input grid. Empty cells are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub value: Option<f64>,
}

impl Reading {
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self { x: Some(x), y: Some(y), value: Some(value) }
    }

    /// Coordinates, if both are present and finite.
    pub fn position(&self) -> Option<[f64; 2]> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some([x, y]),
            _ => None,
        }
    }

    /// Value usable in a maximum: present and not NaN.
    pub fn ffmc(&self) -> Option<f64> {
        self.value.filter(|v| !v.is_nan())
    }
}
