//! Error types for layout configuration.

use std::fmt;
use thiserror::Error;

/// Grid axis a spacing value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Gap between columns
    Column,
    /// Gap between rows
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Row => f.write_str("row"),
        }
    }
}

/// Errors raised when configuring a wrap layout.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Spacing was negative, NaN or infinite.
    #[error("invalid {axis} spacing {value}: must be finite and non-negative")]
    InvalidSpacing {
        /// Which spacing was rejected
        axis: Axis,
        /// The rejected value
        value: f32,
    },
}

/// Check a spacing value before it reaches the packing arithmetic.
pub(crate) fn validate_spacing(axis: Axis, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidSpacing { axis, value })
    }
}
