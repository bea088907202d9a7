//! Flexible size inputs for cable layers.
//!
//! Datasheets express a layer's outer size interchangeably as an absolute
//! radius, a diameter, or a thickness on top of the previous layer; all
//! three resolve to an outer radius against the current stack radius.

use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};

/// A radial size given as one of the three datasheet conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dimension<T> {
    /// Absolute radius (m)
    Radius(T),
    /// Full diameter (m)
    Diameter(T),
    /// Radial thickness over the previous outer radius (m)
    Thickness(T),
}

impl<T: Scalar> Dimension<T> {
    /// Resolve to an outer radius, measuring thickness from `prev_radius`.
    pub fn resolve(self, prev_radius: T) -> T {
        match self {
            Dimension::Radius(r) => r,
            Dimension::Diameter(d) => d / T::from_f64(2.0),
            Dimension::Thickness(t) => prev_radius + t,
        }
    }

    /// Resolve the radius of a single wire, which has no "previous" layer
    /// to measure a thickness from.
    pub fn resolve_wire(self) -> LcResult<T> {
        match self {
            Dimension::Radius(r) => Ok(r),
            Dimension::Diameter(d) => Ok(d / T::from_f64(2.0)),
            Dimension::Thickness(_) => Err(LcError::value(
                "wire_size",
                "a wire is sized by radius or diameter, not thickness",
            )),
        }
    }
}
