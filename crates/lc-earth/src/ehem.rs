//! Equivalent homogeneous earth model (EHEM) reduction.
//!
//! Earth-return formulations that assume a uniform half-space consume one
//! set of per-frequency ground properties; an EHEM formulation reduces the
//! layered model to that set.

use crate::formulation::LayerProperties;
use crate::model::{EarthLayer, EarthModel};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability of reducing the earth-layer stack to one effective property
/// set per frequency.
pub trait EhemFormulation<T: Scalar>: fmt::Debug + Send + Sync {
    fn reduce(&self, model: &EarthModel<T>) -> LcResult<LayerProperties<T>>;

    fn name(&self) -> &'static str;
}

/// Take the properties of one designated earth layer as the homogeneous
/// equivalent. Index 0 is the topmost earth layer; −1 designates the
/// bottom layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnforceLayer {
    pub index: isize,
}

impl EnforceLayer {
    pub fn new(index: isize) -> Self {
        Self { index }
    }

    /// The bottom earth layer.
    pub fn bottom() -> Self {
        Self { index: -1 }
    }

    fn pick<'a, T: Scalar>(&self, layers: &'a [EarthLayer<T>]) -> LcResult<&'a EarthLayer<T>> {
        let n = layers.len() as isize;
        let idx = if self.index < 0 {
            n + self.index
        } else {
            self.index
        };
        if idx < 0 || idx >= n {
            return Err(LcError::input(format!(
                "EHEM layer index {} out of range for {} earth layers",
                self.index, n
            )));
        }
        Ok(&layers[idx as usize])
    }
}

impl<T: Scalar> EhemFormulation<T> for EnforceLayer {
    fn reduce(&self, model: &EarthModel<T>) -> LcResult<LayerProperties<T>> {
        let layer = self.pick(model.earth_layers())?;
        Ok(LayerProperties {
            rho: layer.rho.clone(),
            eps: layer.eps.clone(),
            mu: layer.mu.clone(),
        })
    }

    fn name(&self) -> &'static str {
        "enforce-layer"
    }
}
