//! Named library of materials with deterministic JSON persistence.

use crate::material::Material;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A mapping from unique material names to [`Material`] records.
///
/// Backed by an ordered map so that serialization output is deterministic
/// regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub struct MaterialsLibrary<T> {
    materials: BTreeMap<String, Material<T>>,
}

impl<T: Scalar> MaterialsLibrary<T> {
    /// Create an empty library.
    pub fn new() -> Self {
        Self {
            materials: BTreeMap::new(),
        }
    }

    /// Create a library seeded with the stock materials used in cable
    /// datasheets: air, pec, copper, aluminum, xlpe, pe, semicon1,
    /// semicon2 and polyacrylate.
    pub fn with_defaults() -> Self {
        let f = T::from_f64;
        let m = |rho: f64, eps_r: f64, mu_r: f64, alpha: f64| Material {
            rho: f(rho),
            eps_r: f(eps_r),
            mu_r: f(mu_r),
            t0: f(20.0),
            alpha: f(alpha),
        };
        let mut lib = Self::new();
        // Seeding cannot collide, unwraps are infallible here.
        lib.add("air", m(f64::INFINITY, 1.0, 1.0, 0.0)).unwrap();
        lib.add("pec", m(1e-100, 1.0, 1.0, 0.0)).unwrap();
        lib.add("copper", m(1.7241e-8, 1.0, 0.999994, 0.00393)).unwrap();
        lib.add("aluminum", m(2.8264e-8, 1.0, 1.000022, 0.00429)).unwrap();
        lib.add("xlpe", m(1.97e14, 2.3, 1.0, 0.0)).unwrap();
        lib.add("pe", m(1.97e14, 2.3, 1.0, 0.0)).unwrap();
        lib.add("semicon1", m(1000.0, 1000.0, 1.0, 0.0)).unwrap();
        lib.add("semicon2", m(500.0, 1000.0, 1.0, 0.0)).unwrap();
        lib.add("polyacrylate", m(5.3e3, 32.3, 1.0, 0.0)).unwrap();
        lib
    }

    /// Add a material under a new name; duplicate names are rejected.
    pub fn add(&mut self, name: impl Into<String>, material: Material<T>) -> LcResult<()> {
        let name = name.into();
        if self.materials.contains_key(&name) {
            return Err(LcError::Duplicate { key: name });
        }
        self.materials.insert(name, material);
        Ok(())
    }

    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material<T>> {
        self.materials.get(name)
    }

    /// Remove a material; missing names are rejected.
    pub fn remove(&mut self, name: &str) -> LcResult<Material<T>> {
        self.materials
            .remove(name)
            .ok_or_else(|| LcError::NotFound { key: name.into() })
    }

    /// Iterate over (name, material) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Material<T>)> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Serialize the library to pretty-printed JSON.
    pub fn to_json(&self) -> LcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })
    }

    /// Parse a library from JSON text.
    pub fn from_json(text: &str) -> LcResult<Self> {
        serde_json::from_str(text).map_err(|e| LcError::Io {
            reason: format!("not a materials library: {e}"),
        })
    }

    /// Write the library to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> LcResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })
    }

    /// Load a library from a file, sniffing content rather than trusting
    /// the extension.
    pub fn load(path: impl AsRef<Path>) -> LcResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })?;
        Self::from_json(&text)
    }
}
