//! Named library of cable designs with pluggable on-disk formats.

use crate::record::DesignRecord;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_model::design::CableDesign;
use std::collections::BTreeMap;
use std::path::Path;

/// A mapping from unique cable ids to [`CableDesign`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CablesLibrary<T> {
    designs: BTreeMap<String, CableDesign<T>>,
}

impl<T: Scalar> CablesLibrary<T> {
    pub fn new() -> Self {
        Self {
            designs: BTreeMap::new(),
        }
    }

    /// Store a design under its cable id; duplicates are rejected.
    pub fn add(&mut self, design: CableDesign<T>) -> LcResult<()> {
        if self.designs.contains_key(&design.cable_id) {
            return Err(LcError::Duplicate {
                key: design.cable_id.clone(),
            });
        }
        self.designs.insert(design.cable_id.clone(), design);
        Ok(())
    }

    /// Look up a design by cable id.
    pub fn get(&self, cable_id: &str) -> Option<&CableDesign<T>> {
        self.designs.get(cable_id)
    }

    /// Remove a design; missing ids are rejected.
    pub fn remove(&mut self, cable_id: &str) -> LcResult<CableDesign<T>> {
        self.designs.remove(cable_id).ok_or_else(|| LcError::NotFound {
            key: cable_id.into(),
        })
    }

    /// Iterate over (cable_id, design) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CableDesign<T>)> {
        self.designs.iter()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Write the library with the default JSON text format.
    pub fn save(&self, path: impl AsRef<Path>) -> LcResult<()> {
        self.save_with(path, &JsonFormat)
    }

    /// Read a library with the default JSON text format. The loader sniffs
    /// the content rather than trusting the file extension.
    pub fn load(path: impl AsRef<Path>) -> LcResult<Self> {
        Self::load_with(path, &JsonFormat)
    }

    /// Write the library with an explicit format.
    pub fn save_with(&self, path: impl AsRef<Path>, format: &dyn LibraryFormat<T>) -> LcResult<()> {
        let bytes = format.to_bytes(self)?;
        std::fs::write(path, bytes).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })
    }

    /// Read a library with an explicit format.
    pub fn load_with(path: impl AsRef<Path>, format: &dyn LibraryFormat<T>) -> LcResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })?;
        format.from_bytes(&bytes)
    }
}

/// An on-disk encoding of a cables library. The JSON text format is the
/// built-in; a lossless binary format can implement this trait.
pub trait LibraryFormat<T: Scalar> {
    fn to_bytes(&self, library: &CablesLibrary<T>) -> LcResult<Vec<u8>>;
    fn from_bytes(&self, bytes: &[u8]) -> LcResult<CablesLibrary<T>>;
}

/// The self-describing JSON text format: cable_id → design record, layer
/// records carrying constructor parameters only.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl<T: Scalar> LibraryFormat<T> for JsonFormat {
    fn to_bytes(&self, library: &CablesLibrary<T>) -> LcResult<Vec<u8>> {
        let records: BTreeMap<&String, DesignRecord<T>> = library
            .designs
            .iter()
            .map(|(id, design)| (id, DesignRecord::from(design)))
            .collect();
        serde_json::to_vec_pretty(&records).map_err(|e| LcError::Io {
            reason: e.to_string(),
        })
    }

    fn from_bytes(&self, bytes: &[u8]) -> LcResult<CablesLibrary<T>> {
        let records: BTreeMap<String, DesignRecord<T>> =
            serde_json::from_slice(bytes).map_err(|e| LcError::Io {
                reason: format!("not a cables library: {e}"),
            })?;
        let mut library = CablesLibrary::new();
        for (id, record) in records {
            let design = record.rebuild()?;
            if design.cable_id != id {
                return Err(LcError::Io {
                    reason: format!(
                        "design stored under '{id}' carries cable_id '{}'",
                        design.cable_id
                    ),
                });
            }
            library.add(design)?;
        }
        Ok(library)
    }
}
