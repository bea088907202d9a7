//! Cable positions and the system-level container the engine consumes.

use crate::design::CableDesign;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;

/// A cable design placed in the 2D cross-section plane.
///
/// Coordinates follow the usual convention: y < 0 buried, y > 0 aerial.
/// `phase_map` assigns one entry per component, in radial order: 0 marks a
/// grounded conductor to be eliminated, p > 0 a phase index.
#[derive(Debug, Clone, PartialEq)]
pub struct CablePosition<T> {
    pub design: CableDesign<T>,
    pub horz: T,
    pub vert: T,
    pub phase_map: Vec<usize>,
}

impl<T: Scalar> CablePosition<T> {
    pub fn new(design: CableDesign<T>, horz: T, vert: T, phase_map: Vec<usize>) -> LcResult<Self> {
        if phase_map.len() != design.len() {
            return Err(LcError::input(format!(
                "cable '{}': phase map has {} entries for {} components",
                design.cable_id,
                phase_map.len(),
                design.len()
            )));
        }
        Ok(Self {
            design,
            horz,
            vert,
            phase_map,
        })
    }
}

/// A set of placed cables forming one transmission line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCableSystem<T> {
    pub system_id: String,
    /// Route length (m); per-unit-length results are scaled by the caller
    pub line_length: T,
    positions: Vec<CablePosition<T>>,
}

impl<T: Scalar> LineCableSystem<T> {
    pub fn new(system_id: impl Into<String>, line_length: T, first: CablePosition<T>) -> Self {
        Self {
            system_id: system_id.into(),
            line_length,
            positions: vec![first],
        }
    }

    /// Place another cable.
    pub fn add_position(
        &mut self,
        design: CableDesign<T>,
        horz: T,
        vert: T,
        phase_map: Vec<usize>,
    ) -> LcResult<()> {
        self.positions
            .push(CablePosition::new(design, horz, vert, phase_map)?);
        Ok(())
    }

    /// Placed cables in add order.
    pub fn positions(&self) -> &[CablePosition<T>] {
        &self.positions
    }

    pub fn num_cables(&self) -> usize {
        self.positions.len()
    }

    /// Highest phase index in use; grounded conductors do not count.
    pub fn num_phases(&self) -> usize {
        self.positions
            .iter()
            .flat_map(|p| p.phase_map.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Total number of conductors before any reduction.
    pub fn num_conductors(&self) -> usize {
        self.positions.iter().map(|p| p.design.len()).sum()
    }
}
