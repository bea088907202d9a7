//! Persisted shape of cable designs.
//!
//! Records hold constructor parameters only — radii as entered, wire
//! counts, lay ratios, nested materials — and never derived quantities.
//! Loading rebuilds every part through its constructor and every group
//! through its `add` path, so the reconstructed design recomputes all
//! derived values from the same code that produced the originals.

use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_materials::Material;
use lc_model::component::CableComponent;
use lc_model::conductor_group::ConductorGroup;
use lc_model::design::{CableDesign, NominalData};
use lc_model::dimension::Dimension;
use lc_model::insulator_group::InsulatorGroup;
use lc_model::parts::{ConductorLayer, InsulatorLayer, Strip, Tubular, WireArray};
use serde::{Deserialize, Serialize};

/// One conductor layer, tagged by part type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub enum ConductorLayerRecord<T> {
    WireArray {
        radius_in: T,
        radius_wire: T,
        num_wires: u32,
        lay_ratio: T,
        lay_direction: i8,
        material: Material<T>,
        temperature: T,
    },
    Strip {
        radius_in: T,
        thickness: T,
        width: T,
        lay_ratio: T,
        lay_direction: i8,
        material: Material<T>,
        temperature: T,
    },
    Tubular {
        radius_in: T,
        radius_ext: T,
        material: Material<T>,
        temperature: T,
    },
}

/// One insulator layer, tagged by part type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub enum InsulatorLayerRecord<T> {
    Semicon {
        radius_in: T,
        radius_ext: T,
        material: Material<T>,
        temperature: T,
    },
    Insulator {
        radius_in: T,
        radius_ext: T,
        material: Material<T>,
        temperature: T,
    },
}

/// One component: ordered conductor and insulator layer records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub struct ComponentRecord<T> {
    pub id: String,
    pub conductor_group: Vec<ConductorLayerRecord<T>>,
    pub insulator_group: Vec<InsulatorLayerRecord<T>>,
}

/// One whole design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub struct DesignRecord<T> {
    pub cable_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_data: Option<NominalData>,
    pub components: Vec<ComponentRecord<T>>,
}

impl<T: Scalar> From<&ConductorLayer<T>> for ConductorLayerRecord<T> {
    fn from(layer: &ConductorLayer<T>) -> Self {
        match layer {
            ConductorLayer::WireArray(w) => Self::WireArray {
                radius_in: w.radius_in,
                radius_wire: w.radius_wire,
                num_wires: w.num_wires,
                lay_ratio: w.lay_ratio,
                lay_direction: w.lay_direction,
                material: w.material,
                temperature: w.temperature,
            },
            ConductorLayer::Strip(s) => Self::Strip {
                radius_in: s.radius_in,
                thickness: s.thickness,
                width: s.width,
                lay_ratio: s.lay_ratio,
                lay_direction: s.lay_direction,
                material: s.material,
                temperature: s.temperature,
            },
            ConductorLayer::Tubular(t) => Self::Tubular {
                radius_in: t.radius_in,
                radius_ext: t.radius_ext,
                material: t.material,
                temperature: t.temperature,
            },
        }
    }
}

impl<T: Scalar> ConductorLayerRecord<T> {
    fn rebuild(&self) -> LcResult<ConductorLayer<T>> {
        Ok(match *self {
            Self::WireArray {
                radius_in,
                radius_wire,
                num_wires,
                lay_ratio,
                lay_direction,
                material,
                temperature,
            } => ConductorLayer::WireArray(
                WireArray::new(
                    radius_in,
                    Dimension::Radius(radius_wire),
                    num_wires,
                    lay_ratio,
                    material,
                    temperature,
                )?
                .with_lay_direction(lay_direction),
            ),
            Self::Strip {
                radius_in,
                thickness,
                width,
                lay_ratio,
                lay_direction,
                material,
                temperature,
            } => ConductorLayer::Strip(
                Strip::new(
                    radius_in,
                    Dimension::Thickness(thickness),
                    width,
                    lay_ratio,
                    material,
                    temperature,
                )?
                .with_lay_direction(lay_direction),
            ),
            Self::Tubular {
                radius_in,
                radius_ext,
                material,
                temperature,
            } => ConductorLayer::Tubular(Tubular::new(
                radius_in,
                Dimension::Radius(radius_ext),
                material,
                temperature,
            )?),
        })
    }
}

impl<T: Scalar> From<&InsulatorLayer<T>> for InsulatorLayerRecord<T> {
    fn from(layer: &InsulatorLayer<T>) -> Self {
        let d = layer.inner();
        match layer {
            InsulatorLayer::Semicon(_) => Self::Semicon {
                radius_in: d.radius_in,
                radius_ext: d.radius_ext,
                material: d.material,
                temperature: d.temperature,
            },
            InsulatorLayer::Insulator(_) => Self::Insulator {
                radius_in: d.radius_in,
                radius_ext: d.radius_ext,
                material: d.material,
                temperature: d.temperature,
            },
        }
    }
}

impl<T: Scalar> InsulatorLayerRecord<T> {
    fn rebuild(&self) -> LcResult<InsulatorLayer<T>> {
        match *self {
            Self::Semicon {
                radius_in,
                radius_ext,
                material,
                temperature,
            } => InsulatorLayer::semicon(
                radius_in,
                Dimension::Radius(radius_ext),
                material,
                temperature,
            ),
            Self::Insulator {
                radius_in,
                radius_ext,
                material,
                temperature,
            } => InsulatorLayer::insulator(
                radius_in,
                Dimension::Radius(radius_ext),
                material,
                temperature,
            ),
        }
    }
}

impl<T: Scalar> From<&CableDesign<T>> for DesignRecord<T> {
    fn from(design: &CableDesign<T>) -> Self {
        Self {
            cable_id: design.cable_id.clone(),
            nominal_data: design.nominal_data.clone(),
            components: design
                .components()
                .iter()
                .map(|c| ComponentRecord {
                    id: c.id.clone(),
                    conductor_group: c.conductor_group.layers().iter().map(Into::into).collect(),
                    insulator_group: c.insulator_group.layers().iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

impl<T: Scalar> DesignRecord<T> {
    /// Reconstruct the design, recomputing every derived quantity.
    pub fn rebuild(&self) -> LcResult<CableDesign<T>> {
        let mut components = self.components.iter().map(|record| {
            let mut conductor_layers = record.conductor_group.iter();
            let first = conductor_layers.next().ok_or_else(|| {
                LcError::value("conductor_group", format!("component '{}' has no layers", record.id))
            })?;
            let mut cg = ConductorGroup::new(first.rebuild()?);
            for layer in conductor_layers {
                cg.add(layer.rebuild()?)?;
            }

            let mut insulator_layers = record.insulator_group.iter();
            let first = insulator_layers.next().ok_or_else(|| {
                LcError::value("insulator_group", format!("component '{}' has no layers", record.id))
            })?;
            let mut ig = InsulatorGroup::new(first.rebuild()?);
            for layer in insulator_layers {
                ig.add(layer.rebuild()?)?;
            }

            CableComponent::new(record.id.clone(), cg, ig)
        });

        let first = components.next().ok_or_else(|| {
            LcError::value("components", format!("design '{}' is empty", self.cable_id))
        })??;
        let mut design = CableDesign::new(&self.cable_id, first, self.nominal_data.clone())?;
        for component in components {
            design.add(component?);
        }
        Ok(design)
    }
}
