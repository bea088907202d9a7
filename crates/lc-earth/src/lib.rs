//! Layered earth models for earth-return impedance computation.

pub mod ehem;
pub mod formulation;
pub mod model;

pub use ehem::{EhemFormulation, EnforceLayer};
pub use formulation::{ConstantProperties, LayerProperties, LongmireSmith, PropertiesFormulation};
pub use model::{EarthLayer, EarthModel};
