//! Layered cable data model.
//!
//! Parts are added innermost to outermost into groups, groups pair into
//! components, components stack into designs, and designs are placed in the
//! cross-section plane to form a [`system::LineCableSystem`]:
//! - [`parts`]: wire arrays, strips, tubes, semiconductive and insulating
//!   shells behind tagged layer variants
//! - [`conductor_group`] / [`insulator_group`]: the recursive reduction to
//!   equivalent R/GMR/α and C/G
//! - [`component`]: effective homogeneous materials per conductor/insulator
//!   pair
//! - [`design`] / [`system`]: whole cables and their placement

pub mod component;
pub mod conductor_group;
pub mod design;
pub mod dimension;
pub mod insulator_group;
pub mod parts;
pub mod system;

pub use component::CableComponent;
pub use conductor_group::ConductorGroup;
pub use design::{CableDesign, NominalData};
pub use dimension::Dimension;
pub use insulator_group::InsulatorGroup;
pub use parts::{ConductorLayer, Dielectric, InsulatorLayer, Strip, Tubular, WireArray};
pub use system::{CablePosition, LineCableSystem};
