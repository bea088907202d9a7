//! Material records and the named materials library.

pub mod library;
pub mod material;

pub use library::MaterialsLibrary;
pub use material::Material;
