//! Cable-design library persistence.

pub mod library;
pub mod record;

pub use library::{CablesLibrary, JsonFormat, LibraryFormat};
pub use record::{ComponentRecord, ConductorLayerRecord, DesignRecord, InsulatorLayerRecord};
