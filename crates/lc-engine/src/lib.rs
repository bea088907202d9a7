//! Per-frequency assembly of Z(ω) and Y(ω) for multi-cable systems.
//!
//! The engine flattens a [`lc_model::system::LineCableSystem`] into
//! per-conductor rows, assembles the series impedance and shunt admittance
//! matrices at every frequency against a [`lc_earth::model::EarthModel`],
//! Kron-eliminates grounded conductors and returns stacked
//! [`line_parameters::LineParameters`] tensors.

pub mod admittance;
pub mod compute;
pub mod flatten;
pub mod impedance;
pub mod kron;
pub mod line_parameters;
pub mod sequence;

pub use compute::{EarthReturn, FormulationSet, Problem, compute};
pub use flatten::{FlatConductor, flatten};
pub use line_parameters::LineParameters;
pub use sequence::{SequenceParameters, sequence_parameters};
