//! Closed-form per-unit-length base parameters for layered power cables.
//!
//! Every function is generic over [`lc_core::Scalar`], so geometry and
//! material tolerances propagate to every derived quantity:
//! - DC resistance of tubes and strips, parallel reduction rules
//! - External inductance, wire-array and tubular GMR, layered combination
//! - Geometric mean distance between sub-element sets
//! - Helical lay geometry and the solenoid permeability correction
//! - Coaxial capacitance/conductance and equivalent-property back-solvers
//! - The trifoil solid-bonding loop impedance

pub mod gmd;
pub mod helical;
pub mod inductance;
pub mod resistance;
pub mod shunt;
pub mod temperature;
pub mod trifoil;
