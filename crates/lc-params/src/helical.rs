//! Helical lay geometry: pitch, overlength, and the solenoid permeability
//! correction an insulator picks up when it wraps a helically wound layer.

use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Derived geometry of one helical layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayParameters<T> {
    /// Mean diameter of the helix (m)
    pub mean_diameter: T,
    /// Axial length of one full turn (m); zero for a straight layer
    pub pitch_length: T,
    /// Conductor length per unit cable length (≥ 1)
    pub overlength: T,
}

/// Compute the helical lay parameters of a layer spanning
/// `radius_in..radius_ext` with the given lay ratio.
///
/// mean_diameter = r_in + r_ext, pitch = lay_ratio·mean_diameter,
/// overlength = √(1 + (π·mean_diameter/pitch)²); a zero lay ratio means a
/// straight layer with unit overlength.
pub fn lay_parameters<T: Scalar>(radius_in: T, radius_ext: T, lay_ratio: T) -> LayParameters<T> {
    let mean_diameter = radius_in + radius_ext;
    let pitch_length = lay_ratio * mean_diameter;
    let overlength = if pitch_length.value() == 0.0 {
        T::one()
    } else {
        (T::one() + (T::from_f64(PI) * mean_diameter / pitch_length).powi(2)).sqrt()
    };
    LayParameters {
        mean_diameter,
        pitch_length,
        overlength,
    }
}

/// Permeability multiplier for an insulator around a helical conductor
/// layer with `turns_per_meter` turns per unit length.
///
/// μ_r,sol = 1 + 2π²·N²·(r_ins_ext² − r_con_ext²)/ln(r_ins_ext/r_con_ext)
///
/// A straight inner layer (N zero or NaN) contributes no azimuthal flux and
/// the correction is 1.
pub fn solenoid_correction<T: Scalar>(
    turns_per_meter: T,
    radius_ext_con: T,
    radius_ext_ins: T,
) -> T {
    if !(turns_per_meter.value() > 0.0) {
        return T::one();
    }
    T::one()
        + T::from_f64(2.0 * PI * PI)
            * turns_per_meter
            * turns_per_meter
            * (radius_ext_ins * radius_ext_ins - radius_ext_con * radius_ext_con)
            / (radius_ext_ins / radius_ext_con).ln()
}
