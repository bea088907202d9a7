//! Per-frequency series impedance entries.
//!
//! Self and mutual impedances use the uniform earth-return term with
//! equivalent depth D_E = 659·√(ρ_e/f) and resistance R'_E = ω·μ₀/8, the
//! same closed form the trifoil reduction is built from. Mutual entries
//! between conductors of one cable (concentric) use the GMR of the outer
//! conductor in place of a center distance.

use crate::flatten::FlatConductor;
use lc_core::constants::{MU_0, angular_frequency};
use lc_core::scalar::Scalar;
use lc_params::temperature::correction_factor;
use lc_params::trifoil::{earth_return_depth, earth_return_resistance};
use num_complex::Complex;
use std::f64::consts::PI;

/// Self impedance of one conductor over earth (Ω/m).
///
/// Z_ii = R_dc·k(α,T,T₀) + R'_E + jω·μ₀/(2π)·ln(D_E/GMR)
pub fn self_impedance<T: Scalar>(
    conductor: &FlatConductor<T>,
    temperature: T,
    rho_earth: T,
    frequency_hz: f64,
) -> Complex<T> {
    let r_ac = conductor.resistance_dc
        * correction_factor(conductor.alpha_cond, temperature, conductor.t0);
    let d_e = earth_return_depth(rho_earth, frequency_hz);
    let r_e = T::from_f64(earth_return_resistance(frequency_hz));
    let reactance = T::from_f64(angular_frequency(frequency_hz) * MU_0 / (2.0 * PI))
        * (d_e / conductor.gmr).ln();
    Complex::new(r_ac + r_e, reactance)
}

/// Mutual impedance between two parallel conductors over earth (Ω/m).
///
/// Z_ij = R'_E + jω·μ₀/(2π)·ln(D_E/d_ij)
///
/// d_ij is the GMR of the outer conductor for a concentric pair, the
/// center distance when both conductors share a half-space, and the image
/// distance √(Δx² + (|y_i|+|y_j|)²) across the air/earth interface.
pub fn mutual_impedance<T: Scalar>(
    a: &FlatConductor<T>,
    b: &FlatConductor<T>,
    rho_earth: T,
    frequency_hz: f64,
) -> Complex<T> {
    let d = coupling_distance(a, b);
    let d_e = earth_return_depth(rho_earth, frequency_hz);
    let r_e = T::from_f64(earth_return_resistance(frequency_hz));
    let reactance =
        T::from_f64(angular_frequency(frequency_hz) * MU_0 / (2.0 * PI)) * (d_e / d).ln();
    Complex::new(r_e, reactance)
}

/// Effective coupling distance between two conductors.
pub fn coupling_distance<T: Scalar>(a: &FlatConductor<T>, b: &FlatConductor<T>) -> T {
    if a.cable_index == b.cable_index {
        // Concentric: the outer conductor's GMR governs the shared flux.
        return if a.radius_ext_cond.value() > b.radius_ext_cond.value() {
            a.gmr
        } else {
            b.gmr
        };
    }
    let dx = a.horz - b.horz;
    let same_side = a.vert.value().signum() == b.vert.value().signum();
    if same_side {
        dx.hypot(a.vert - b.vert)
    } else {
        dx.hypot(a.vert.abs() + b.vert.abs())
    }
}
