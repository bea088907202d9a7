//! Per-frequency shunt admittance entries.
//!
//! In the default formulation each conductor sees only its own insulation:
//! Y_ii = G_i + jω·C_i from the insulator group's equivalent values, and
//! mutual shunt terms between cables are zero.

use crate::flatten::FlatConductor;
use lc_core::constants::angular_frequency;
use lc_core::scalar::Scalar;
use num_complex::Complex;

/// Self shunt admittance of one conductor's insulation (S/m).
pub fn self_admittance<T: Scalar>(
    conductor: &FlatConductor<T>,
    frequency_hz: f64,
) -> Complex<T> {
    Complex::new(
        conductor.shunt_conductance,
        T::from_f64(angular_frequency(frequency_hz)) * conductor.shunt_capacitance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn admittance_scales_linearly_with_frequency() {
        let c = FlatConductor {
            horz: 0.0,
            vert: -1.0,
            radius_in_cond: 0.0,
            radius_ext_cond: 0.01,
            radius_in_ins: 0.01,
            radius_ext_ins: 0.02,
            rho_cond: 1.7241e-8,
            mu_cond: 1.0,
            alpha_cond: 0.00393,
            t0: 20.0,
            resistance_dc: 1e-4,
            gmr: 0.0078,
            rho_ins: 1.97e14,
            eps_ins: 2.3,
            mu_ins: 1.0,
            shunt_capacitance: 1.846e-10,
            shunt_conductance: 4.6e-14,
            tan_delta: 1e-9,
            phase: 1,
            cable_index: 0,
        };
        let y50 = self_admittance(&c, 50.0);
        let y5k = self_admittance(&c, 5000.0);
        assert_relative_eq!(y50.re, 4.6e-14, epsilon = 1e-20);
        assert_relative_eq!(y50.im, 2.0 * PI * 50.0 * 1.846e-10, max_relative = 1e-12);
        assert_relative_eq!(y5k.im / y50.im, 100.0, max_relative = 1e-12);
    }
}
