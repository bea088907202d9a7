//! Coaxial shunt parameters and the equivalent-property back-solvers used
//! when a layered region is reduced to a homogeneous one.

use lc_core::constants::{EPSILON_0, angular_frequency};
use lc_core::scalar::Scalar;
use std::f64::consts::PI;

/// Capacitance per unit length of a coaxial dielectric (F/m).
///
/// C = 2π·ε₀·ε_r / ln(r_ext/r_in)
pub fn coaxial_capacitance<T: Scalar>(radius_in: T, radius_ext: T, epsilon_r: T) -> T {
    T::from_f64(2.0 * PI * EPSILON_0) * epsilon_r / (radius_ext / radius_in).ln()
}

/// Conductance per unit length of a coaxial dielectric (S/m).
///
/// G = 2π/ρ / ln(r_ext/r_in)
pub fn coaxial_conductance<T: Scalar>(radius_in: T, radius_ext: T, rho: T) -> T {
    T::from_f64(2.0 * PI) / (rho * (radius_ext / radius_in).ln())
}

/// Relative permittivity reproducing a measured coaxial capacitance:
/// ε_r = C·ln(r_ext/r_in)/(2π·ε₀)
pub fn equivalent_epsilon_r<T: Scalar>(capacitance: T, radius_in: T, radius_ext: T) -> T {
    capacitance * (radius_ext / radius_in).ln() / T::from_f64(2.0 * PI * EPSILON_0)
}

/// Resistivity of the homogeneous tube reproducing a measured DC
/// resistance: ρ_eq = R·π·(r_ext² − r_in²)
pub fn equivalent_rho_conductor<T: Scalar>(resistance: T, radius_in: T, radius_ext: T) -> T {
    resistance * T::from_f64(PI) * (radius_ext * radius_ext - radius_in * radius_in)
}

/// Insulation resistivity reproducing a measured coaxial conductance:
/// ρ_eq = 2π/(G·ln(r_ext/r_in))
pub fn equivalent_rho_insulator<T: Scalar>(conductance: T, radius_in: T, radius_ext: T) -> T {
    T::from_f64(2.0 * PI) / (conductance * (radius_ext / radius_in).ln())
}

/// Dielectric loss tangent tan δ = G/(ω·C) at the given frequency.
pub fn loss_tangent<T: Scalar>(conductance: T, capacitance: T, frequency_hz: f64) -> T {
    conductance / (capacitance * T::from_f64(angular_frequency(frequency_hz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn xlpe_coaxial_capacitance() {
        // Scenario: 10→20 mm, ε_r = 2.3
        let c = coaxial_capacitance(0.01, 0.02, 2.3);
        let expected = 2.0 * PI * EPSILON_0 * 2.3 / 2.0f64.ln();
        assert_relative_eq!(c, expected, epsilon = 1e-20);
        assert_relative_eq!(c, 1.846e-10, max_relative = 1e-3);
    }

    #[test]
    fn xlpe_coaxial_conductance() {
        // Scenario: ρ_ins = 1.97e14 Ω·m
        let g = coaxial_conductance(0.01, 0.02, 1.97e14);
        let expected = 2.0 * PI / (1.97e14 * 2.0f64.ln());
        assert_relative_eq!(g, expected, epsilon = 1e-25);
        assert_relative_eq!(g, 4.60e-14, max_relative = 1e-2);
    }

    #[test]
    fn epsilon_r_round_trip() {
        let c = coaxial_capacitance(0.01, 0.02, 2.3);
        assert_relative_eq!(equivalent_epsilon_r(c, 0.01, 0.02), 2.3, epsilon = 1e-12);
    }

    #[test]
    fn rho_insulator_round_trip() {
        let g = coaxial_conductance(0.01, 0.02, 1.97e14);
        assert_relative_eq!(
            equivalent_rho_insulator(g, 0.01, 0.02),
            1.97e14,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rho_conductor_round_trip() {
        use crate::resistance::tubular_resistance;
        let r = tubular_resistance(0.0, 0.005, 1.7241e-8, 0.0, 20.0, 20.0);
        assert_relative_eq!(
            equivalent_rho_conductor(r, 0.0, 0.005),
            1.7241e-8,
            max_relative = 1e-12
        );
    }

    #[test]
    fn loss_tangent_of_good_dielectric_is_tiny() {
        let c = coaxial_capacitance(0.01, 0.02, 2.3);
        let g = coaxial_conductance(0.01, 0.02, 1.97e14);
        let td = loss_tangent(g, c, 50.0);
        assert!(td < 1e-6);
        assert_relative_eq!(td, g / (2.0 * PI * 50.0 * c), epsilon = 1e-20);
    }
}
