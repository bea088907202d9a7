//! Physical constants for per-unit-length cable parameter computations.
//!
//! All values use SI units. Electromagnetic constants follow CODATA 2018
//! recommended values; the copper reference resistivity is the IEC 60287
//! annealed-copper standard at 20 °C.

use std::f64::consts::PI;

// ============================================================================
// Fundamental electromagnetic constants
// ============================================================================

/// Permeability of free space (H/m)
pub const MU_0: f64 = 4.0e-7 * PI;

/// Permittivity of free space (F/m)
/// ε₀ = 1/(μ₀·c₀²)
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Speed of light in vacuum (m/s)
pub const C_0: f64 = 299_792_458.0;

// ============================================================================
// Reference values for cable materials and ratings
// ============================================================================

/// Resistivity of annealed copper at 20 °C (Ω·m)
pub const RHO_COPPER: f64 = 1.724e-8;

/// Reference temperature for material data (°C)
pub const T_REF: f64 = 20.0;

/// Nominal power frequency used for equivalent-property extraction (Hz)
pub const F_NOMINAL: f64 = 50.0;

/// Absolute tolerance for radii continuity and limit-case detection (m)
pub const TOL: f64 = 1e-6;

/// Largest admissible temperature excursion from a material's reference (°C)
pub const DELTA_T_MAX: f64 = 150.0;

/// Upper frequency bound of the quasi-TEM approximation (Hz)
pub const F_QUASI_TEM: f64 = 1e8;

// ============================================================================
// Derived convenience functions
// ============================================================================

/// Compute the angular frequency ω = 2πf for a given frequency (Hz).
#[inline]
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

/// Compute permittivity from relative permittivity: ε = ε_r · ε₀
#[inline]
pub fn permittivity(epsilon_r: f64) -> f64 {
    epsilon_r * EPSILON_0
}

/// Compute permeability from relative permeability: μ = μ_r · μ₀
#[inline]
pub fn permeability(mu_r: f64) -> f64 {
    mu_r * MU_0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn mu_0_is_4pi_times_1e_minus_7() {
        assert_relative_eq!(MU_0, 4.0e-7 * PI, epsilon = 1e-20);
    }

    #[test]
    fn epsilon_0_satisfies_relation_with_mu_0_and_c() {
        // ε₀ = 1/(μ₀·c₀²)
        let computed = 1.0 / (MU_0 * C_0 * C_0);
        assert_relative_eq!(EPSILON_0, computed, max_relative = 1e-6);
    }

    #[test]
    fn copper_resistivity_is_iec_reference() {
        assert_eq!(RHO_COPPER, 1.724e-8);
    }

    #[test]
    fn angular_frequency_at_50hz() {
        assert_relative_eq!(angular_frequency(50.0), 100.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn permittivity_from_relative() {
        assert_relative_eq!(permittivity(1.0), EPSILON_0, epsilon = 1e-25);
        assert_relative_eq!(permittivity(2.3), 2.3 * EPSILON_0, epsilon = 1e-25);
    }

    #[test]
    fn permeability_from_relative() {
        assert_relative_eq!(permeability(1.0), MU_0, epsilon = 1e-20);
        assert_relative_eq!(permeability(0.999994), 0.999994 * MU_0, epsilon = 1e-18);
    }
}
