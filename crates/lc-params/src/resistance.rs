//! DC resistance of tubular and strip conductors, and the parallel
//! combination rules used when reducing a layered stack.

use crate::temperature::correction_factor;
use lc_core::scalar::Scalar;
use std::f64::consts::PI;

/// DC resistance per unit length of a tubular conductor (Ω/m).
///
/// R = k(α,T,T₀)·ρ / (π·(r_ext² − r_in²))
///
/// Returns `+Inf` when the cross-section is not positive (r_ext == r_in
/// degenerates to an infinitely thin shell).
pub fn tubular_resistance<T: Scalar>(
    radius_in: T,
    radius_ext: T,
    rho: T,
    alpha: T,
    temperature: T,
    t_ref: T,
) -> T {
    let cross_section = T::from_f64(PI) * (radius_ext * radius_ext - radius_in * radius_in);
    if !(cross_section.value() > 0.0) {
        return T::from_f64(f64::INFINITY);
    }
    correction_factor(alpha, temperature, t_ref) * rho / cross_section
}

/// DC resistance per unit length of a flat strip (Ω/m).
///
/// R = k(α,T,T₀)·ρ / (thickness·width)
///
/// Returns `+Inf` on zero cross-section.
pub fn strip_resistance<T: Scalar>(
    thickness: T,
    width: T,
    rho: T,
    alpha: T,
    temperature: T,
    t_ref: T,
) -> T {
    let cross_section = thickness * width;
    if !(cross_section.value() > 0.0) {
        return T::from_f64(f64::INFINITY);
    }
    correction_factor(alpha, temperature, t_ref) * rho / cross_section
}

/// Parallel (reciprocal-sum) equivalent of two impedance-like quantities:
/// Z_eq = 1/(1/Z₁ + 1/Z₂).
///
/// An infinite operand drops out (an open layer carries no current).
pub fn parallel_equivalent<T: Scalar>(z1: T, z2: T) -> T {
    T::one() / (T::one() / z1 + T::one() / z2)
}

/// Resistance-weighted equivalent temperature coefficient of two parallel
/// layers: α_eq = (α₁·R₂ + α₂·R₁)/(R₁ + R₂).
///
/// The layer with the smaller resistance (carrying more current) dominates.
pub fn weighted_alpha<T: Scalar>(alpha1: T, r1: T, alpha2: T, r2: T) -> T {
    (alpha1 * r2 + alpha2 * r1) / (r1 + r2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lc_core::scalar::Uncertain;
    use proptest::prelude::*;

    #[test]
    fn solid_copper_rod_5mm() {
        // Scenario: ρ = 1.7241e-8 Ω·m, r = 5 mm, at reference temperature.
        let r = tubular_resistance(0.0, 0.005, 1.7241e-8, 0.00393, 20.0, 20.0);
        let expected = 1.7241e-8 / (PI * 0.005 * 0.005);
        assert_relative_eq!(r, expected, epsilon = 1e-12);
        assert_relative_eq!(r, 2.1952e-4, max_relative = 1e-4);
    }

    #[test]
    fn degenerate_shell_is_open() {
        let r = tubular_resistance(0.005, 0.005, 1.7241e-8, 0.0, 20.0, 20.0);
        assert!(r.is_infinite());
    }

    #[test]
    fn strip_matches_hand_value() {
        // 1 mm × 30 mm copper strip
        let r = strip_resistance(0.001, 0.030, 1.7241e-8, 0.0, 20.0, 20.0);
        assert_relative_eq!(r, 1.7241e-8 / 3.0e-5, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_strip_is_open() {
        assert!(strip_resistance(0.001, 0.0, 1.7241e-8, 0.0, 20.0, 20.0).is_infinite());
    }

    #[test]
    fn parallel_of_equal_resistances_halves() {
        assert_relative_eq!(parallel_equivalent(4.0, 4.0), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn parallel_with_open_layer_is_identity() {
        assert_relative_eq!(
            parallel_equivalent(3.0, f64::INFINITY),
            3.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn weighted_alpha_leans_to_lower_resistance() {
        // R₁ << R₂ → α_eq ≈ α₁
        let a = weighted_alpha(0.004, 1.0, 0.001, 1000.0);
        assert_relative_eq!(a, 0.004, max_relative = 1e-2);
    }

    #[test]
    fn resistance_with_uncertain_radius() {
        let r_ext = Uncertain::new(0.005, 1e-5);
        let r = tubular_resistance(
            Uncertain::exact(0.0),
            r_ext,
            Uncertain::exact(1.7241e-8),
            Uncertain::exact(0.0),
            Uncertain::exact(20.0),
            Uncertain::exact(20.0),
        );
        // dR/dr_ext = −2R/r_ext → σ_R = 2·R·σ/r
        let nominal = 1.7241e-8 / (PI * 2.5e-5);
        assert_relative_eq!(r.value(), nominal, epsilon = 1e-10);
        assert_relative_eq!(r.sigma(), 2.0 * nominal * 1e-5 / 0.005, max_relative = 1e-10);
    }

    proptest! {
        #[test]
        fn parallel_equivalent_is_symmetric(a in 1e-6f64..1e6, b in 1e-6f64..1e6) {
            let ab = parallel_equivalent(a, b);
            let ba = parallel_equivalent(b, a);
            prop_assert!((ab - ba).abs() <= 1e-6 * ab.abs());
        }

        #[test]
        fn parallel_equivalent_below_both(a in 1e-6f64..1e6, b in 1e-6f64..1e6) {
            let eq = parallel_equivalent(a, b);
            prop_assert!(eq <= a && eq <= b);
        }
    }
}
