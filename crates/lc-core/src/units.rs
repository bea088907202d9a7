//! Unit conversion utilities for cable quantities.
//!
//! Geometry arrives from datasheets in millimeters and nameplate
//! parameters in per-kilometer units; the kernels work in SI base units
//! throughout.

use std::f64::consts::PI;

// ============================================================================
// Geometry
// ============================================================================

/// Convert millimeters to meters.
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    mm * 1e-3
}

/// Convert meters to millimeters.
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    m * 1e3
}

/// Convert square millimeters to square meters.
#[inline]
pub fn mm2_to_m2(mm2: f64) -> f64 {
    mm2 * 1e-6
}

/// Convert square meters to square millimeters.
#[inline]
pub fn m2_to_mm2(m2: f64) -> f64 {
    m2 * 1e6
}

// ============================================================================
// Per-unit-length parameters (SI ↔ nameplate units)
// ============================================================================

/// Convert a resistance from Ω/m to Ω/km.
#[inline]
pub fn ohm_per_m_to_ohm_per_km(r: f64) -> f64 {
    r * 1e3
}

/// Convert an inductance from H/m to mH/km.
#[inline]
pub fn h_per_m_to_mh_per_km(l: f64) -> f64 {
    l * 1e6
}

/// Convert a capacitance from F/m to μF/km.
#[inline]
pub fn f_per_m_to_uf_per_km(c: f64) -> f64 {
    c * 1e9
}

/// Convert a conductance from S/m to S/km.
#[inline]
pub fn s_per_m_to_s_per_km(g: f64) -> f64 {
    g * 1e3
}

// ============================================================================
// Angles
// ============================================================================

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn geometry_round_trips() {
        assert_relative_eq!(m_to_mm(mm_to_m(23.5)), 23.5, epsilon = 1e-12);
        assert_relative_eq!(m2_to_mm2(mm2_to_m2(1000.0)), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn nameplate_resistance() {
        // 2.195e-4 Ω/m is 0.2195 Ω/km
        assert_relative_eq!(ohm_per_m_to_ohm_per_km(2.195e-4), 0.2195, epsilon = 1e-12);
    }

    #[test]
    fn nameplate_inductance_and_capacitance() {
        assert_relative_eq!(h_per_m_to_mh_per_km(3.6e-7), 0.36, epsilon = 1e-12);
        assert_relative_eq!(f_per_m_to_uf_per_km(1.846e-10), 0.1846, epsilon = 1e-12);
    }

    #[test]
    fn right_angle_is_half_pi() {
        assert_relative_eq!(deg_to_rad(90.0), PI / 2.0, epsilon = 1e-15);
        assert_relative_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-12);
    }
}
