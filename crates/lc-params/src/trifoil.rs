//! Self/mutual impedance of three identical single-core cables in trifoil
//! arrangement, with the loop reduction for solidly bonded screens.
//!
//! The earth return is the uniform low-frequency term with equivalent depth
//! D_E = 659·√(ρ_e/f) and resistance R'_E = ω·μ₀/8; the per-conductor
//! impedances combine into the positive-sequence loop impedance
//! Z₁ = (Z_a − Z_x) − (Z_m − Z_x)²/(Z_s − Z_x).

use crate::inductance::tubular_gmr;
use crate::resistance::tubular_resistance;
use lc_core::constants::{MU_0, angular_frequency};
use lc_core::error::LcResult;
use lc_core::scalar::Scalar;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Equivalent earth-return depth D_E = 659·√(ρ_e/f) (m).
pub fn earth_return_depth<T: Scalar>(rho_earth: T, frequency_hz: f64) -> T {
    T::from_f64(659.0) * (rho_earth / T::from_f64(frequency_hz)).sqrt()
}

/// Earth-return resistance R'_E = ω·μ₀/8 (Ω/m).
#[inline]
pub fn earth_return_resistance(frequency_hz: f64) -> f64 {
    angular_frequency(frequency_hz) * MU_0 / 8.0
}

/// Geometry and materials of one cable of a trifoil group: a tubular core
/// conductor and a tubular metallic screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrifoilCable<T> {
    /// Core inner radius (m), zero for a solid core
    pub radius_in_core: T,
    /// Core outer radius (m)
    pub radius_ext_core: T,
    /// Core resistivity (Ω·m)
    pub rho_core: T,
    /// Core relative permeability
    pub mu_core: T,
    /// Screen inner radius (m)
    pub radius_in_screen: T,
    /// Screen outer radius (m)
    pub radius_ext_screen: T,
    /// Screen resistivity (Ω·m)
    pub rho_screen: T,
    /// Screen relative permeability
    pub mu_screen: T,
}

impl<T: Scalar> TrifoilCable<T> {
    /// Positive-sequence loop impedance per unit length (Ω/m) for solidly
    /// bonded screens, cables spaced `spacing` apart over earth of
    /// resistivity `rho_earth`.
    pub fn solid_bonding_impedance(
        &self,
        spacing: T,
        rho_earth: T,
        frequency_hz: f64,
    ) -> LcResult<Complex<T>> {
        let omega_mu = angular_frequency(frequency_hz) * MU_0 / (2.0 * PI);
        let reactance = |log_ratio: T| T::from_f64(omega_mu) * log_ratio;

        let d_e = earth_return_depth(rho_earth, frequency_hz);
        let r_e = T::from_f64(earth_return_resistance(frequency_hz));

        let r_core = tubular_resistance(
            self.radius_in_core,
            self.radius_ext_core,
            self.rho_core,
            T::zero(),
            T::zero(),
            T::zero(),
        );
        let r_screen = tubular_resistance(
            self.radius_in_screen,
            self.radius_ext_screen,
            self.rho_screen,
            T::zero(),
            T::zero(),
            T::zero(),
        );
        let gmr_core = tubular_gmr(self.radius_ext_core, self.radius_in_core, self.mu_core)?;
        let gmr_screen = tubular_gmr(self.radius_ext_screen, self.radius_in_screen, self.mu_screen)?;

        let z_a = Complex::new(r_e + r_core, reactance((d_e / gmr_core).ln()));
        let z_s = Complex::new(r_e + r_screen, reactance((d_e / gmr_screen).ln()));
        let z_m = Complex::new(r_e, reactance((d_e / gmr_screen).ln()));
        let z_x = Complex::new(r_e, reactance((d_e / spacing).ln()));

        let core_loop = z_a - z_x;
        let coupling = z_m - z_x;
        let screen_loop = z_s - z_x;
        Ok(core_loop - coupling * coupling / screen_loop)
    }

    /// Series inductance per unit length L = Im(Z₁)/ω (H/m) for solid
    /// bonding.
    pub fn solid_bonding_inductance(
        &self,
        spacing: T,
        rho_earth: T,
        frequency_hz: f64,
    ) -> LcResult<T> {
        let z1 = self.solid_bonding_impedance(spacing, rho_earth, frequency_hz)?;
        Ok(z1.im / T::from_f64(angular_frequency(frequency_hz)))
    }
}
