//! Frequency dependence of soil electrical properties.
//!
//! A formulation is a pure function from base (DC) layer properties to the
//! per-frequency ρ, ε and μ vectors; it never sees layer ordering. Two
//! variants ship: frequency-constant properties, and the Longmire–Smith
//! universal soil dispersion model.

use lc_core::constants::{permeability, permittivity};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Per-frequency property vectors of one layer. Permittivity and
/// permeability are absolute (ε₀·ε_r, μ₀·μ_r).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties<T> {
    /// Resistivity (Ω·m)
    pub rho: Vec<T>,
    /// Absolute permittivity (F/m)
    pub eps: Vec<T>,
    /// Absolute permeability (H/m)
    pub mu: Vec<T>,
}

/// Capability of producing per-frequency soil properties from base values.
pub trait PropertiesFormulation<T: Scalar>: fmt::Debug + Send + Sync {
    fn evaluate(
        &self,
        frequencies: &[f64],
        base_rho: T,
        base_epsr: T,
        base_mur: T,
    ) -> LayerProperties<T>;

    fn name(&self) -> &'static str;
}

/// Frequency-independent soil: base values copied across the whole axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantProperties;

impl<T: Scalar> PropertiesFormulation<T> for ConstantProperties {
    fn evaluate(
        &self,
        frequencies: &[f64],
        base_rho: T,
        base_epsr: T,
        base_mur: T,
    ) -> LayerProperties<T> {
        let n = frequencies.len();
        LayerProperties {
            rho: vec![base_rho; n],
            eps: vec![base_epsr * T::from_f64(permittivity(1.0)); n],
            mu: vec![base_mur * T::from_f64(permeability(1.0)); n],
        }
    }

    fn name(&self) -> &'static str {
        "constant"
    }
}

/// Longmire–Smith universal soil dispersion (Longmire & Smith, 1975).
///
/// A 13-term Debye expansion scaled by the DC conductivity:
///
/// σ(f) = σ_DC + 2π·ε₀·Σₙ aₙ·Fₙ·(f/Fₙ)²/(1 + (f/Fₙ)²)
/// ε_r(f) = ε_∞ + Σₙ aₙ/(1 + (f/Fₙ)²)
///
/// with Fₙ = F·10^(n−1) and F = (125·σ_DC)^0.8312. The base relative
/// permittivity plays the role of ε_∞; permeability is unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LongmireSmith;

/// Expansion coefficients a₁..a₁₃ of the universal soil model.
const LONGMIRE_SMITH_A: [f64; 13] = [
    3.4e6, 2.74e5, 2.58e4, 3.38e3, 5.26e2, 1.33e2, 2.72e1, 1.25e1, 4.8, 2.17, 0.98, 0.392, 0.173,
];

impl<T: Scalar> PropertiesFormulation<T> for LongmireSmith {
    fn evaluate(
        &self,
        frequencies: &[f64],
        base_rho: T,
        base_epsr: T,
        base_mur: T,
    ) -> LayerProperties<T> {
        let n = frequencies.len();
        if base_rho.is_infinite() {
            // Perfectly insulating layer (air): the expansion degenerates,
            // fall through to constant properties.
            return ConstantProperties.evaluate(frequencies, base_rho, base_epsr, base_mur);
        }
        let sigma_dc = T::one() / base_rho;
        // F = (125·σ_DC)^0.8312 via exp/ln, the scalar kernel has no powf
        let f_scale = (T::from_f64(0.8312) * (T::from_f64(125.0) * sigma_dc).ln()).exp();

        let mut rho = Vec::with_capacity(n);
        let mut eps = Vec::with_capacity(n);
        for &f in frequencies {
            let mut sigma = sigma_dc;
            let mut eps_r = base_epsr;
            for (i, &a) in LONGMIRE_SMITH_A.iter().enumerate() {
                let f_n = f_scale * T::from_f64(10f64.powi(i as i32));
                let ratio_sq = (T::from_f64(f) / f_n).powi(2);
                let debye = ratio_sq / (T::one() + ratio_sq);
                sigma = sigma + T::from_f64(2.0 * PI * permittivity(1.0) * a) * f_n * debye;
                eps_r = eps_r + T::from_f64(a) / (T::one() + ratio_sq);
            }
            rho.push(T::one() / sigma);
            eps.push(eps_r * T::from_f64(permittivity(1.0)));
        }
        LayerProperties {
            rho,
            eps,
            mu: vec![base_mur * T::from_f64(permeability(1.0)); n],
        }
    }

    fn name(&self) -> &'static str {
        "longmire-smith"
    }
}
