//! Material records for cable construction.

use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Electrical and thermal properties of one material.
///
/// A value object: equality is structural. Infinite resistivity is the
/// representation of a perfect insulator (air).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Scalar", deserialize = "T: Scalar"))]
pub struct Material<T> {
    /// Resistivity (Ω·m); may be +Inf
    #[serde(with = "lc_core::scalar::serde_scalar")]
    pub rho: T,
    /// Relative permittivity
    pub eps_r: T,
    /// Relative permeability
    pub mu_r: T,
    /// Reference temperature for `alpha` (°C)
    pub t0: T,
    /// Linear resistivity temperature coefficient (1/°C)
    pub alpha: T,
}

impl<T: Scalar> Material<T> {
    /// Create a material, validating that ρ, ε_r and μ_r are non-negative.
    pub fn new(rho: T, eps_r: T, mu_r: T, t0: T, alpha: T) -> LcResult<Self> {
        if rho.value() < 0.0 {
            return Err(LcError::value("rho", format!("must be ≥ 0, got {rho}")));
        }
        if eps_r.value() < 0.0 {
            return Err(LcError::value("eps_r", format!("must be ≥ 0, got {eps_r}")));
        }
        if mu_r.value() < 0.0 {
            return Err(LcError::value("mu_r", format!("must be ≥ 0, got {mu_r}")));
        }
        Ok(Self {
            rho,
            eps_r,
            mu_r,
            t0,
            alpha,
        })
    }
}

impl<T: Scalar> fmt::Display for Material<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ρ={} Ω·m, ε_r={}, μ_r={}, T₀={} °C, α={} 1/°C",
            self.rho, self.eps_r, self.mu_r, self.t0, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_with_infinite_resistivity_is_valid() {
        let air = Material::new(f64::INFINITY, 1.0, 1.0, 20.0, 0.0).unwrap();
        assert!(air.rho.is_infinite());
    }

    #[test]
    fn negative_resistivity_rejected() {
        assert!(matches!(
            Material::new(-1.0, 1.0, 1.0, 20.0, 0.0),
            Err(LcError::InvalidValue { .. })
        ));
    }

    #[test]
    fn equality_is_structural() {
        let a = Material::new(1.7241e-8, 1.0, 0.999994, 20.0, 0.00393).unwrap();
        let b = Material::new(1.7241e-8, 1.0, 0.999994, 20.0, 0.00393).unwrap();
        assert_eq!(a, b);
        let c = Material { alpha: 0.004, ..a };
        assert_ne!(a, c);
    }
}
