//! Layered earth model: an air half-space over horizontally or vertically
//! stacked soil layers, each with per-frequency electrical properties.

use crate::formulation::{ConstantProperties, LayerProperties, PropertiesFormulation};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use std::fmt;

/// One layer of the model with its evaluated per-frequency properties.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthLayer<T> {
    /// Base (DC) resistivity (Ω·m)
    pub base_rho: T,
    /// Base relative permittivity
    pub base_epsr: T,
    /// Base relative permeability
    pub base_mur: T,
    /// Layer thickness (m); +Inf for a half-space
    pub thickness: T,
    /// Per-frequency resistivity (Ω·m)
    pub rho: Vec<T>,
    /// Per-frequency absolute permittivity (F/m)
    pub eps: Vec<T>,
    /// Per-frequency absolute permeability (H/m)
    pub mu: Vec<T>,
}

impl<T: Scalar> EarthLayer<T> {
    fn evaluate(
        formulation: &dyn PropertiesFormulation<T>,
        frequencies: &[f64],
        base_rho: T,
        base_epsr: T,
        base_mur: T,
        thickness: T,
    ) -> Self {
        let LayerProperties { rho, eps, mu } =
            formulation.evaluate(frequencies, base_rho, base_epsr, base_mur);
        Self {
            base_rho,
            base_epsr,
            base_mur,
            thickness,
            rho,
            eps,
            mu,
        }
    }
}

/// A layered half-space. The air layer is always present, first and
/// semi-infinite; earth layers are appended top-down (horizontal layering)
/// or left-right (vertical layering).
pub struct EarthModel<T: Scalar> {
    frequencies: Vec<f64>,
    layers: Vec<EarthLayer<T>>,
    pub vertical_layers: bool,
    formulation: Box<dyn PropertiesFormulation<T>>,
}

impl<T: Scalar> fmt::Debug for EarthModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EarthModel")
            .field("frequencies", &self.frequencies.len())
            .field("layers", &self.layers)
            .field("vertical_layers", &self.vertical_layers)
            .field("formulation", &self.formulation.name())
            .finish()
    }
}

impl<T: Scalar> EarthModel<T> {
    /// Create a model with the frequency axis, one earth half-space layer
    /// and frequency-constant properties.
    pub fn new(frequencies: Vec<f64>, rho: T, epsr: T, mur: T) -> LcResult<Self> {
        Self::with_formulation(
            frequencies,
            rho,
            epsr,
            mur,
            T::from_f64(f64::INFINITY),
            Box::new(ConstantProperties),
            false,
        )
    }

    /// Create a model choosing the frequency-dependence formulation, the
    /// first layer thickness and the layering orientation.
    pub fn with_formulation(
        frequencies: Vec<f64>,
        rho: T,
        epsr: T,
        mur: T,
        thickness: T,
        formulation: Box<dyn PropertiesFormulation<T>>,
        vertical_layers: bool,
    ) -> LcResult<Self> {
        validate_frequencies(&frequencies)?;
        // The air layer is frozen: ρ = ∞, ε_r = μ_r = 1, t = ∞,
        // frequency-independent by construction.
        let air = EarthLayer::evaluate(
            &ConstantProperties,
            &frequencies,
            T::from_f64(f64::INFINITY),
            T::one(),
            T::one(),
            T::from_f64(f64::INFINITY),
        );
        let mut model = Self {
            frequencies,
            layers: vec![air],
            vertical_layers,
            formulation,
        };
        model.add_layer(rho, epsr, mur, thickness)?;
        Ok(model)
    }

    /// Append an earth layer, enforcing the thickness rules:
    /// - horizontal: the first earth layer may be semi-infinite, but no two
    ///   consecutive earth layers may be;
    /// - vertical: the first two earth layers may both be semi-infinite
    ///   (they define the interface), beyond that the same rule applies.
    pub fn add_layer(&mut self, rho: T, epsr: T, mur: T, thickness: T) -> LcResult<()> {
        if rho.value() <= 0.0 {
            return Err(LcError::value("rho", "earth resistivity must be positive"));
        }
        if epsr.value() <= 0.0 || mur.value() <= 0.0 {
            return Err(LcError::value(
                "epsr/mur",
                "earth permittivity and permeability must be positive",
            ));
        }
        if thickness.value() <= 0.0 {
            return Err(LcError::value("thickness", "must be positive"));
        }

        let earth_count = self.layers.len() - 1;
        let infinite_pair_allowed = self.vertical_layers && earth_count < 2;
        if thickness.is_infinite() && earth_count > 0 && !infinite_pair_allowed {
            let previous = &self.layers[self.layers.len() - 1];
            if previous.thickness.is_infinite() {
                return Err(LcError::input(
                    "two consecutive earth layers cannot both be semi-infinite",
                ));
            }
        }

        self.layers.push(EarthLayer::evaluate(
            self.formulation.as_ref(),
            &self.frequencies,
            rho,
            epsr,
            mur,
            thickness,
        ));
        Ok(())
    }

    /// The shared frequency axis.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// All layers, air first.
    pub fn layers(&self) -> &[EarthLayer<T>] {
        &self.layers
    }

    /// Earth layers only (air skipped), top-most first.
    pub fn earth_layers(&self) -> &[EarthLayer<T>] {
        &self.layers[1..]
    }

    /// Name of the active frequency-dependence formulation.
    pub fn formulation_name(&self) -> &'static str {
        self.formulation.name()
    }
}

fn validate_frequencies(frequencies: &[f64]) -> LcResult<()> {
    if frequencies.is_empty() {
        return Err(LcError::input("frequency vector is empty"));
    }
    if frequencies.iter().any(|&f| !(f > 0.0)) {
        return Err(LcError::input("frequencies must be strictly positive"));
    }
    if frequencies.windows(2).any(|w| w[1] <= w[0]) {
        return Err(LcError::input("frequencies must be strictly increasing"));
    }
    Ok(())
}
