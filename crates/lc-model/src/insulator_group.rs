//! Ordered reduction of dielectric layers into one equivalent insulation.
//!
//! Radially stacked dielectrics are series-connected for shunt current, so
//! the group admittance at the nominal frequency is the reciprocal-sum of
//! the per-layer admittances Y_i = G_i + jω₀C_i; the equivalent C and G are
//! read back from its rectangular parts.

use crate::parts::InsulatorLayer;
use lc_core::constants::{F_NOMINAL, TOL, angular_frequency};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use num_complex::Complex;

/// A non-empty ordered stack of insulator layers sharing the cable axis.
#[derive(Debug, Clone, PartialEq)]
pub struct InsulatorGroup<T> {
    /// Inner radius of the first layer (m)
    pub radius_in: T,
    /// Outer radius of the last layer (m)
    pub radius_ext: T,
    /// Total dielectric cross-section (m²)
    pub cross_section: T,
    /// Equivalent shunt capacitance at the nominal frequency (F/m)
    pub shunt_capacitance: T,
    /// Equivalent shunt conductance at the nominal frequency (S/m)
    pub shunt_conductance: T,
    layers: Vec<InsulatorLayer<T>>,
}

impl<T: Scalar> InsulatorGroup<T> {
    /// Start a group from its innermost layer.
    pub fn new(first: InsulatorLayer<T>) -> Self {
        Self {
            radius_in: first.radius_in(),
            radius_ext: first.radius_ext(),
            cross_section: first.cross_section(),
            shunt_capacitance: first.shunt_capacitance(),
            shunt_conductance: first.shunt_conductance(),
            layers: vec![first],
        }
    }

    /// Add the next layer outward, folding it into the series-equivalent
    /// admittance.
    pub fn add(&mut self, layer: InsulatorLayer<T>) -> LcResult<()> {
        if (layer.radius_in() - self.radius_ext).abs().value() > TOL {
            return Err(LcError::geometry(format!(
                "layer {} has radius_in {} but the group ends at {}",
                self.layers.len(),
                layer.radius_in(),
                self.radius_ext
            )));
        }

        let omega0 = T::from_f64(angular_frequency(F_NOMINAL));
        let y_group = Complex::new(self.shunt_conductance, omega0 * self.shunt_capacitance);
        let y_layer = Complex::new(
            layer.shunt_conductance(),
            omega0 * layer.shunt_capacitance(),
        );
        let y_eq = lc_core::complex::parallel(y_group, y_layer);
        self.shunt_conductance = y_eq.re;
        self.shunt_capacitance = y_eq.im / omega0;

        self.cross_section = self.cross_section + layer.cross_section();
        self.radius_ext = self.radius_ext + (layer.radius_ext() - layer.radius_in());
        self.layers.push(layer);
        Ok(())
    }

    /// Layers in add order, innermost first.
    pub fn layers(&self) -> &[InsulatorLayer<T>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Relative permeability of the outermost layer's material.
    pub fn outer_mu_r(&self) -> T {
        self.layers
            .last()
            .expect("group is never empty")
            .material()
            .mu_r
    }

    /// Reference temperature of the innermost layer's material.
    pub fn reference_temperature(&self) -> T {
        self.layers[0].material().t0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use approx::assert_relative_eq;
    use lc_materials::{Material, MaterialsLibrary};
    use lc_params::shunt::coaxial_capacitance;

    fn xlpe() -> Material<f64> {
        *MaterialsLibrary::with_defaults().get("xlpe").unwrap()
    }

    fn semicon1() -> Material<f64> {
        *MaterialsLibrary::with_defaults().get("semicon1").unwrap()
    }

    #[test]
    fn single_layer_group_mirrors_the_layer() {
        let layer = InsulatorLayer::insulator(0.01, Dimension::Radius(0.02), xlpe(), 20.0).unwrap();
        let c = layer.shunt_capacitance();
        let group = InsulatorGroup::new(layer);
        assert_relative_eq!(group.shunt_capacitance, c, epsilon = 1e-20);
        assert_relative_eq!(group.radius_ext, 0.02);
    }

    #[test]
    fn series_capacitors_reduce() {
        // Two uniform XLPE layers 10→15→20 mm behave as one 10→20 mm layer
        // (negligible conductance, series capacitors).
        let mut group = InsulatorGroup::new(
            InsulatorLayer::insulator(0.01, Dimension::Radius(0.015), xlpe(), 20.0).unwrap(),
        );
        group
            .add(InsulatorLayer::insulator(0.015, Dimension::Radius(0.02), xlpe(), 20.0).unwrap())
            .unwrap();
        let direct = coaxial_capacitance(0.01, 0.02, 2.3);
        assert_relative_eq!(group.shunt_capacitance, direct, max_relative = 1e-9);
    }

    #[test]
    fn radius_mismatch_rejected() {
        let mut group = InsulatorGroup::new(
            InsulatorLayer::insulator(0.01, Dimension::Radius(0.015), xlpe(), 20.0).unwrap(),
        );
        let gap =
            InsulatorLayer::insulator(0.017, Dimension::Radius(0.02), xlpe(), 20.0).unwrap();
        assert!(matches!(
            group.add(gap),
            Err(LcError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn semicon_screen_barely_affects_capacitance() {
        // A thin conductive screen in series with thick insulation leaves
        // the equivalent capacitance close to the insulation alone spanning
        // the remaining annulus.
        let mut group = InsulatorGroup::new(
            InsulatorLayer::semicon(0.01, Dimension::Thickness(0.0008), semicon1(), 20.0).unwrap(),
        );
        group
            .add(
                InsulatorLayer::insulator(0.0108, Dimension::Radius(0.02), xlpe(), 20.0).unwrap(),
            )
            .unwrap();
        let insulation_only = coaxial_capacitance(0.0108, 0.02, 2.3);
        assert_relative_eq!(
            group.shunt_capacitance,
            insulation_only,
            max_relative = 0.05
        );
    }

    #[test]
    fn cross_section_is_additive() {
        let mut group = InsulatorGroup::new(
            InsulatorLayer::insulator(0.01, Dimension::Radius(0.015), xlpe(), 20.0).unwrap(),
        );
        group
            .add(InsulatorLayer::insulator(0.015, Dimension::Radius(0.02), xlpe(), 20.0).unwrap())
            .unwrap();
        assert_relative_eq!(
            group.cross_section,
            std::f64::consts::PI * (0.02f64.powi(2) - 0.01f64.powi(2)),
            max_relative = 1e-12
        );
    }
}
