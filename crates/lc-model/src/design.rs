//! A complete cable design: ordered components plus optional nameplate data.

use crate::component::CableComponent;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Manufacturer nameplate values, used only for reporting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NominalData {
    /// Catalogue designation, e.g. "NA2XS(FL)2Y 1x1000 RM/35 18/30 kV"
    pub designation: Option<String>,
    /// Phase-to-ground rated voltage U₀ (kV)
    pub u0: Option<f64>,
    /// Phase-to-phase rated voltage U (kV)
    pub u: Option<f64>,
    /// Conductor cross-section (mm²)
    pub conductor_cross_section: Option<f64>,
    /// Nominal DC resistance (Ω/km)
    pub resistance: Option<f64>,
    /// Nominal inductance (mH/km)
    pub inductance: Option<f64>,
    /// Nominal capacitance (μF/km)
    pub capacitance: Option<f64>,
}

impl NominalData {
    /// Relative deviation of a computed value from the nameplate one, if
    /// the nameplate value is present. Both arguments in the nameplate's
    /// units.
    fn deviation(nominal: Option<f64>, computed: f64) -> Option<f64> {
        nominal.map(|n| (computed - n) / n)
    }

    pub fn resistance_deviation(&self, computed_ohm_per_km: f64) -> Option<f64> {
        Self::deviation(self.resistance, computed_ohm_per_km)
    }

    pub fn inductance_deviation(&self, computed_mh_per_km: f64) -> Option<f64> {
        Self::deviation(self.inductance, computed_mh_per_km)
    }

    pub fn capacitance_deviation(&self, computed_uf_per_km: f64) -> Option<f64> {
        Self::deviation(self.capacitance, computed_uf_per_km)
    }
}

/// An ordered, non-empty list of components with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct CableDesign<T> {
    pub cable_id: String,
    pub nominal_data: Option<NominalData>,
    components: Vec<CableComponent<T>>,
}

impl<T: Scalar> CableDesign<T> {
    /// Create a design from its innermost component.
    pub fn new(
        cable_id: impl Into<String>,
        first: CableComponent<T>,
        nominal_data: Option<NominalData>,
    ) -> LcResult<Self> {
        let cable_id = cable_id.into();
        if cable_id.is_empty() {
            return Err(LcError::value("cable_id", "must be non-empty"));
        }
        Ok(Self {
            cable_id,
            nominal_data,
            components: vec![first],
        })
    }

    /// Append a component, or replace in place the one already carrying
    /// the same id.
    pub fn add(&mut self, component: CableComponent<T>) {
        match self
            .components
            .iter()
            .position(|c| c.id == component.id)
        {
            Some(idx) => self.components[idx] = component,
            None => self.components.push(component),
        }
    }

    /// Components in radial order, innermost first.
    pub fn components(&self) -> &[CableComponent<T>] {
        &self.components
    }

    /// Look up a component by id.
    pub fn get(&self, id: &str) -> Option<&CableComponent<T>> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Outer radius of the whole cable (m).
    pub fn radius_ext(&self) -> T {
        self.components
            .last()
            .expect("design is never empty")
            .radius_ext()
    }
}

impl<T: Scalar> fmt::Display for CableDesign<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} component(s), outer radius {:.2} mm",
            self.cable_id,
            self.components.len(),
            lc_core::units::m_to_mm(self.radius_ext().value())
        )?;
        for component in &self.components {
            let cg = &component.conductor_group;
            let ig = &component.insulator_group;
            writeln!(
                f,
                "  {}: conductor {:.2}–{:.2} mm ({} layer(s)), insulation to {:.2} mm ({} layer(s))",
                component.id,
                lc_core::units::m_to_mm(cg.radius_in.value()),
                lc_core::units::m_to_mm(cg.radius_ext.value()),
                cg.len(),
                lc_core::units::m_to_mm(ig.radius_ext.value()),
                ig.len(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conductor_group::ConductorGroup;
    use crate::dimension::Dimension;
    use crate::insulator_group::InsulatorGroup;
    use crate::parts::{ConductorLayer, InsulatorLayer, Tubular};
    use approx::assert_relative_eq;
    use lc_materials::MaterialsLibrary;

    fn component(id: &str, r_in: f64, r_cond: f64, r_ins: f64) -> CableComponent<f64> {
        let lib = MaterialsLibrary::with_defaults();
        let copper = *lib.get("copper").unwrap();
        let xlpe = *lib.get("xlpe").unwrap();
        let cg = ConductorGroup::new(ConductorLayer::Tubular(
            Tubular::new(r_in, Dimension::Radius(r_cond), copper, 20.0).unwrap(),
        ));
        let ig = InsulatorGroup::new(
            InsulatorLayer::insulator(r_cond, Dimension::Radius(r_ins), xlpe, 20.0).unwrap(),
        );
        CableComponent::new(id, cg, ig).unwrap()
    }

    #[test]
    fn add_appends_new_ids() {
        let mut design =
            CableDesign::new("cable", component("core", 0.0, 0.01, 0.02), None).unwrap();
        design.add(component("sheath", 0.02, 0.021, 0.025));
        assert_eq!(design.len(), 2);
        assert_eq!(design.components()[1].id, "sheath");
    }

    #[test]
    fn add_replaces_existing_id_in_place() {
        let mut design =
            CableDesign::new("cable", component("core", 0.0, 0.01, 0.02), None).unwrap();
        design.add(component("sheath", 0.02, 0.021, 0.025));
        design.add(component("core", 0.0, 0.012, 0.02));
        assert_eq!(design.len(), 2);
        assert_eq!(design.components()[0].id, "core");
        assert_relative_eq!(design.components()[0].conductor_group.radius_ext, 0.012);
    }

    #[test]
    fn outer_radius_is_last_component() {
        let mut design =
            CableDesign::new("cable", component("core", 0.0, 0.01, 0.02), None).unwrap();
        design.add(component("sheath", 0.02, 0.021, 0.025));
        assert_relative_eq!(design.radius_ext(), 0.025);
    }

    #[test]
    fn display_summarizes_the_stack() {
        let mut design =
            CableDesign::new("cable", component("core", 0.0, 0.01, 0.02), None).unwrap();
        design.add(component("sheath", 0.02, 0.021, 0.025));
        let text = design.to_string();
        assert!(text.contains("cable: 2 component(s)"));
        assert!(text.contains("core: conductor 0.00–10.00 mm"));
        assert!(text.contains("25.00 mm"));
    }

    #[test]
    fn nominal_deviation_reporting() {
        let nominal = NominalData {
            resistance: Some(0.0601),
            ..NominalData::default()
        };
        let dev = nominal.resistance_deviation(0.0607).unwrap();
        assert_relative_eq!(dev, 0.0607 / 0.0601 - 1.0, epsilon = 1e-12);
        assert!(nominal.inductance_deviation(0.43).is_none());
    }
}
