//! Flattening of a cable system into per-conductor rows.
//!
//! Each cable component contributes one row carrying its position, the
//! radii of its conductor and insulation annuli, the effective material
//! properties precomputed by the model, and its phase assignment. Row
//! order is cable order, then component order — stable across runs.

use lc_core::constants::F_NOMINAL;
use lc_core::error::LcResult;
use lc_core::scalar::Scalar;
use lc_model::system::LineCableSystem;
use lc_params::inductance::tubular_gmr;
use lc_params::shunt::loss_tangent;

/// One conductor of the flattened system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatConductor<T> {
    pub horz: T,
    pub vert: T,
    pub radius_in_cond: T,
    pub radius_ext_cond: T,
    pub radius_in_ins: T,
    pub radius_ext_ins: T,
    /// Effective conductor resistivity (Ω·m)
    pub rho_cond: T,
    /// Effective conductor relative permeability
    pub mu_cond: T,
    /// Effective temperature coefficient (1/°C) and its reference (°C)
    pub alpha_cond: T,
    pub t0: T,
    /// DC resistance at the reference temperature (Ω/m)
    pub resistance_dc: T,
    /// Equivalent GMR of the conductor annulus (m)
    pub gmr: T,
    /// Effective insulation resistivity (Ω·m) and relative permittivity
    pub rho_ins: T,
    pub eps_ins: T,
    pub mu_ins: T,
    /// Shunt capacitance (F/m) and conductance (S/m) of the insulation
    pub shunt_capacitance: T,
    pub shunt_conductance: T,
    /// Dielectric loss tangent at the nominal frequency
    pub tan_delta: T,
    /// Phase index; 0 marks a grounded conductor
    pub phase: usize,
    /// Index of the owning cable in the system
    pub cable_index: usize,
}

/// Flatten a system into rows, one per component.
pub fn flatten<T: Scalar>(system: &LineCableSystem<T>) -> LcResult<Vec<FlatConductor<T>>> {
    let mut rows = Vec::with_capacity(system.num_conductors());
    for (cable_index, position) in system.positions().iter().enumerate() {
        for (component, &phase) in position
            .design
            .components()
            .iter()
            .zip(&position.phase_map)
        {
            let cg = &component.conductor_group;
            let ig = &component.insulator_group;
            let eff_c = &component.effective_conductor;
            let eff_i = &component.effective_insulator;
            rows.push(FlatConductor {
                horz: position.horz,
                vert: position.vert,
                radius_in_cond: cg.radius_in,
                radius_ext_cond: cg.radius_ext,
                radius_in_ins: ig.radius_in,
                radius_ext_ins: ig.radius_ext,
                rho_cond: eff_c.rho,
                mu_cond: eff_c.mu_r,
                alpha_cond: eff_c.alpha,
                t0: eff_c.t0,
                resistance_dc: cg.resistance,
                gmr: tubular_gmr(cg.radius_ext, cg.radius_in, eff_c.mu_r)?,
                rho_ins: eff_i.rho,
                eps_ins: eff_i.eps_r,
                mu_ins: eff_i.mu_r,
                shunt_capacitance: ig.shunt_capacitance,
                shunt_conductance: ig.shunt_conductance,
                tan_delta: loss_tangent(ig.shunt_conductance, ig.shunt_capacitance, F_NOMINAL),
                phase,
                cable_index,
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lc_materials::MaterialsLibrary;
    use lc_model::component::CableComponent;
    use lc_model::conductor_group::ConductorGroup;
    use lc_model::design::CableDesign;
    use lc_model::dimension::Dimension;
    use lc_model::insulator_group::InsulatorGroup;
    use lc_model::parts::{ConductorLayer, InsulatorLayer, Tubular};
    use lc_model::system::CablePosition;

    fn system() -> LineCableSystem<f64> {
        let lib = MaterialsLibrary::with_defaults();
        let copper = *lib.get("copper").unwrap();
        let xlpe = *lib.get("xlpe").unwrap();
        let core = CableComponent::new(
            "core",
            ConductorGroup::new(ConductorLayer::Tubular(
                Tubular::new(0.0, Dimension::Radius(0.01), copper, 20.0).unwrap(),
            )),
            InsulatorGroup::new(
                InsulatorLayer::insulator(0.01, Dimension::Radius(0.02), xlpe, 20.0).unwrap(),
            ),
        )
        .unwrap();
        let screen = CableComponent::new(
            "screen",
            ConductorGroup::new(ConductorLayer::Tubular(
                Tubular::new(0.02, Dimension::Thickness(0.0005), copper, 20.0).unwrap(),
            )),
            InsulatorGroup::new(
                InsulatorLayer::insulator(0.0205, Dimension::Radius(0.0235), xlpe, 20.0).unwrap(),
            ),
        )
        .unwrap();
        let mut design = CableDesign::new("cable", core, None).unwrap();
        design.add(screen);
        let first = CablePosition::new(design.clone(), 0.0, -1.0, vec![1, 0]).unwrap();
        let mut system = LineCableSystem::new("s", 1.0, first);
        system
            .add_position(design, 0.05, -1.0, vec![2, 0])
            .unwrap();
        system
    }

    #[test]
    fn row_order_is_cable_then_component() {
        let rows = flatten(&system()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows.iter().map(|r| r.cable_index).collect::<Vec<_>>(),
            vec![0, 0, 1, 1]
        );
        assert_eq!(
            rows.iter().map(|r| r.phase).collect::<Vec<_>>(),
            vec![1, 0, 2, 0]
        );
    }

    #[test]
    fn solid_core_row_reproduces_group_values() {
        let rows = flatten(&system()).unwrap();
        let core = &rows[0];
        assert_relative_eq!(core.radius_ext_cond, 0.01);
        assert_relative_eq!(
            core.resistance_dc,
            1.7241e-8 / (std::f64::consts::PI * 1e-4),
            max_relative = 1e-9
        );
        // Effective-μ GMR reproduces the group GMR
        assert_relative_eq!(core.gmr, 0.01 * (-0.999994 / 4.0f64).exp(), max_relative = 1e-6);
        assert!(core.tan_delta < 1e-6);
    }

    #[test]
    fn flattening_is_deterministic() {
        let a = flatten(&system()).unwrap();
        let b = flatten(&system()).unwrap();
        assert_eq!(a, b);
    }
}
