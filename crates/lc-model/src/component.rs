//! One coaxial cable component: a conductor group wrapped by an insulator
//! group, reduced to an equivalent homogeneous pair of materials.
//!
//! The effective materials are chosen so that a plain tube and a plain
//! coaxial dielectric of the same radii reproduce the component's R, L, C
//! and G at the nominal frequency; downstream assembly then treats every
//! component as a simple coaxial pair.

use crate::conductor_group::ConductorGroup;
use crate::insulator_group::InsulatorGroup;
use lc_core::constants::TOL;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_materials::Material;
use lc_params::helical::solenoid_correction;
use lc_params::inductance::equivalent_mu;
use lc_params::shunt::{equivalent_epsilon_r, equivalent_rho_conductor, equivalent_rho_insulator};

/// A conductor/insulator pair with precomputed effective materials.
///
/// Construction consumes both groups; a component is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct CableComponent<T> {
    pub id: String,
    pub conductor_group: ConductorGroup<T>,
    pub insulator_group: InsulatorGroup<T>,
    /// Homogeneous material reproducing the conductor group's R and GMR
    pub effective_conductor: Material<T>,
    /// Homogeneous material reproducing the insulator group's C and G
    pub effective_insulator: Material<T>,
}

impl<T: Scalar> CableComponent<T> {
    /// Build a component; the insulation must start exactly where the
    /// conductor stack ends.
    pub fn new(
        id: impl Into<String>,
        conductor_group: ConductorGroup<T>,
        insulator_group: InsulatorGroup<T>,
    ) -> LcResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(LcError::value("id", "component id must be non-empty"));
        }
        if (insulator_group.radius_in - conductor_group.radius_ext)
            .abs()
            .value()
            > TOL
        {
            return Err(LcError::geometry(format!(
                "component '{id}': insulation starts at {} but the conductor ends at {}",
                insulator_group.radius_in, conductor_group.radius_ext
            )));
        }

        let effective_conductor = Material {
            rho: equivalent_rho_conductor(
                conductor_group.resistance,
                conductor_group.radius_in,
                conductor_group.radius_ext,
            ),
            eps_r: T::zero(),
            mu_r: equivalent_mu(
                conductor_group.gmr,
                conductor_group.radius_ext,
                conductor_group.radius_in,
            )?,
            t0: conductor_group.reference_temperature(),
            alpha: conductor_group.alpha,
        };

        let solenoid = solenoid_correction(
            conductor_group.outer_turns_per_meter(),
            conductor_group.radius_ext,
            insulator_group.radius_ext,
        );
        let effective_insulator = Material {
            rho: equivalent_rho_insulator(
                insulator_group.shunt_conductance,
                insulator_group.radius_in,
                insulator_group.radius_ext,
            ),
            eps_r: equivalent_epsilon_r(
                insulator_group.shunt_capacitance,
                insulator_group.radius_in,
                insulator_group.radius_ext,
            ),
            mu_r: insulator_group.outer_mu_r() * solenoid,
            t0: insulator_group.reference_temperature(),
            alpha: T::zero(),
        };

        Ok(Self {
            id,
            conductor_group,
            insulator_group,
            effective_conductor,
            effective_insulator,
        })
    }

    /// Outer radius of the whole component (m).
    pub fn radius_ext(&self) -> T {
        self.insulator_group.radius_ext
    }
}
