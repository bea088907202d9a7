//! Ordered reduction of conductor layers into one equivalent conductor.
//!
//! Layers are added innermost to outermost. Each `add` folds the new layer
//! into the group aggregates in one pass: parallel resistance, weighted
//! temperature coefficient, cross-section-weighted GMR combination against
//! the geometric mean distance to the previous outermost layer.

use crate::parts::ConductorLayer;
use lc_core::constants::TOL;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_params::gmd::geometric_mean_distance;
use lc_params::inductance::combine_gmr;
use lc_params::resistance::{parallel_equivalent, weighted_alpha};

/// A non-empty ordered stack of conductor layers sharing the cable axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorGroup<T> {
    /// Inner radius of the first layer (m)
    pub radius_in: T,
    /// Outer radius of the last layer (m)
    pub radius_ext: T,
    /// Total conducting cross-section (m²)
    pub cross_section: T,
    /// Parallel-equivalent DC resistance (Ω/m)
    pub resistance: T,
    /// Equivalent geometric mean radius (m)
    pub gmr: T,
    /// Resistance-weighted temperature coefficient (1/°C)
    pub alpha: T,
    /// Cross-section-weighted mean wire count
    pub num_wires: T,
    /// Cross-section-weighted mean turns per meter (1/m); zero when every
    /// layer is straight
    pub num_turns: T,
    layers: Vec<ConductorLayer<T>>,
}

impl<T: Scalar> ConductorGroup<T> {
    /// Start a group from its innermost layer.
    pub fn new(first: ConductorLayer<T>) -> Self {
        Self {
            radius_in: first.radius_in(),
            radius_ext: first.radius_ext(),
            cross_section: first.cross_section(),
            resistance: first.resistance(),
            gmr: first.gmr(),
            alpha: first.material().alpha,
            num_wires: T::from_f64(f64::from(first.wire_count())),
            num_turns: first.turns_per_meter(),
            layers: vec![first],
        }
    }

    /// Add the next layer outward. The layer's inner radius must match the
    /// group's current outer radius within tolerance.
    pub fn add(&mut self, layer: ConductorLayer<T>) -> LcResult<()> {
        if (layer.radius_in() - self.radius_ext).abs().value() > TOL {
            return Err(LcError::geometry(format!(
                "layer {} has radius_in {} but the group ends at {}",
                self.layers.len(),
                layer.radius_in(),
                self.radius_ext
            )));
        }

        let previous = self.layers.last().expect("group is never empty");
        let gmd = geometric_mean_distance(
            &previous.sub_elements(),
            &layer.sub_elements(),
            previous.radius_ext(),
            layer.radius_ext(),
        );
        let s_new = layer.cross_section();
        self.gmr = combine_gmr(self.gmr, self.cross_section, layer.gmr(), s_new, gmd);
        self.alpha = weighted_alpha(
            self.alpha,
            self.resistance,
            layer.material().alpha,
            layer.resistance(),
        );
        self.resistance = parallel_equivalent(self.resistance, layer.resistance());

        if matches!(
            layer,
            ConductorLayer::WireArray(_) | ConductorLayer::Strip(_)
        ) {
            let total = self.cross_section + s_new;
            self.num_wires = (self.num_wires * self.cross_section
                + T::from_f64(f64::from(layer.wire_count())) * s_new)
                / total;
            self.num_turns =
                (self.num_turns * self.cross_section + layer.turns_per_meter() * s_new) / total;
        }

        self.cross_section = self.cross_section + s_new;
        self.radius_ext = self.radius_ext + (layer.radius_ext() - layer.radius_in());
        self.layers.push(layer);
        Ok(())
    }

    /// Layers in add order, innermost first.
    pub fn layers(&self) -> &[ConductorLayer<T>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Turns per meter of the outermost layer, for the solenoid correction
    /// of the insulation that wraps it.
    pub fn outer_turns_per_meter(&self) -> T {
        self.layers
            .last()
            .expect("group is never empty")
            .turns_per_meter()
    }

    /// Reference temperature of the innermost layer's material.
    pub fn reference_temperature(&self) -> T {
        self.layers[0].material().t0
    }
}
