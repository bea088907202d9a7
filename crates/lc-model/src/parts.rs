//! Concrete cable parts and the tagged layer variants the groups reduce.
//!
//! Conductor-capable parts expose resistance and GMR; insulator-capable
//! parts expose shunt capacitance and conductance. Every derived quantity
//! is precomputed at construction from the base-parameter kernel, so a part
//! is immutable once built.

use crate::dimension::Dimension;
use lc_core::constants::{DELTA_T_MAX, TOL};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use lc_materials::Material;
use lc_params::gmd::{SubElement, wire_centers};
use lc_params::helical::lay_parameters;
use lc_params::inductance::{tubular_gmr, wire_array_gmr};
use lc_params::resistance::{strip_resistance, tubular_resistance};
use lc_params::shunt::{coaxial_capacitance, coaxial_conductance};
use std::f64::consts::PI;

/// Winding sense of a helical layer.
pub const LAY_RIGHT: i8 = 1;
/// Winding sense of a helical layer.
pub const LAY_LEFT: i8 = -1;

fn check_temperature<T: Scalar>(temperature: T, material: &Material<T>) -> LcResult<()> {
    let excursion = (temperature - material.t0).abs().value();
    if excursion > DELTA_T_MAX {
        return Err(LcError::value(
            "temperature",
            format!(
                "{temperature} °C is more than {DELTA_T_MAX} °C away from the material reference {} °C",
                material.t0
            ),
        ));
    }
    Ok(())
}

fn check_radii<T: Scalar>(radius_in: T, radius_ext: T) -> LcResult<()> {
    if radius_ext.value() < radius_in.value() {
        return Err(LcError::geometry(format!(
            "radius_ext {radius_ext} < radius_in {radius_in}"
        )));
    }
    Ok(())
}

// ============================================================================
// Conductor-capable parts
// ============================================================================

/// A layer of round wires helically laid on a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct WireArray<T> {
    pub radius_in: T,
    pub radius_wire: T,
    pub num_wires: u32,
    pub lay_ratio: T,
    pub lay_direction: i8,
    pub material: Material<T>,
    pub temperature: T,
    // Derived at construction
    pub radius_ext: T,
    pub mean_diameter: T,
    pub pitch_length: T,
    pub overlength: T,
    pub cross_section: T,
    pub resistance: T,
    pub gmr: T,
}

impl<T: Scalar> WireArray<T> {
    /// Build a wire array; `wire_size` is the radius or diameter of one
    /// wire. A single wire must sit on the axis (radius_in = 0).
    pub fn new(
        radius_in: T,
        wire_size: Dimension<T>,
        num_wires: u32,
        lay_ratio: T,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        let radius_wire = wire_size.resolve_wire()?;
        if num_wires == 0 {
            return Err(LcError::value("num_wires", "at least one wire required"));
        }
        if !(radius_wire.value() > 0.0) {
            return Err(LcError::value(
                "wire_size",
                format!("wire radius must be positive, got {radius_wire}"),
            ));
        }
        if lay_ratio.value() < 0.0 {
            return Err(LcError::value("lay_ratio", "must be ≥ 0"));
        }
        if num_wires == 1 && radius_in.value().abs() > TOL {
            return Err(LcError::geometry(format!(
                "a single wire must sit on the axis, got radius_in {radius_in}"
            )));
        }
        check_temperature(temperature, &material)?;

        let radius_ext = if num_wires == 1 {
            radius_wire
        } else {
            radius_in + T::from_f64(2.0) * radius_wire
        };
        check_radii(radius_in, radius_ext)?;
        let lay = lay_parameters(radius_in, radius_in + T::from_f64(2.0) * radius_wire, lay_ratio);
        let cross_section =
            T::from_f64(f64::from(num_wires) * PI) * radius_wire * radius_wire;
        let single_wire = tubular_resistance(
            T::zero(),
            radius_wire,
            material.rho,
            material.alpha,
            temperature,
            material.t0,
        );
        let resistance = single_wire * lay.overlength / T::from_f64(f64::from(num_wires));
        let gmr = wire_array_gmr(radius_in + radius_wire, num_wires, radius_wire, material.mu_r);

        Ok(Self {
            radius_in,
            radius_wire,
            num_wires,
            lay_ratio,
            lay_direction: LAY_RIGHT,
            material,
            temperature,
            radius_ext,
            mean_diameter: lay.mean_diameter,
            pitch_length: lay.pitch_length,
            overlength: lay.overlength,
            cross_section,
            resistance,
            gmr,
        })
    }

    /// Reverse the winding sense; the electrical parameters are unaffected.
    pub fn with_lay_direction(mut self, direction: i8) -> Self {
        self.lay_direction = if direction < 0 { LAY_LEFT } else { LAY_RIGHT };
        self
    }

    /// Turns per meter of cable, zero for a straight (lay ratio 0) layer.
    pub fn turns_per_meter(&self) -> T {
        if self.pitch_length.value() == 0.0 {
            T::zero()
        } else {
            T::one() / self.pitch_length
        }
    }
}

/// A helically applied flat strip (e.g. a copper counter-helix tape).
#[derive(Debug, Clone, PartialEq)]
pub struct Strip<T> {
    pub radius_in: T,
    pub thickness: T,
    pub width: T,
    pub lay_ratio: T,
    pub lay_direction: i8,
    pub material: Material<T>,
    pub temperature: T,
    // Derived at construction
    pub radius_ext: T,
    pub mean_diameter: T,
    pub pitch_length: T,
    pub overlength: T,
    pub cross_section: T,
    pub resistance: T,
    pub gmr: T,
}

impl<T: Scalar> Strip<T> {
    pub fn new(
        radius_in: T,
        thickness: Dimension<T>,
        width: T,
        lay_ratio: T,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        let radius_ext = thickness.resolve(radius_in);
        check_radii(radius_in, radius_ext)?;
        let thickness = radius_ext - radius_in;
        if !(width.value() > 0.0) {
            return Err(LcError::value("width", "must be positive"));
        }
        if lay_ratio.value() < 0.0 {
            return Err(LcError::value("lay_ratio", "must be ≥ 0"));
        }
        check_temperature(temperature, &material)?;

        let lay = lay_parameters(radius_in, radius_ext, lay_ratio);
        let cross_section = thickness * width;
        let resistance = strip_resistance(
            thickness,
            width,
            material.rho,
            material.alpha,
            temperature,
            material.t0,
        ) * lay.overlength;
        let gmr = tubular_gmr(radius_ext, radius_in, material.mu_r)?;

        Ok(Self {
            radius_in,
            thickness,
            width,
            lay_ratio,
            lay_direction: LAY_RIGHT,
            material,
            temperature,
            radius_ext,
            mean_diameter: lay.mean_diameter,
            pitch_length: lay.pitch_length,
            overlength: lay.overlength,
            cross_section,
            resistance,
            gmr,
        })
    }

    pub fn with_lay_direction(mut self, direction: i8) -> Self {
        self.lay_direction = if direction < 0 { LAY_LEFT } else { LAY_RIGHT };
        self
    }

    pub fn turns_per_meter(&self) -> T {
        if self.pitch_length.value() == 0.0 {
            T::zero()
        } else {
            T::one() / self.pitch_length
        }
    }
}

/// A plain tubular conductor (solid rod when radius_in = 0).
#[derive(Debug, Clone, PartialEq)]
pub struct Tubular<T> {
    pub radius_in: T,
    pub radius_ext: T,
    pub material: Material<T>,
    pub temperature: T,
    // Derived at construction
    pub cross_section: T,
    pub resistance: T,
    pub gmr: T,
}

impl<T: Scalar> Tubular<T> {
    pub fn new(
        radius_in: T,
        radius_ext: Dimension<T>,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        let radius_ext = radius_ext.resolve(radius_in);
        check_radii(radius_in, radius_ext)?;
        check_temperature(temperature, &material)?;

        let cross_section =
            T::from_f64(PI) * (radius_ext * radius_ext - radius_in * radius_in);
        let resistance = tubular_resistance(
            radius_in,
            radius_ext,
            material.rho,
            material.alpha,
            temperature,
            material.t0,
        );
        let gmr = tubular_gmr(radius_ext, radius_in, material.mu_r)?;

        Ok(Self {
            radius_in,
            radius_ext,
            material,
            temperature,
            cross_section,
            resistance,
            gmr,
        })
    }
}

// ============================================================================
// Insulator-capable parts
// ============================================================================

/// A coaxial dielectric shell; used for both semiconductive screens and
/// main insulation — the distinction between the two is only the role the
/// layer plays for the solenoid permeability correction, so they share one
/// record behind the two [`InsulatorLayer`] tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Dielectric<T> {
    pub radius_in: T,
    pub radius_ext: T,
    pub material: Material<T>,
    pub temperature: T,
    // Derived at construction
    pub cross_section: T,
    pub shunt_capacitance: T,
    pub shunt_conductance: T,
}

impl<T: Scalar> Dielectric<T> {
    /// Build a dielectric shell. A zero inner radius degenerates cleanly:
    /// ln(r_ext/0) diverges and both shunt values come out zero.
    pub fn new(
        radius_in: T,
        radius_ext: Dimension<T>,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        let radius_ext = radius_ext.resolve(radius_in);
        check_radii(radius_in, radius_ext)?;
        check_temperature(temperature, &material)?;

        let cross_section =
            T::from_f64(PI) * (radius_ext * radius_ext - radius_in * radius_in);
        let shunt_capacitance = coaxial_capacitance(radius_in, radius_ext, material.eps_r);
        let shunt_conductance = coaxial_conductance(radius_in, radius_ext, material.rho);

        Ok(Self {
            radius_in,
            radius_ext,
            material,
            temperature,
            cross_section,
            shunt_capacitance,
            shunt_conductance,
        })
    }
}

// ============================================================================
// Tagged layer variants
// ============================================================================

/// A conductor-capable layer of a [`crate::conductor_group::ConductorGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConductorLayer<T> {
    WireArray(WireArray<T>),
    Strip(Strip<T>),
    Tubular(Tubular<T>),
}

impl<T: Scalar> ConductorLayer<T> {
    pub fn radius_in(&self) -> T {
        match self {
            Self::WireArray(w) => w.radius_in,
            Self::Strip(s) => s.radius_in,
            Self::Tubular(t) => t.radius_in,
        }
    }

    pub fn radius_ext(&self) -> T {
        match self {
            Self::WireArray(w) => w.radius_ext,
            Self::Strip(s) => s.radius_ext,
            Self::Tubular(t) => t.radius_ext,
        }
    }

    pub fn cross_section(&self) -> T {
        match self {
            Self::WireArray(w) => w.cross_section,
            Self::Strip(s) => s.cross_section,
            Self::Tubular(t) => t.cross_section,
        }
    }

    pub fn resistance(&self) -> T {
        match self {
            Self::WireArray(w) => w.resistance,
            Self::Strip(s) => s.resistance,
            Self::Tubular(t) => t.resistance,
        }
    }

    pub fn gmr(&self) -> T {
        match self {
            Self::WireArray(w) => w.gmr,
            Self::Strip(s) => s.gmr,
            Self::Tubular(t) => t.gmr,
        }
    }

    pub fn material(&self) -> &Material<T> {
        match self {
            Self::WireArray(w) => &w.material,
            Self::Strip(s) => &s.material,
            Self::Tubular(t) => &t.material,
        }
    }

    /// Turns per meter; zero for straight layers and plain tubes.
    pub fn turns_per_meter(&self) -> T {
        match self {
            Self::WireArray(w) => w.turns_per_meter(),
            Self::Strip(s) => s.turns_per_meter(),
            Self::Tubular(_) => T::zero(),
        }
    }

    /// Wire count entering the group's mass-weighted mean; only wire
    /// arrays contribute wires.
    pub fn wire_count(&self) -> u32 {
        match self {
            Self::WireArray(w) => w.num_wires,
            Self::Strip(_) | Self::Tubular(_) => 0,
        }
    }

    /// Sub-element decomposition for geometric-mean-distance integrals:
    /// individual wire centers for an array, a single axis point otherwise.
    pub fn sub_elements(&self) -> Vec<SubElement<T>> {
        match self {
            Self::WireArray(w) => {
                let area = T::from_f64(PI) * w.radius_wire * w.radius_wire;
                wire_centers(T::zero(), T::zero(), w.radius_in, w.radius_wire, w.num_wires)
                    .into_iter()
                    .map(|(x, y)| SubElement::new(x, y, area))
                    .collect()
            }
            Self::Strip(_) | Self::Tubular(_) => {
                let r = self.radius_ext();
                vec![SubElement::new(
                    T::zero(),
                    T::zero(),
                    T::from_f64(PI) * r * r,
                )]
            }
        }
    }
}

/// An insulator-capable layer of an
/// [`crate::insulator_group::InsulatorGroup`].
#[derive(Debug, Clone, PartialEq)]
pub enum InsulatorLayer<T> {
    Semicon(Dielectric<T>),
    Insulator(Dielectric<T>),
}

impl<T: Scalar> InsulatorLayer<T> {
    /// Build a semiconductive screen layer.
    pub fn semicon(
        radius_in: T,
        radius_ext: Dimension<T>,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        Ok(Self::Semicon(Dielectric::new(
            radius_in, radius_ext, material, temperature,
        )?))
    }

    /// Build a main-insulation layer.
    pub fn insulator(
        radius_in: T,
        radius_ext: Dimension<T>,
        material: Material<T>,
        temperature: T,
    ) -> LcResult<Self> {
        Ok(Self::Insulator(Dielectric::new(
            radius_in, radius_ext, material, temperature,
        )?))
    }

    pub fn inner(&self) -> &Dielectric<T> {
        match self {
            Self::Semicon(d) | Self::Insulator(d) => d,
        }
    }

    pub fn radius_in(&self) -> T {
        self.inner().radius_in
    }

    pub fn radius_ext(&self) -> T {
        self.inner().radius_ext
    }

    pub fn cross_section(&self) -> T {
        self.inner().cross_section
    }

    pub fn shunt_capacitance(&self) -> T {
        self.inner().shunt_capacitance
    }

    pub fn shunt_conductance(&self) -> T {
        self.inner().shunt_conductance
    }

    pub fn material(&self) -> &Material<T> {
        &self.inner().material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lc_materials::MaterialsLibrary;

    fn copper() -> Material<f64> {
        *MaterialsLibrary::with_defaults().get("copper").unwrap()
    }

    fn xlpe() -> Material<f64> {
        *MaterialsLibrary::with_defaults().get("xlpe").unwrap()
    }

    #[test]
    fn single_central_wire() {
        let w = WireArray::new(0.0, Dimension::Radius(0.00235), 1, 0.0, copper(), 20.0).unwrap();
        assert_relative_eq!(w.radius_ext, 0.00235);
        assert_eq!(w.overlength, 1.0);
        assert_relative_eq!(w.cross_section, PI * 0.00235 * 0.00235, epsilon = 1e-15);
        assert_relative_eq!(
            w.resistance,
            1.7241e-8 / (PI * 0.00235 * 0.00235),
            max_relative = 1e-12
        );
    }

    #[test]
    fn six_wire_ring_geometry() {
        let w =
            WireArray::new(0.00235, Dimension::Radius(0.00235), 6, 10.0, copper(), 20.0).unwrap();
        assert_relative_eq!(w.radius_ext, 0.00235 * 3.0, epsilon = 1e-15);
        assert_relative_eq!(w.mean_diameter, 2.0 * (0.00235 + 0.00235), epsilon = 1e-15);
        assert!(w.overlength > 1.0);
        // N wires in parallel, each slightly longer than the cable
        let single = 1.7241e-8 / (PI * 0.00235 * 0.00235);
        assert_relative_eq!(w.resistance, single * w.overlength / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn wire_array_turns_per_meter() {
        let w =
            WireArray::new(0.00235, Dimension::Radius(0.00235), 6, 10.0, copper(), 20.0).unwrap();
        assert_relative_eq!(w.turns_per_meter(), 1.0 / w.pitch_length, epsilon = 1e-12);
        let straight =
            WireArray::new(0.00235, Dimension::Radius(0.00235), 6, 0.0, copper(), 20.0).unwrap();
        assert_eq!(straight.turns_per_meter(), 0.0);
    }

    #[test]
    fn zero_wires_rejected() {
        assert!(WireArray::new(0.0, Dimension::Radius(0.00235f64), 0, 0.0, copper(), 20.0).is_err());
    }

    #[test]
    fn single_wire_off_axis_rejected() {
        let res = WireArray::new(0.01, Dimension::Radius(0.001f64), 1, 0.0, copper(), 20.0);
        assert!(matches!(res, Err(LcError::InvalidGeometry { .. })));
    }

    #[test]
    fn excessive_temperature_rejected() {
        let res = WireArray::new(0.0, Dimension::Radius(0.00235f64), 1, 0.0, copper(), 180.0);
        assert!(matches!(res, Err(LcError::InvalidValue { .. })));
    }

    #[test]
    fn strip_resistance_includes_overlength() {
        let s = Strip::new(
            0.01,
            Dimension::Thickness(0.001),
            0.03,
            12.0,
            copper(),
            20.0,
        )
        .unwrap();
        assert_relative_eq!(s.radius_ext, 0.011, epsilon = 1e-15);
        let flat = 1.7241e-8 / (0.001 * 0.03);
        assert_relative_eq!(s.resistance, flat * s.overlength, max_relative = 1e-12);
        assert!(s.resistance > flat);
    }

    #[test]
    fn tubular_inverted_radii_rejected() {
        let res = Tubular::new(0.02, Dimension::Radius(0.01f64), copper(), 20.0);
        assert!(matches!(res, Err(LcError::InvalidGeometry { .. })));
    }

    #[test]
    fn dielectric_shunt_values() {
        let d = Dielectric::new(0.01, Dimension::Radius(0.02), xlpe(), 20.0).unwrap();
        assert_relative_eq!(
            d.shunt_capacitance,
            2.0 * PI * lc_core::constants::EPSILON_0 * 2.3 / 2.0f64.ln(),
            epsilon = 1e-20
        );
        assert!(d.shunt_conductance > 0.0);
    }

    #[test]
    fn dielectric_on_axis_degenerates_to_zero_shunt() {
        let d = Dielectric::new(0.0, Dimension::Radius(0.02f64), xlpe(), 20.0).unwrap();
        assert_eq!(d.shunt_capacitance, 0.0);
        assert_eq!(d.shunt_conductance, 0.0);
    }

    #[test]
    fn layer_dispatch_reads_through() {
        let layer = ConductorLayer::WireArray(
            WireArray::new(0.0, Dimension::Radius(0.00235), 7, 15.0, copper(), 20.0).unwrap(),
        );
        assert_eq!(layer.wire_count(), 7);
        assert_eq!(layer.sub_elements().len(), 7);
        assert!(layer.turns_per_meter() > 0.0);

        let tube = ConductorLayer::Tubular(
            Tubular::new(0.01, Dimension::Thickness(0.002), copper(), 20.0).unwrap(),
        );
        assert_eq!(tube.wire_count(), 0);
        assert_eq!(tube.sub_elements().len(), 1);
        assert_eq!(tube.turns_per_meter(), 0.0);
    }

    #[test]
    fn seven_wire_centers_lie_on_lay_circle() {
        let w = WireArray::new(0.0, Dimension::Radius(0.00235), 7, 10.0, copper(), 20.0).unwrap();
        let layer = ConductorLayer::WireArray(w);
        let elements = layer.sub_elements();
        // lay radius r_in + r_wire = 0.00235 for every element
        for e in &elements {
            assert_relative_eq!(e.x.hypot(e.y), 0.00235, epsilon = 1e-12);
        }
    }
}
