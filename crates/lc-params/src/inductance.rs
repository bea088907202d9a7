//! External inductance and geometric mean radius of cable conductor layers.
//!
//! The GMR is the radius of the fictitious thin shell that reproduces a
//! layer's external inductance under uniform current density; combining
//! layers multiplies GMRs weighted by cross-section shares.

use lc_core::constants::{MU_0, TOL};
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use std::f64::consts::PI;

/// External inductance per unit length of a tubular region (H/m).
///
/// L = μ_r·μ₀/(2π)·ln(r_ext/r_in)
pub fn tubular_inductance<T: Scalar>(radius_in: T, radius_ext: T, mu_r: T) -> T {
    mu_r * T::from_f64(MU_0 / (2.0 * PI)) * (radius_ext / radius_in).ln()
}

/// GMR of an array of `num_wires` round wires laid on a circle.
///
/// With lay radius a, wire radius r and permeability μ_r:
/// GMR_wire = r·e^(−μ_r/4), ln GMR = (1/N)·ln(GMR_wire·N·a^(N−1)).
///
/// For a single wire the array degenerates to GMR_wire.
pub fn wire_array_gmr<T: Scalar>(lay_radius: T, num_wires: u32, radius_wire: T, mu_r: T) -> T {
    let gmr_wire = radius_wire * (-mu_r / T::from_f64(4.0)).exp();
    if num_wires == 1 {
        return gmr_wire;
    }
    let n = f64::from(num_wires);
    let log_gmr =
        (gmr_wire.ln() + T::from_f64(n.ln()) + T::from_f64(n - 1.0) * lay_radius.ln())
            / T::from_f64(n);
    log_gmr.exp()
}

/// GMR of a tubular conductor of inner radius r₁, outer radius r₂ and
/// relative permeability μ_r.
///
/// Derived from the internal inductance of a tube with uniform current
/// density; the solid-rod limit (r₁ = 0) gives r₂·e^(−μ_r/4) and the
/// thin-shell limit (r₁ → r₂) gives r₂.
pub fn tubular_gmr<T: Scalar>(radius_ext: T, radius_in: T, mu_r: T) -> LcResult<T> {
    if radius_ext.value() < radius_in.value() {
        return Err(LcError::geometry(format!(
            "radius_ext {} < radius_in {}",
            radius_ext, radius_in
        )));
    }
    if (radius_ext - radius_in).abs().value() < TOL {
        return Ok(radius_ext);
    }
    if radius_in.value() / radius_ext.value() < f64::EPSILON && radius_in.value() > TOL {
        return Ok(T::from_f64(f64::INFINITY));
    }
    let l_in = internal_inductance_factor(radius_ext, radius_in) * T::from_f64(MU_0 / (2.0 * PI)) * mu_r;
    Ok((radius_ext.ln() - T::from_f64(2.0 * PI / MU_0) * l_in).exp())
}

/// Relative permeability that reproduces a given GMR for a tubular region —
/// the inverse of [`tubular_gmr`].
pub fn equivalent_mu<T: Scalar>(gmr: T, radius_ext: T, radius_in: T) -> LcResult<T> {
    if radius_ext.value() < radius_in.value() {
        return Err(LcError::geometry(format!(
            "radius_ext {} < radius_in {}",
            radius_ext, radius_in
        )));
    }
    if (radius_ext - radius_in).abs().value() < TOL {
        return Ok(T::one());
    }
    Ok((radius_ext.ln() - gmr.ln()) / internal_inductance_factor(radius_ext, radius_in))
}

/// Dimensionless internal-inductance factor of a tube:
/// L_in·2π/(μ₀·μ_r) = term1 − term2 with
/// term1 = r₁⁴/(r₂²−r₁²)²·ln(r₂/r₁), term2 = (3r₁²−r₂²)/(4(r₂²−r₁²)).
fn internal_inductance_factor<T: Scalar>(radius_ext: T, radius_in: T) -> T {
    let r2_sq = radius_ext * radius_ext;
    let r1_sq = radius_in * radius_in;
    let diff = r2_sq - r1_sq;
    let term1 = if radius_in.value() == 0.0 {
        T::zero()
    } else {
        (r1_sq * r1_sq) / (diff * diff) * (radius_ext / radius_in).ln()
    };
    let term2 = (T::from_f64(3.0) * r1_sq - r2_sq) / (T::from_f64(4.0) * diff);
    term1 - term2
}

/// GMR of an existing stack extended by one layer.
///
/// With β = S_prev/(S_prev + S_new):
/// GMR_eq = GMR_prev^(β²)·GMR_new^((1−β)²)·GMD^(2β(1−β))
///
/// GMD is the geometric mean distance between the stack's outermost layer
/// and the new layer.
pub fn combine_gmr<T: Scalar>(gmr_prev: T, s_prev: T, gmr_new: T, s_new: T, gmd: T) -> T {
    let beta = s_prev / (s_prev + s_new);
    let complement = T::one() - beta;
    (gmr_prev.ln() * beta * beta
        + gmr_new.ln() * complement * complement
        + gmd.ln() * T::from_f64(2.0) * beta * complement)
        .exp()
}
