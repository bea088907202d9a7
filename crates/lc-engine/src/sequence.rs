//! Sequence-component reduction of three-phase parameter tensors.
//!
//! For a transposed (or geometrically symmetric, e.g. trifoil) circuit the
//! phase matrix is characterized by its mean self and mean mutual entries;
//! the positive/negative-sequence impedance is Z₁ = Z_s − Z_m and the
//! zero-sequence impedance Z₀ = Z_s + 2·Z_m. The same reduction applies to
//! the shunt admittance tensor.

use crate::line_parameters::LineParameters;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use num_complex::Complex;

/// Per-frequency sequence impedances and admittances of a three-phase
/// circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceParameters<T> {
    /// Zero-sequence series impedance (Ω/m)
    pub z0: Vec<Complex<T>>,
    /// Positive-sequence series impedance (Ω/m)
    pub z1: Vec<Complex<T>>,
    /// Zero-sequence shunt admittance (S/m)
    pub y0: Vec<Complex<T>>,
    /// Positive-sequence shunt admittance (S/m)
    pub y1: Vec<Complex<T>>,
}

/// Reduce a reduced three-phase [`LineParameters`] to sequence components
/// under the balanced approximation.
pub fn sequence_parameters<T: Scalar>(
    params: &LineParameters<T>,
) -> LcResult<SequenceParameters<T>> {
    if params.num_conductors() != 3 {
        return Err(LcError::input(format!(
            "sequence reduction needs a 3-phase matrix, got {} rows",
            params.num_conductors()
        )));
    }
    let n_freq = params.num_frequencies();
    let third = T::from_f64(1.0 / 3.0);
    let sixth = T::from_f64(1.0 / 6.0);
    let two = T::from_f64(2.0);

    let mut out = SequenceParameters {
        z0: Vec::with_capacity(n_freq),
        z1: Vec::with_capacity(n_freq),
        y0: Vec::with_capacity(n_freq),
        y1: Vec::with_capacity(n_freq),
    };
    for k in 0..n_freq {
        let (zs, zm) = mean_self_mutual(params.z(), k, third, sixth);
        out.z1.push(zs - zm);
        out.z0.push(zs + zm * two);
        let (ys, ym) = mean_self_mutual(params.y(), k, third, sixth);
        out.y1.push(ys - ym);
        out.y0.push(ys + ym * two);
    }
    Ok(out)
}

fn mean_self_mutual<T: Scalar>(
    m: &ndarray::Array3<Complex<T>>,
    k: usize,
    third: T,
    sixth: T,
) -> (Complex<T>, Complex<T>) {
    let mean_self = (m[[0, 0, k]] + m[[1, 1, k]] + m[[2, 2, k]]) * third;
    let mean_mutual = (m[[0, 1, k]]
        + m[[0, 2, k]]
        + m[[1, 2, k]]
        + m[[1, 0, k]]
        + m[[2, 0, k]]
        + m[[2, 1, k]])
        * sixth;
    (mean_self, mean_mutual)
}
