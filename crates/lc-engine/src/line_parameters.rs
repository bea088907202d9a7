//! The engine's result: stacked per-frequency Z and Y matrices.

use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use ndarray::Array3;
use num_complex::Complex;

/// Per-unit-length series impedance (Ω/m) and shunt admittance (S/m)
/// tensors, shaped `[n × n × n_freq]` with n conductors (raw) or phases
/// (reduced). Indexing is stable: it follows cable order, then component
/// order, or ascending phase number after reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct LineParameters<T> {
    z: Array3<Complex<T>>,
    y: Array3<Complex<T>>,
}

impl<T: Scalar> LineParameters<T> {
    /// Wrap the two tensors, checking they are square and congruent.
    pub fn new(z: Array3<Complex<T>>, y: Array3<Complex<T>>) -> LcResult<Self> {
        let (zn, zm, zf) = z.dim();
        let (yn, ym, yf) = y.dim();
        if zn != zm || yn != ym {
            return Err(LcError::input(format!(
                "Z and Y must be square along the first two axes, got {zn}×{zm} and {yn}×{ym}"
            )));
        }
        if (zn, zf) != (yn, yf) {
            return Err(LcError::input(format!(
                "Z is {zn}×{zm}×{zf} but Y is {yn}×{ym}×{yf}"
            )));
        }
        Ok(Self { z, y })
    }

    /// Series impedance tensor (Ω/m).
    pub fn z(&self) -> &Array3<Complex<T>> {
        &self.z
    }

    /// Shunt admittance tensor (S/m).
    pub fn y(&self) -> &Array3<Complex<T>> {
        &self.y
    }

    /// Size of the square first two axes.
    pub fn num_conductors(&self) -> usize {
        self.z.dim().0
    }

    pub fn num_frequencies(&self) -> usize {
        self.z.dim().2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn congruent_tensors_accepted() {
        let z = Array3::<Complex64>::zeros((3, 3, 10));
        let y = Array3::<Complex64>::zeros((3, 3, 10));
        let lp = LineParameters::new(z, y).unwrap();
        assert_eq!(lp.num_conductors(), 3);
        assert_eq!(lp.num_frequencies(), 10);
    }

    #[test]
    fn non_square_rejected() {
        let z = Array3::<Complex64>::zeros((3, 2, 10));
        let y = Array3::<Complex64>::zeros((3, 3, 10));
        assert!(LineParameters::new(z, y).is_err());
    }

    #[test]
    fn mismatched_frequency_axes_rejected() {
        let z = Array3::<Complex64>::zeros((3, 3, 10));
        let y = Array3::<Complex64>::zeros((3, 3, 9));
        assert!(LineParameters::new(z, y).is_err());
    }
}
