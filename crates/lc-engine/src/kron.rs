//! Kron elimination of grounded conductors.
//!
//! With the matrix partitioned into kept (p) and grounded (g) blocks, the
//! reduction is M_red = M_pp − M_pg·M_gg⁻¹·M_gp. The inner solve is a
//! partial-pivoting Gaussian elimination written directly over `Complex<T>`
//! so it works for the uncertainty-carrying scalar as well; pivots are
//! compared by central magnitude.

use lc_core::complex::norm;
use lc_core::error::{LcError, LcResult};
use lc_core::scalar::Scalar;
use num_complex::Complex;

/// Solve A·X = B for X in place, where A is n×n and B is n×m.
///
/// `freq_index` is only used to label a singular-matrix failure.
fn solve_multi<T: Scalar>(
    a: &mut [Vec<Complex<T>>],
    b: &mut [Vec<Complex<T>>],
    freq_index: usize,
) -> LcResult<()> {
    let n = a.len();
    let m = if n > 0 { b[0].len() } else { 0 };

    for col in 0..n {
        // Partial pivoting on the central magnitude
        let pivot_row = (col..n)
            .max_by(|&i, &j| {
                norm(a[i][col])
                    .value()
                    .partial_cmp(&norm(a[j][col]).value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("non-empty pivot range");
        let pivot_mag = norm(a[pivot_row][col]).value();
        if !(pivot_mag > 0.0) || pivot_mag.is_nan() {
            return Err(LcError::Numerical {
                freq_index,
                reason: format!("singular grounded block at column {col}"),
            });
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row][col] / pivot;
            for k in col..n {
                let delta = factor * a[col][k];
                a[row][k] = a[row][k] - delta;
            }
            for k in 0..m {
                let delta = factor * b[col][k];
                b[row][k] = b[row][k] - delta;
            }
        }
    }

    // Normalize: rows of A are now diagonal
    for row in 0..n {
        let pivot = a[row][row];
        for k in 0..m {
            b[row][k] = b[row][k] / pivot;
        }
    }
    Ok(())
}

/// Eliminate the rows/columns where `keep` is false.
///
/// Returns the reduced matrix over the kept indices, in their original
/// relative order.
pub fn kron_reduce<T: Scalar>(
    matrix: &[Vec<Complex<T>>],
    keep: &[bool],
    freq_index: usize,
) -> LcResult<Vec<Vec<Complex<T>>>> {
    let n = matrix.len();
    debug_assert_eq!(keep.len(), n);
    let kept: Vec<usize> = (0..n).filter(|&i| keep[i]).collect();
    let grounded: Vec<usize> = (0..n).filter(|&i| !keep[i]).collect();
    if grounded.is_empty() {
        return Ok(matrix.to_vec());
    }

    // M_gg and M_gp
    let mut m_gg: Vec<Vec<Complex<T>>> = grounded
        .iter()
        .map(|&i| grounded.iter().map(|&j| matrix[i][j]).collect())
        .collect();
    let mut m_gp: Vec<Vec<Complex<T>>> = grounded
        .iter()
        .map(|&i| kept.iter().map(|&j| matrix[i][j]).collect())
        .collect();

    // X = M_gg⁻¹·M_gp
    solve_multi(&mut m_gg, &mut m_gp, freq_index)?;

    // M_pp − M_pg·X
    let reduced = kept
        .iter()
        .map(|&i| {
            kept.iter()
                .enumerate()
                .map(|(jj, &j)| {
                    let mut acc = matrix[i][j];
                    for (gg, &g) in grounded.iter().enumerate() {
                        acc = acc - matrix[i][g] * m_gp[gg][jj];
                    }
                    acc
                })
                .collect()
        })
        .collect();
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn no_grounded_rows_is_identity() {
        let m = vec![vec![c(1.0, 0.0), c(0.5, 0.0)], vec![c(0.5, 0.0), c(2.0, 0.0)]];
        let r = kron_reduce(&m, &[true, true], 0).unwrap();
        assert_eq!(r, m);
    }

    #[test]
    fn two_by_two_scalar_reduction() {
        // Z_red = z11 − z12·z21/z22
        let m = vec![vec![c(4.0, 1.0), c(2.0, 0.0)], vec![c(2.0, 0.0), c(8.0, 0.0)]];
        let r = kron_reduce(&m, &[true, false], 0).unwrap();
        assert_eq!(r.len(), 1);
        let expected = c(4.0, 1.0) - c(2.0, 0.0) * c(2.0, 0.0) / c(8.0, 0.0);
        assert_relative_eq!(r[0][0].re, expected.re, epsilon = 1e-14);
        assert_relative_eq!(r[0][0].im, expected.im, epsilon = 1e-14);
    }

    #[test]
    fn symmetric_input_stays_symmetric() {
        let m = vec![
            vec![c(5.0, 2.0), c(1.0, 0.5), c(0.8, 0.2), c(0.3, 0.1)],
            vec![c(1.0, 0.5), c(5.0, 2.0), c(0.3, 0.1), c(0.8, 0.2)],
            vec![c(0.8, 0.2), c(0.3, 0.1), c(4.0, 1.0), c(0.2, 0.0)],
            vec![c(0.3, 0.1), c(0.8, 0.2), c(0.2, 0.0), c(4.0, 1.0)],
        ];
        let r = kron_reduce(&m, &[true, true, false, false], 0).unwrap();
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0][1].re, r[1][0].re, epsilon = 1e-12);
        assert_relative_eq!(r[0][1].im, r[1][0].im, epsilon = 1e-12);
    }

    #[test]
    fn singular_grounded_block_reports_frequency() {
        let m = vec![vec![c(1.0, 0.0), c(1.0, 0.0)], vec![c(1.0, 0.0), c(0.0, 0.0)]];
        // Grounded block is the zero 1×1 matrix
        let err = kron_reduce(&m, &[true, false], 7).unwrap_err();
        match err {
            LcError::Numerical { freq_index, .. } => assert_eq!(freq_index, 7),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn diagonal_grounded_block_reduces_exactly() {
        // With M_pg = 0 the kept block must come through untouched.
        let m = vec![
            vec![c(3.0, 1.0), c(0.0, 0.0)],
            vec![c(0.0, 0.0), c(9.0, 0.0)],
        ];
        let r = kron_reduce(&m, &[true, false], 0).unwrap();
        assert_relative_eq!(r[0][0].re, 3.0, epsilon = 1e-15);
        assert_relative_eq!(r[0][0].im, 1.0, epsilon = 1e-15);
    }
}
