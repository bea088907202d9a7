//! Complex operations over uncertainty-carrying scalars.
//!
//! `num_complex::Complex<T>` already provides `+ − × ÷` for any `T: Num`,
//! which every [`Scalar`] satisfies. Its transcendental methods however are
//! gated on `T: Float`, which the dual-number scalar deliberately does not
//! implement, so the principal-branch functions needed by the kernels live
//! here as free functions.

use crate::scalar::Scalar;
use num_complex::Complex;

/// Imaginary unit as a `Complex<T>`.
#[inline]
pub fn j<T: Scalar>() -> Complex<T> {
    Complex::new(T::zero(), T::one())
}

/// Lift a real scalar into the complex plane.
#[inline]
pub fn re<T: Scalar>(x: T) -> Complex<T> {
    Complex::new(x, T::zero())
}

/// Magnitude |z| = √(re² + im²).
#[inline]
pub fn norm<T: Scalar>(z: Complex<T>) -> T {
    z.re.hypot(z.im)
}

/// Principal-branch complex natural logarithm.
///
/// ln z = ln|z| + j·atan2(im, re), with the argument in (−π, π].
pub fn ln<T: Scalar>(z: Complex<T>) -> Complex<T> {
    Complex::new(norm(z).ln(), z.im.atan2(z.re))
}

/// Complex exponential.
pub fn exp<T: Scalar>(z: Complex<T>) -> Complex<T> {
    let m = z.re.exp();
    Complex::new(m * z.im.cos(), m * z.im.sin())
}

/// Principal-branch complex square root (half-angle form).
pub fn sqrt<T: Scalar>(z: Complex<T>) -> Complex<T> {
    let m = norm(z).sqrt();
    let half_arg = z.im.atan2(z.re) * T::from_f64(0.5);
    Complex::new(m * half_arg.cos(), m * half_arg.sin())
}

/// Parallel (reciprocal-sum) combination of two complex quantities:
/// z_eq = 1/(1/z₁ + 1/z₂).
pub fn parallel<T: Scalar>(z1: Complex<T>, z2: Complex<T>) -> Complex<T> {
    let one = re(T::one());
    one / (one / z1 + one / z2)
}
