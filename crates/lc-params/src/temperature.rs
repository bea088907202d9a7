//! Resistivity temperature correction.

use lc_core::scalar::Scalar;

/// Linear temperature correction factor k = 1 + α·(T − T₀).
///
/// Applied multiplicatively to DC resistance. The function does not clamp:
/// a physically meaningless negative factor is returned as-is, validation of
/// the admissible temperature window happens at part construction.
#[inline]
pub fn correction_factor<T: Scalar>(alpha: T, temperature: T, t_ref: T) -> T {
    T::one() + alpha * (temperature - t_ref)
}
