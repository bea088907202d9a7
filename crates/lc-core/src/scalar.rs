//! Uncertainty-carrying scalar arithmetic.
//!
//! Every kernel in the toolkit is generic over a [`Scalar`]: either a plain
//! `f64`, or an [`Uncertain`] value that carries a first-order derivative
//! against a single perturbation identity. Propagation happens once, inside
//! the operator overloads here; downstream formulas are written exactly as
//! they would be for `f64`.
//!
//! The derivative is stored signed, so quantities that share an origin
//! cancel correctly: `x - x` has zero uncertainty, and `a + b` combines as
//! √(σₐ² + σᵦ² + 2·cov(a,b)) instead of naive independent quadrature.
//! The reported uncertainty is the absolute value of the carried derivative.

use num_traits::{Num, One, Zero};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A numeric scalar the toolkit can compute with.
///
/// Implemented for `f64` (uncertainty identically zero) and for
/// [`Uncertain`]. The `Num` supertrait is what lets
/// `num_complex::Complex<T>` perform its four arithmetic operations on any
/// `Scalar`, so complex series/shunt quantities propagate tolerances too.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Num
    + Neg<Output = Self>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Lift a plain float into this scalar kind (uncertainty zero).
    fn from_f64(v: f64) -> Self;

    /// Central value.
    fn value(self) -> f64;

    /// Standard uncertainty (≥ 0, or NaN if the value is NaN).
    fn sigma(self) -> f64;

    /// Natural logarithm (NaN for negative input, −∞ for zero).
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Square root (NaN for negative input).
    fn sqrt(self) -> Self;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Integer power.
    fn powi(self, n: i32) -> Self;

    /// √(self² + other²) without intermediate overflow.
    fn hypot(self, other: Self) -> Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_infinite(self) -> bool;

    /// The operand with the larger central value.
    fn max(self, other: Self) -> Self {
        if other.value() > self.value() { other } else { self }
    }

    /// The operand with the smaller central value.
    fn min(self, other: Self) -> Self {
        if other.value() < self.value() { other } else { self }
    }
}

/// Field-level serde adapter for scalar values that may be infinite.
///
/// JSON has no literal for ±Inf (serde_json would emit `null` and refuse to
/// read it back), so fields that can legitimately hold an infinity — air
/// resistivity, semi-infinite layer thickness — serialize it as the strings
/// `"inf"` / `"-inf"`. Finite values pass through untouched.
pub mod serde_scalar {
    use super::Scalar;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Scalar,
        S: Serializer,
    {
        if value.is_infinite() {
            serializer.serialize_str(if value.value() > 0.0 { "inf" } else { "-inf" })
        } else {
            value.serialize(serializer)
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Scalar,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Text(String),
            Number(T),
        }
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Text(s) => match s.as_str() {
                "inf" => Ok(T::from_f64(f64::INFINITY)),
                "-inf" => Ok(T::from_f64(f64::NEG_INFINITY)),
                other => Err(serde::de::Error::custom(format!(
                    "expected a number, \"inf\" or \"-inf\", got \"{other}\""
                ))),
            },
            Repr::Number(v) => Ok(v),
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(self) -> f64 {
        self
    }

    #[inline]
    fn sigma(self) -> f64 {
        0.0
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn hypot(self, other: Self) -> Self {
        f64::hypot(self, other)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// A value with a first-order propagated standard uncertainty.
///
/// Internally a dual number: the `deriv` field is the signed derivative of
/// this quantity with respect to one shared perturbation variable. The
/// public uncertainty is `deriv.abs()`; serialization uses the
/// `{value, uncertainty}` shape with a non-negative uncertainty.
///
/// Equality and ordering compare central values only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "UncertainDe", into = "UncertainRepr")]
pub struct Uncertain {
    value: f64,
    deriv: f64,
}

/// Wire shape of [`Uncertain`]: `{value, uncertainty}` with σ ≥ 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct UncertainRepr {
    value: f64,
    uncertainty: f64,
}

/// Accepted input shapes: the `{value, uncertainty}` pair, or a bare number
/// promoted to an exact value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UncertainDe {
    Pair { value: f64, uncertainty: f64 },
    Bare(f64),
}

impl TryFrom<UncertainDe> for Uncertain {
    type Error = String;

    fn try_from(de: UncertainDe) -> Result<Self, Self::Error> {
        match de {
            UncertainDe::Pair { value, uncertainty } => {
                if uncertainty < 0.0 {
                    return Err(format!("negative uncertainty {uncertainty}"));
                }
                Ok(Uncertain::new(value, uncertainty))
            }
            UncertainDe::Bare(value) => Ok(Uncertain::exact(value)),
        }
    }
}

impl From<Uncertain> for UncertainRepr {
    fn from(u: Uncertain) -> Self {
        UncertainRepr {
            value: u.value,
            uncertainty: u.sigma(),
        }
    }
}

impl Uncertain {
    /// Create an uncertain value from a central value and a standard
    /// uncertainty.
    ///
    /// # Panics
    /// Panics if `uncertainty` is negative (NaN is tolerated and propagates).
    pub fn new(value: f64, uncertainty: f64) -> Self {
        assert!(
            !(uncertainty < 0.0),
            "uncertainty must be non-negative, got {uncertainty}"
        );
        Self {
            value,
            deriv: uncertainty,
        }
    }

    /// Create a value with zero uncertainty.
    #[inline]
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            deriv: 0.0,
        }
    }
}

impl From<f64> for Uncertain {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.value, self.deriv.abs())
    }
}

impl PartialEq for Uncertain {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Uncertain {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ============================================================================
// Arithmetic with derivative carry
// ============================================================================

impl Add for Uncertain {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            deriv: self.deriv + rhs.deriv,
        }
    }
}

impl Sub for Uncertain {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            deriv: self.deriv - rhs.deriv,
        }
    }
}

impl Mul for Uncertain {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            deriv: self.value * rhs.deriv + rhs.value * self.deriv,
        }
    }
}

impl Div for Uncertain {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self {
            value: self.value / rhs.value,
            deriv: (self.deriv * rhs.value - self.value * rhs.deriv) / (rhs.value * rhs.value),
        }
    }
}

impl Rem for Uncertain {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        // d(a mod b)/dp = da − trunc(a/b)·db almost everywhere
        Self {
            value: self.value % rhs.value,
            deriv: self.deriv - (self.value / rhs.value).trunc() * rhs.deriv,
        }
    }
}

impl Neg for Uncertain {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            deriv: -self.deriv,
        }
    }
}

// Mixed operands promote the plain float to an exact Uncertain.

impl Add<f64> for Uncertain {
    type Output = Uncertain;
    fn add(self, rhs: f64) -> Uncertain {
        self + Uncertain::exact(rhs)
    }
}

impl Add<Uncertain> for f64 {
    type Output = Uncertain;
    fn add(self, rhs: Uncertain) -> Uncertain {
        Uncertain::exact(self) + rhs
    }
}

impl Sub<f64> for Uncertain {
    type Output = Uncertain;
    fn sub(self, rhs: f64) -> Uncertain {
        self - Uncertain::exact(rhs)
    }
}

impl Sub<Uncertain> for f64 {
    type Output = Uncertain;
    fn sub(self, rhs: Uncertain) -> Uncertain {
        Uncertain::exact(self) - rhs
    }
}

impl Mul<f64> for Uncertain {
    type Output = Uncertain;
    fn mul(self, rhs: f64) -> Uncertain {
        self * Uncertain::exact(rhs)
    }
}

impl Mul<Uncertain> for f64 {
    type Output = Uncertain;
    fn mul(self, rhs: Uncertain) -> Uncertain {
        Uncertain::exact(self) * rhs
    }
}

impl Div<f64> for Uncertain {
    type Output = Uncertain;
    fn div(self, rhs: f64) -> Uncertain {
        self / Uncertain::exact(rhs)
    }
}

impl Div<Uncertain> for f64 {
    type Output = Uncertain;
    fn div(self, rhs: Uncertain) -> Uncertain {
        Uncertain::exact(self) / rhs
    }
}

impl Zero for Uncertain {
    fn zero() -> Self {
        Self::exact(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl One for Uncertain {
    fn one() -> Self {
        Self::exact(1.0)
    }
}

impl Num for Uncertain {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        <f64 as Num>::from_str_radix(s, radix).map(Self::exact)
    }
}

impl Scalar for Uncertain {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::exact(v)
    }

    #[inline]
    fn value(self) -> f64 {
        self.value
    }

    #[inline]
    fn sigma(self) -> f64 {
        self.deriv.abs()
    }

    fn ln(self) -> Self {
        Self {
            value: self.value.ln(),
            deriv: self.deriv / self.value,
        }
    }

    fn exp(self) -> Self {
        let e = self.value.exp();
        Self {
            value: e,
            deriv: e * self.deriv,
        }
    }

    fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        Self {
            value: s,
            deriv: self.deriv / (2.0 * s),
        }
    }

    fn sin(self) -> Self {
        Self {
            value: self.value.sin(),
            deriv: self.value.cos() * self.deriv,
        }
    }

    fn cos(self) -> Self {
        Self {
            value: self.value.cos(),
            deriv: -self.value.sin() * self.deriv,
        }
    }

    fn atan2(self, other: Self) -> Self {
        // ∂atan2(y,x)/∂y = x/(x²+y²), ∂atan2(y,x)/∂x = −y/(x²+y²)
        let denom = other.value * other.value + self.value * self.value;
        Self {
            value: self.value.atan2(other.value),
            deriv: (other.value * self.deriv - self.value * other.deriv) / denom,
        }
    }

    fn abs(self) -> Self {
        Self {
            value: self.value.abs(),
            deriv: self.deriv * self.value.signum(),
        }
    }

    fn powi(self, n: i32) -> Self {
        Self {
            value: self.value.powi(n),
            deriv: f64::from(n) * self.value.powi(n - 1) * self.deriv,
        }
    }

    fn hypot(self, other: Self) -> Self {
        let h = self.value.hypot(other.value);
        Self {
            value: h,
            deriv: (self.value * self.deriv + other.value * other.deriv) / h,
        }
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.value.is_nan()
    }

    #[inline]
    fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    #[inline]
    fn is_infinite(self) -> bool {
        self.value.is_infinite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn exact_values_carry_zero_uncertainty() {
        let x = Uncertain::exact(3.5);
        assert_eq!(x.value(), 3.5);
        assert_eq!(x.sigma(), 0.0);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_uncertainty_rejected() {
        let _ = Uncertain::new(1.0, -0.1);
    }

    #[test]
    fn shared_origin_difference_cancels() {
        let x = Uncertain::new(10.0, 0.5);
        let d = x - x;
        assert_eq!(d.value(), 0.0);
        assert_eq!(d.sigma(), 0.0);
    }

    #[test]
    fn sum_of_correlated_values_adds_linearly() {
        // Single perturbation identity: x + x has σ = 2σₓ, not √2·σₓ.
        let x = Uncertain::new(2.0, 0.3);
        assert_relative_eq!((x + x).sigma(), 0.6, epsilon = 1e-15);
    }

    #[test]
    fn product_propagates_relative_uncertainty() {
        // (x·x) → σ = 2·|x|·σₓ
        let x = Uncertain::new(4.0, 0.1);
        let sq = x * x;
        assert_relative_eq!(sq.value(), 16.0, epsilon = 1e-15);
        assert_relative_eq!(sq.sigma(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn division_by_self_is_exact_one() {
        let x = Uncertain::new(7.0, 0.2);
        let r = x / x;
        assert_relative_eq!(r.value(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(r.sigma(), 0.0, epsilon = 1e-16);
    }

    #[test]
    fn ln_exp_round_trip_preserves_derivative() {
        let x = Uncertain::new(1.3, 0.05);
        let y = x.ln().exp();
        assert_relative_eq!(y.value(), 1.3, epsilon = 1e-12);
        assert_relative_eq!(y.sigma(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn sqrt_halves_relative_uncertainty() {
        let x = Uncertain::new(9.0, 0.6);
        let s = x.sqrt();
        assert_relative_eq!(s.value(), 3.0, epsilon = 1e-15);
        // σ/(2√x) = 0.6/6
        assert_relative_eq!(s.sigma(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn sin_cos_derivatives() {
        let x = Uncertain::new(0.5, 0.01);
        assert_relative_eq!(x.sin().sigma(), 0.5f64.cos() * 0.01, epsilon = 1e-15);
        assert_relative_eq!(x.cos().sigma(), 0.5f64.sin() * 0.01, epsilon = 1e-15);
    }

    #[test]
    fn mixed_operands_promote() {
        let x = Uncertain::new(2.0, 0.1);
        let y = 3.0 * x + 1.0;
        assert_relative_eq!(y.value(), 7.0, epsilon = 1e-15);
        assert_relative_eq!(y.sigma(), 0.3, epsilon = 1e-15);
    }

    #[test]
    fn nan_propagates() {
        let x = Uncertain::new(-1.0, 0.1);
        assert!(x.sqrt().is_nan());
        assert!(x.ln().is_nan());
    }

    #[test]
    fn infinity_is_permitted() {
        let rho_air = Uncertain::exact(f64::INFINITY);
        assert!(rho_air.is_infinite());
        assert_eq!((1.0 / rho_air).value(), 0.0);
    }

    #[test]
    fn equality_is_on_central_value() {
        assert_eq!(Uncertain::new(1.0, 0.1), Uncertain::new(1.0, 0.9));
        assert!(Uncertain::new(1.0, 0.1) < Uncertain::new(2.0, 0.0));
    }

    #[test]
    fn serde_round_trip_keeps_value_and_sigma() {
        let x = Uncertain::new(0.0235, 0.0005);
        let json = serde_json::to_string(&x).unwrap();
        assert!(json.contains("uncertainty"));
        let back: Uncertain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), x.value());
        assert_eq!(back.sigma(), x.sigma());
    }

    #[test]
    fn bare_number_deserializes_as_exact() {
        let x: Uncertain = serde_json::from_str("2.5").unwrap();
        assert_eq!(x.value(), 2.5);
        assert_eq!(x.sigma(), 0.0);
    }

    #[test]
    fn negative_uncertainty_rejected_on_deserialize() {
        let res: Result<Uncertain, _> =
            serde_json::from_str(r#"{"value": 1.0, "uncertainty": -0.5}"#);
        assert!(res.is_err());
    }

    #[test]
    fn serde_scalar_round_trips_infinity() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            #[serde(with = "super::serde_scalar")]
            x: f64,
        }
        let json = serde_json::to_string(&Wrap { x: f64::INFINITY }).unwrap();
        assert!(json.contains("\"inf\""));
        let back: Wrap = serde_json::from_str(&json).unwrap();
        assert!(back.x.is_infinite());

        let finite: Wrap = serde_json::from_str(r#"{"x": 3.25}"#).unwrap();
        assert_eq!(finite.x, 3.25);
    }

    #[test]
    fn negated_value_serializes_with_positive_uncertainty() {
        let x = -Uncertain::new(5.0, 0.2);
        let json = serde_json::to_string(&x).unwrap();
        let back: Uncertain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), -5.0);
        assert_relative_eq!(back.sigma(), 0.2, epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn zero_sigma_path_matches_f64(v in -1.0e3f64..1.0e3, w in 0.1f64..1.0e3) {
            let uv = Uncertain::exact(v);
            let uw = Uncertain::exact(w);
            prop_assert_eq!((uv * uw + uv / uw).value(), v * w + v / w);
            prop_assert_eq!((uv * uw + uv / uw).sigma(), 0.0);
            prop_assert_eq!(uw.ln().value(), w.ln());
            prop_assert_eq!(uw.ln().sigma(), 0.0);
        }

        #[test]
        fn hypot_matches_f64(a in -100.0f64..100.0, b in -100.0f64..100.0) {
            let h = Uncertain::exact(a).hypot(Uncertain::exact(b));
            prop_assert_eq!(h.value(), a.hypot(b));
        }
    }
}
