pub mod complex;
pub mod constants;
pub mod error;
pub mod scalar;
pub mod units;

pub use error::{LcError, LcResult};
pub use num_complex::Complex64;
pub use scalar::{Scalar, Uncertain};
