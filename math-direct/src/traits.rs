//! Scalar abstraction for the dense kernels
//!
//! The elimination routines only need real field arithmetic, an absolute value
//! for pivot selection and a lossless-enough conversion to `f64` for error
//! reporting and logging. [`RealField`] bundles those requirements.

use ndarray::LinalgScalar;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for real scalar types accepted by the direct solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, all tolerances are tuned for it)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + LinalgScalar
    + Send
    + Sync
    + Debug
    + Display
    + 'static
{
    /// Convert to `f64`, mapping unrepresentable values to NaN
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl RealField for f64 {}

impl RealField for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossy_conversions() {
        assert_eq!(2.5_f32.to_f64_lossy(), 2.5);
        assert_eq!((-1.25_f64).to_f64_lossy(), -1.25);
        assert!(f32::NAN.to_f64_lossy().is_nan());
    }
}
