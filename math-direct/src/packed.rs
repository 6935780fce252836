//! Packed L/U storage
//!
//! A factorized n×n matrix holds both triangular factors: the strict lower
//! triangle stores the multipliers of L (whose unit diagonal is implicit) and
//! the upper triangle including the diagonal stores U.

use crate::dense::check_square;
use crate::traits::RealField;
use crate::{DirectError, Result};
use ndarray::Array2;

/// Split a packed matrix into explicit `(L, U)`
///
/// L is unit lower triangular, U is upper triangular; both are n×n.
pub fn unpack<T: RealField>(packed: &Array2<T>) -> Result<(Array2<T>, Array2<T>)> {
    let n = check_square(packed)?;
    let mut lower = Array2::eye(n);
    let mut upper = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..i {
            lower[[i, j]] = packed[[i, j]];
        }
        for j in i..n {
            upper[[i, j]] = packed[[i, j]];
        }
    }
    Ok((lower, upper))
}

/// Largest multiplier magnitude stored in the strict lower triangle
///
/// After partial pivoting this never exceeds one.
pub fn max_multiplier<T: RealField>(packed: &Array2<T>) -> Result<T> {
    let n = check_square(packed)?;
    let mut max = T::zero();
    for i in 1..n {
        for j in 0..i {
            max = max.max(packed[[i, j]].abs());
        }
    }
    Ok(max)
}

/// Explicit triangular factors of an LU factorization
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularFactors<T: RealField> {
    /// Unit lower triangular factor
    pub lower: Array2<T>,
    /// Upper triangular factor
    pub upper: Array2<T>,
}

impl<T: RealField> TriangularFactors<T> {
    /// Split a packed L/U matrix into its two explicit factors
    pub fn from_packed(packed: &Array2<T>) -> Result<Self> {
        let (lower, upper) = unpack(packed)?;
        Ok(Self { lower, upper })
    }

    /// Pack back into a single matrix, dropping L's unit diagonal
    pub fn into_packed(self) -> Result<Array2<T>> {
        let n = check_square(&self.lower)?;
        let m = check_square(&self.upper)?;
        if n != m {
            return Err(DirectError::DimensionMismatch {
                expected: n,
                got: m,
            });
        }
        let mut packed = self.upper;
        for i in 1..n {
            for j in 0..i {
                packed[[i, j]] = self.lower[[i, j]];
            }
        }
        Ok(packed)
    }

    /// The product L·U
    pub fn product(&self) -> Array2<T> {
        self.lower.dot(&self.upper)
    }
}
