//! Gaussian elimination solver
//!
//! Forward elimination without pivoting followed by back-substitution, both
//! performed in place on the caller's buffers.

use crate::Result;
use crate::dense::{check_len, check_square};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve `A·x = b` in place
///
/// On return `b` holds the solution `x`. `a` is destroyed: its strict lower
/// triangle holds the elimination multipliers and its upper triangle the
/// reduced system.
///
/// The pivot at step k is always `a[k][k]`. A zero or tiny pivot is not
/// detected and yields Inf/NaN in `b`; use [`crate::plu_factor`] when the
/// system may need row exchanges.
pub fn solve<T: RealField>(a: &mut Array2<T>, b: &mut Array1<T>) -> Result<()> {
    let n = check_square(a)?;
    check_len(b, n)?;
    log::debug!("Gaussian elimination on a {}x{} system", n, n);

    for k in 0..n {
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            // The eliminated entry is free to hold the multiplier
            let mult = a[[i, k]] / pivot;
            a[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
            let update = mult * b[k];
            b[i] -= update;
        }
    }

    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let update = a[[i, j]] * b[j];
            b[i] -= update;
        }
        b[i] /= a[[i, i]];
    }

    Ok(())
}
