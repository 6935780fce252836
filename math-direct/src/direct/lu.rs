//! Unpivoted LU decomposition (Doolittle form)
//!
//! Factors A = L·U in place into the packed layout, and rebuilds A from a
//! packed factorization. The two routines are exact inverses of each other in
//! exact arithmetic, which makes [`lu_reconstruct`] the natural oracle for
//! testing [`lu_factor`].

use crate::Result;
use crate::dense::check_square;
use crate::traits::RealField;
use ndarray::Array2;

/// Overwrite `a` with its packed L/U factors, without pivoting
///
/// Step k first finalizes row k of U, then column k of L, since the latter
/// divides by the freshly computed `U[k][k]`. A zero pivot is not detected and
/// leaves Inf/NaN in the factors.
pub fn lu_factor<T: RealField>(a: &mut Array2<T>) -> Result<()> {
    let n = check_square(a)?;
    log::debug!("LU factorization of a {}x{} matrix", n, n);

    for k in 0..n {
        // U[k][i] -= L[k][j] * U[j][i]
        for i in k..n {
            for j in 0..k {
                let update = a[[k, j]] * a[[j, i]];
                a[[k, i]] -= update;
            }
        }

        // L[i][k] = (A[i][k] - L[i][j] * U[j][k]) / U[k][k]
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            for j in 0..k {
                let update = a[[i, j]] * a[[j, k]];
                a[[i, k]] -= update;
            }
            a[[i, k]] /= pivot;
        }
    }

    Ok(())
}

/// Overwrite a packed L/U matrix with the product L·U
///
/// Steps run from the last pivot down to the first so that every entry read
/// still holds its factored value. Applying this to a matrix that is not in
/// packed form produces meaningless output.
pub fn lu_reconstruct<T: RealField>(a: &mut Array2<T>) -> Result<()> {
    let n = check_square(a)?;
    log::debug!("LU reconstruction of a {}x{} matrix", n, n);

    for k in (0..n).rev() {
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            a[[i, k]] *= pivot;
            for j in 0..k {
                let update = a[[i, j]] * a[[j, k]];
                a[[i, k]] += update;
            }
        }

        for i in k..n {
            for j in 0..k {
                let update = a[[k, j]] * a[[j, i]];
                a[[k, i]] += update;
            }
        }
    }

    Ok(())
}
