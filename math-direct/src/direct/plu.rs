//! LU decomposition with partial pivoting
//!
//! At each step the row holding the largest magnitude in the pivot column is
//! swapped into the pivot position, so every multiplier stored in L satisfies
//! `|l| <= 1`. The result satisfies `P·A = L·U`.

use super::lu::lu_reconstruct;
use crate::config::PluConfig;
use crate::dense::{check_len, check_square};
use crate::packed::unpack;
use crate::permutation::Permutation;
use crate::traits::RealField;
use crate::{DirectError, Result};
use ndarray::{Array1, Array2};

/// Overwrite `a` with the packed L/U factors of `P·A` and fill `perm` with P
///
/// `perm` is reset to the identity first and must have length n. When a pivot
/// magnitude falls below `config.singular_tolerance` (or is NaN) the
/// factorization stops and [`DirectError::SingularMatrix`] is returned. At that
/// point `a` is only partially eliminated, but `perm` is still a valid
/// permutation that matches the current row order of `a`.
pub fn plu_factor<T: RealField>(
    a: &mut Array2<T>,
    perm: &mut Permutation,
    config: &PluConfig<T>,
) -> Result<()> {
    let n = check_square(a)?;
    if perm.len() != n {
        return Err(DirectError::DimensionMismatch {
            expected: n,
            got: perm.len(),
        });
    }
    log::debug!("PLU factorization of a {}x{} matrix", n, n);

    perm.reset();

    for k in 0..n {
        // Ties go to the first row scanned
        let mut max_val = a[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = a[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != k {
            for j in 0..n {
                a.swap([k, j], [max_row, j]);
            }
            perm.swap(k, max_row);
        }

        let pivot = a[[k, k]];
        if !(pivot.abs() >= config.singular_tolerance) {
            log::warn!(
                "PLU: singular pivot {:e} at step {} of {}",
                pivot.to_f64_lossy(),
                k,
                n
            );
            return Err(DirectError::SingularMatrix {
                step: k,
                pivot: pivot.to_f64_lossy(),
            });
        }

        for i in (k + 1)..n {
            let mult = a[[i, k]] / pivot;
            a[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
        }

        if config.print_interval > 0 && (k + 1) % config.print_interval == 0 {
            log::info!(
                "PLU step {}/{}: pivot row {}, |pivot| = {:.6e}",
                k + 1,
                n,
                max_row,
                max_val.to_f64_lossy()
            );
        }
    }

    Ok(())
}

/// PLU factorization result
///
/// Owns the packed factors and the row permutation so one factorization can
/// serve many right-hand sides.
#[derive(Debug, Clone)]
pub struct PluFactorization<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<T>,
    /// Row permutation: row `i` of `lu` comes from row `perm[i]` of A
    pub perm: Permutation,
    /// Matrix dimension
    pub n: usize,
}

impl<T: RealField> PluFactorization<T> {
    /// Factor a copy of `a`, leaving the input untouched
    pub fn factor(a: &Array2<T>, config: &PluConfig<T>) -> Result<Self> {
        let mut lu = a.clone();
        let n = check_square(&lu)?;
        let mut perm = Permutation::identity(n);
        plu_factor(&mut lu, &mut perm, config)?;
        Ok(Self { lu, perm, n })
    }

    /// Solve `A·x = b` using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_len(b, self.n)?;

        // Forward substitution: L·y = P·b
        let mut x = self.perm.permute_vec(b)?;
        for i in 0..self.n {
            for j in 0..i {
                let update = self.lu[[i, j]] * x[j];
                x[i] -= update;
            }
        }

        // Backward substitution: U·x = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let update = self.lu[[i, j]] * x[j];
                x[i] -= update;
            }
            x[i] /= self.lu[[i, i]];
        }

        Ok(x)
    }

    /// Unit lower triangular factor
    pub fn lower(&self) -> Result<Array2<T>> {
        let (lower, _) = unpack(&self.lu)?;
        Ok(lower)
    }

    /// Upper triangular factor
    pub fn upper(&self) -> Result<Array2<T>> {
        let (_, upper) = unpack(&self.lu)?;
        Ok(upper)
    }

    /// Rebuild A as `Pᵀ·L·U`
    pub fn reconstruct(&self) -> Result<Array2<T>> {
        let mut product = self.lu.clone();
        lu_reconstruct(&mut product)?;
        self.perm.inverse().permute_rows(&product)
    }

    /// Determinant of A: sign(P) times the product of U's diagonal
    pub fn determinant(&self) -> T {
        let diag = self.lu.diag().iter().fold(T::one(), |acc, &d| acc * d);
        if self.perm.sign() < 0 { -diag } else { diag }
    }
}
