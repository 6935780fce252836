//! Row permutations produced by partial pivoting
//!
//! A [`Permutation`] stores the forward index array: `perm[i]` is the original
//! row that now occupies position `i`. Applying it to a matrix therefore gives
//! `(P·A)[i] = A[perm[i]]`.

use crate::traits::RealField;
use crate::{DirectError, Result};
use ndarray::{Array1, Array2, Axis};
use std::ops::Index;

/// Returns `true` if `indices` is a bijection on `0..indices.len()`
pub fn is_permutation(indices: &[usize]) -> bool {
    let mut seen = vec![false; indices.len()];
    for &idx in indices {
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// A bijective mapping on `0..n` describing a row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
}

impl Permutation {
    /// The identity permutation on `0..n`
    pub fn identity(n: usize) -> Self {
        Self {
            forward: (0..n).collect(),
        }
    }

    /// Wrap an index array after checking that it is a valid permutation
    pub fn from_vec(forward: Vec<usize>) -> Result<Self> {
        if !is_permutation(&forward) {
            return Err(DirectError::InvalidPermutation(format!(
                "{:?} is not a bijection on 0..{}",
                forward,
                forward.len()
            )));
        }
        Ok(Self { forward })
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The forward index array
    pub fn as_slice(&self) -> &[usize] {
        &self.forward
    }

    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Reset to the identity, keeping the length
    pub fn reset(&mut self) {
        for (i, p) in self.forward.iter_mut().enumerate() {
            *p = i;
        }
    }

    /// Record that rows `a` and `b` exchanged positions
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.forward.swap(a, b);
    }

    /// The inverse permutation: `inv[perm[i]] = i`
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.forward.len()];
        for (i, &p) in self.forward.iter().enumerate() {
            inverse[p] = i;
        }
        Self { forward: inverse }
    }

    /// The permutation equivalent to applying `self` first, then `other`
    ///
    /// `other.permute_rows(&self.permute_rows(a))` equals
    /// `self.compose(other).permute_rows(a)`.
    pub fn compose(&self, other: &Permutation) -> Result<Self> {
        if self.len() != other.len() {
            return Err(DirectError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(Self {
            forward: other.forward.iter().map(|&i| self.forward[i]).collect(),
        })
    }

    /// +1 for an even permutation, -1 for an odd one
    pub fn sign(&self) -> i32 {
        let n = self.forward.len();
        let mut visited = vec![false; n];
        let mut cycles = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = self.forward[i];
            }
        }
        if (n - cycles) % 2 == 0 { 1 } else { -1 }
    }

    /// Compute `P·A`: row `i` of the result is row `perm[i]` of `a`
    pub fn permute_rows<T: RealField>(&self, a: &Array2<T>) -> Result<Array2<T>> {
        if a.nrows() != self.len() {
            return Err(DirectError::DimensionMismatch {
                expected: self.len(),
                got: a.nrows(),
            });
        }
        Ok(a.select(Axis(0), &self.forward))
    }

    /// Compute `P·b`: entry `i` of the result is `b[perm[i]]`
    pub fn permute_vec<T: RealField>(&self, b: &Array1<T>) -> Result<Array1<T>> {
        if b.len() != self.len() {
            return Err(DirectError::DimensionMismatch {
                expected: self.len(),
                got: b.len(),
            });
        }
        Ok(self.forward.iter().map(|&p| b[p]).collect())
    }

    /// Explicit permutation matrix with `P[i][perm[i]] = 1`
    pub fn to_matrix<T: RealField>(&self) -> Array2<T> {
        let n = self.forward.len();
        let mut p = Array2::zeros((n, n));
        for (i, &j) in self.forward.iter().enumerate() {
            p[[i, j]] = T::one();
        }
        p
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.forward[i]
    }
}
