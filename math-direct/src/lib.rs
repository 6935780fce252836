//! Dense direct solvers for small and medium square systems
//!
//! This crate provides the classical in-place elimination kernels on a dense
//! row-major matrix:
//!
//! - **Gaussian elimination** with back-substitution: [`solve`]
//! - **Unpivoted LU** (Doolittle) factorization: [`lu_factor`], and its exact
//!   inverse [`lu_reconstruct`]
//! - **PLU** factorization with partial pivoting: [`plu_factor`] and the owning
//!   [`PluFactorization`]
//!
//! All factorizations use the packed L/U layout: the strict lower triangle
//! holds the multipliers of the unit lower factor L, the upper triangle
//! including the diagonal holds U. See [`packed`] for helpers that split it
//! into explicit triangular matrices.
//!
//! The unpivoted kernels never check their pivots: a zero pivot produces
//! non-finite values and no error. Use [`all_finite`] on the result, or the
//! pivoted path which reports [`DirectError::SingularMatrix`].
//!
//! # Example
//!
//! ```
//! use math_audio_direct::{PluConfig, Permutation, plu_factor, solve};
//! use ndarray::array;
//!
//! let mut a = array![[2.0_f64, 1.0], [1.0, 3.0]];
//! let mut b = array![3.0_f64, 5.0];
//! solve(&mut a, &mut b).unwrap();
//! assert!((b[0] - 0.8).abs() < 1e-12);
//! assert!((b[1] - 1.4).abs() < 1e-12);
//!
//! let mut singular = array![[1.0_f64, 2.0], [2.0, 4.0]];
//! let mut perm = Permutation::identity(2);
//! assert!(plu_factor(&mut singular, &mut perm, &PluConfig::default()).is_err());
//! ```

pub mod config;
pub mod dense;
pub mod direct;
pub mod packed;
pub mod permutation;
pub mod testdata;
pub mod traits;

pub use config::{DEFAULT_SINGULAR_TOLERANCE, PluConfig};
pub use dense::{all_finite, format_matrix, max_abs_diff, square_from_row_major};
pub use direct::{PluFactorization, lu_factor, lu_reconstruct, plu_factor, solve};
pub use packed::{TriangularFactors, max_multiplier, unpack};
pub use permutation::{Permutation, is_permutation};
pub use traits::RealField;

/// Error types for direct solver operations
#[derive(Debug, thiserror::Error)]
pub enum DirectError {
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Matrix is empty")]
    EmptyMatrix,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Matrix is singular or nearly singular (pivot {pivot:e} at step {step})")]
    SingularMatrix { step: usize, pivot: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DirectError>;
