//! Direct solvers for dense square systems
//!
//! This module provides the in-place elimination kernels:
//! - [`solve`]: Gaussian elimination with back-substitution, no pivoting
//! - [`lu_factor`] / [`lu_reconstruct`]: unpivoted Doolittle LU and its inverse
//! - [`plu_factor`]: LU with partial pivoting and singularity detection
//! - [`PluFactorization`]: owning PLU result reusable for many right-hand sides

mod gauss;
mod lu;
mod plu;

pub use gauss::solve;
pub use lu::{lu_factor, lu_reconstruct};
pub use plu::{PluFactorization, plu_factor};
