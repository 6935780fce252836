//! Test matrices for the direct solvers
//!
//! Well-known dense matrices used by the unit tests, the integration tests,
//! the benchmark and the demo.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 3×3 matrix used throughout the examples
///
/// Non-singular and factorable without pivoting; its determinant is -90.
pub fn textbook_matrix() -> Array2<f64> {
    ndarray::array![[2.0, 3.0, -1.0], [4.0, 1.0, 2.0], [-2.0, 7.0, 2.0]]
}

/// The n×n Hilbert matrix `H[i][j] = 1 / (i + j + 1)`
///
/// Notoriously ill-conditioned: its smallest pivots shrink by orders of
/// magnitude with every added row.
pub fn hilbert_matrix(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| 1.0 / (i + j + 1) as f64)
}

/// Dense matrix with entries drawn uniformly from `[min, max)`
///
/// # Panics
///
/// Panics if `min >= max` or either bound is not finite.
pub fn random_matrix(n: usize, min: f64, max: f64) -> Array2<f64> {
    let mut rng = rand::rng();
    fill_uniform(&mut rng, n, min, max)
}

/// Reproducible variant of [`random_matrix`]
///
/// # Panics
///
/// Panics if `min >= max` or either bound is not finite.
pub fn random_matrix_seeded(n: usize, min: f64, max: f64, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    fill_uniform(&mut rng, n, min, max)
}

/// Random strictly diagonally dominant matrix
///
/// Every diagonal entry exceeds the sum of the off-diagonal magnitudes in its
/// row, so the unpivoted kernels never meet a small pivot.
pub fn diagonally_dominant_matrix(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = fill_uniform(&mut rng, n, -1.0, 1.0);
    for i in 0..n {
        let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        a[[i, i]] = sign * (off_diagonal + 1.0 + rng.random::<f64>());
    }
    a
}

fn fill_uniform<R: Rng>(rng: &mut R, n: usize, min: f64, max: f64) -> Array2<f64> {
    assert!(
        min.is_finite() && max.is_finite() && min < max,
        "invalid sampling range [{}, {})",
        min,
        max
    );
    Array2::from_shape_fn((n, n), |_| rng.random_range(min..max))
}
