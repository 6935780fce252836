//! Integration tests for the dense elimination kernels
//!
//! Properties checked over seeded random matrices of several sizes:
//! LU round trip, solve accuracy, permutation validity, pivot dominance,
//! singularity detection and the PLU law P·A = L·U.

use math_audio_direct::testdata::{
    diagonally_dominant_matrix, hilbert_matrix, random_matrix_seeded, textbook_matrix,
};
use math_audio_direct::{
    DirectError, Permutation, PluConfig, PluFactorization, TriangularFactors, all_finite,
    is_permutation, lu_factor, lu_reconstruct, max_abs_diff, max_multiplier, plu_factor, solve,
    square_from_row_major,
};
use ndarray::{Array1, Array2, array};

const SIZES: [usize; 5] = [1, 2, 5, 17, 40];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn plu_in_place(a: &Array2<f64>) -> (Array2<f64>, Permutation, Result<(), DirectError>) {
    let mut lu = a.clone();
    let mut perm = Permutation::identity(a.nrows());
    let result = plu_factor(&mut lu, &mut perm, &PluConfig::default());
    (lu, perm, result)
}

#[test]
fn test_lu_roundtrip_random_sizes() {
    init_logger();
    for (seed, &n) in SIZES.iter().enumerate() {
        let original = diagonally_dominant_matrix(n, seed as u64);
        let mut a = original.clone();

        lu_factor(&mut a).unwrap();
        assert!(all_finite(&a));
        lu_reconstruct(&mut a).unwrap();

        let err = max_abs_diff(&a, &original).unwrap();
        assert!(err < 1e-9, "n = {}: round-trip error {:e}", n, err);
    }
}

#[test]
fn test_solve_recovers_known_solution() {
    init_logger();
    for (seed, &n) in SIZES.iter().enumerate() {
        let a = diagonally_dominant_matrix(n, 100 + seed as u64);
        let x_expected = Array1::from_iter((0..n).map(|i| 1.0 + i as f64 / n as f64));
        let mut b = a.dot(&x_expected);
        let mut work = a.clone();

        solve(&mut work, &mut b).unwrap();

        let err = max_abs_diff(&b, &x_expected).unwrap();
        assert!(err < 1e-9, "n = {}: solution error {:e}", n, err);
    }
}

#[test]
fn test_solve_from_flat_buffer() {
    let mut a = square_from_row_major(2, vec![2.0, 1.0, 1.0, 3.0]).unwrap();
    let mut b: Array1<f64> = array![3.0, 5.0];

    solve(&mut a, &mut b).unwrap();

    assert!((b[0] - 0.8).abs() < 1e-12);
    assert!((b[1] - 1.4).abs() < 1e-12);
}

#[test]
fn test_plu_law_random_sizes() {
    init_logger();
    for (seed, &n) in SIZES.iter().enumerate() {
        let a = random_matrix_seeded(n, -10.0, 10.0, 200 + seed as u64);
        let (lu, perm, result) = plu_in_place(&a);
        result.unwrap();

        assert!(is_permutation(perm.as_slice()));
        assert!(max_multiplier(&lu).unwrap() <= 1.0);

        let product = TriangularFactors::from_packed(&lu).unwrap().product();
        assert!(all_finite(&product));
        let pa = perm.permute_rows(&a).unwrap();
        let err = max_abs_diff(&pa, &product).unwrap();
        assert!(err < 1e-9, "n = {}: P·A - L·U = {:e}", n, err);
    }
}

#[test]
fn test_plu_unpermuted_reconstruction() {
    for (seed, &n) in SIZES.iter().enumerate() {
        let a = random_matrix_seeded(n, -1.0, 1.0, 300 + seed as u64);
        let (mut lu, perm, result) = plu_in_place(&a);
        result.unwrap();

        lu_reconstruct(&mut lu).unwrap();
        let restored = perm.inverse().permute_rows(&lu).unwrap();
        assert!(all_finite(&restored));

        let err = max_abs_diff(&restored, &a).unwrap();
        assert!(err < 1e-9, "n = {}: reconstruction error {:e}", n, err);
    }
}

#[test]
fn test_plu_matches_unpivoted_when_no_swaps() {
    // Diagonal dominance by columns keeps the diagonal as the column maximum
    let a = diagonally_dominant_matrix(8, 9).t().to_owned();
    let (plu, perm, result) = plu_in_place(&a);
    result.unwrap();
    assert!(perm.is_identity());

    let mut lu = a.clone();
    lu_factor(&mut lu).unwrap();
    assert!(max_abs_diff(&plu, &lu).unwrap() < 1e-12);
}

#[test]
fn test_plu_singular_examples() {
    init_logger();
    let cases = vec![
        array![[1.0, 2.0], [2.0, 4.0]],
        array![[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]],
        array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
        Array2::zeros((4, 4)),
    ];

    for a in cases {
        let (_, perm, result) = plu_in_place(&a);
        assert!(
            matches!(result, Err(DirectError::SingularMatrix { .. })),
            "expected singular report for {:?}",
            a
        );
        assert!(is_permutation(perm.as_slice()));
    }
}

#[test]
fn test_plu_hilbert_permutation_always_valid() {
    // Large Hilbert matrices may or may not trip the tolerance
    for n in [4, 8, 12, 20] {
        let (_, perm, _) = plu_in_place(&hilbert_matrix(n));
        assert_eq!(perm.len(), n);
        assert!(is_permutation(perm.as_slice()));
    }
}

#[test]
fn test_factorization_solves_many_rhs() {
    let a = random_matrix_seeded(25, -5.0, 5.0, 77);
    let plu = PluFactorization::factor(&a, &PluConfig::default()).unwrap();

    for k in 0..4 {
        let x_expected = Array1::from_iter((0..25).map(|i| ((i * (k + 1)) % 7) as f64 - 3.0));
        let b = a.dot(&x_expected);
        let x = plu.solve(&b).unwrap();
        let err = max_abs_diff(&x, &x_expected).unwrap();
        assert!(err < 1e-8, "rhs {}: error {:e}", k, err);
    }
}

#[test]
fn test_determinant_of_textbook() {
    let plu = PluFactorization::factor(&textbook_matrix(), &PluConfig::default()).unwrap();
    assert!((plu.determinant() + 90.0).abs() < 1e-10);
}

#[test]
fn test_plu_with_verbose_config() {
    init_logger();
    let a = random_matrix_seeded(10, -1.0, 1.0, 5);
    let config = PluConfig {
        singular_tolerance: 1e-9,
        print_interval: 3,
    };
    let plu = PluFactorization::factor(&a, &config).unwrap();
    assert!(max_abs_diff(&plu.reconstruct().unwrap(), &a).unwrap() < 1e-10);
}

#[test]
fn test_unpivoted_paths_fail_silently_where_plu_reports() {
    let singular = array![[1.0, 2.0], [2.0, 4.0]];

    let mut lu = singular.clone();
    lu_factor(&mut lu).unwrap();
    assert_eq!(lu[[1, 1]], 0.0);

    let mut work = singular.clone();
    let mut b = array![1.0, 1.0];
    solve(&mut work, &mut b).unwrap();
    assert!(!all_finite(&b));

    let (_, _, result) = plu_in_place(&singular);
    assert!(result.is_err());
}
