//! Integration tests for Gauss-Jordan inversion.

mod common;

use common::{init_tracing, sample_4x4};
use sparsa_algo::{InverseConfig, SparseError, SparseMatrix};

#[test]
fn test_inverse_of_diagonal_2x2() {
    init_tracing();
    let a = SparseMatrix::from_triplets(2, 2, [(0, 0, 2.0), (1, 1, 4.0)]).unwrap();
    let expected = SparseMatrix::from_triplets(2, 2, [(0, 0, 0.5), (1, 1, 0.25)]).unwrap();
    assert_eq!(a.inverse().unwrap(), expected);
}

#[test]
fn test_inverse_of_sample() {
    init_tracing();
    let a = sample_4x4();
    let inv = a.inverse().unwrap();
    let eye = SparseMatrix::identity(4);

    assert!(
        a.matmul(&inv).unwrap().approx_eq(&eye, 1e-12),
        "A * A^-1 != I:\n{}",
        a.matmul(&inv).unwrap()
    );
    assert!(inv.matmul(&a).unwrap().approx_eq(&eye, 1e-12));

    // row 1 of A is 3 e_0, so row 0 of A^-1 is e_1 / 3
    assert!((inv.get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
    assert!(inv.get(0, 0).abs() < 1e-12);
}

#[test]
fn test_inverse_twice_round_trips() {
    init_tracing();
    let a = sample_4x4();
    let back = a.inverse().unwrap().inverse().unwrap();
    assert!(back.approx_eq(&a, 1e-10));
}

#[test]
fn test_permutation_matrix() {
    init_tracing();
    let p = SparseMatrix::from_triplets(3, 3, [(0, 2, 1.0), (1, 0, 1.0), (2, 1, 1.0)]).unwrap();
    assert_eq!(p.inverse().unwrap(), p.transpose());
}

#[test]
fn test_singular_reports_error() {
    init_tracing();
    // rank 2: row 2 = row 0 + row 1
    let a = SparseMatrix::from_triplets(
        3,
        3,
        [
            (0, 0, 1.0),
            (0, 1, 1.0),
            (1, 1, 1.0),
            (1, 2, 1.0),
            (2, 0, 1.0),
            (2, 1, 2.0),
            (2, 2, 1.0),
        ],
    )
    .unwrap();
    let err = a.inverse().unwrap_err();
    assert!(matches!(err, SparseError::SingularMatrix { .. }));
    assert!(err.to_string().contains("singular"));
}

#[test]
fn test_near_singular_with_tolerance() {
    init_tracing();
    let a = SparseMatrix::from_triplets(
        2,
        2,
        [(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, 1.0 + 1e-15)],
    )
    .unwrap();
    assert!(matches!(
        a.inverse_with(&InverseConfig::with_tolerance(1e-12)),
        Err(SparseError::SingularMatrix { .. })
    ));
}

#[test]
fn test_invalid_tolerance() {
    init_tracing();
    let a: SparseMatrix<f64> = SparseMatrix::identity(2);
    assert!(matches!(
        a.inverse_with(&InverseConfig::with_tolerance(f64::NAN)),
        Err(SparseError::Config(_))
    ));
}

#[test]
fn test_non_square_inverse() {
    init_tracing();
    let a: SparseMatrix<f64> = SparseMatrix::new(3, 2);
    assert!(matches!(
        a.inverse(),
        Err(SparseError::InvalidArgument(_))
    ));
}

#[test]
fn test_inverse_f32() {
    init_tracing();
    let a = SparseMatrix::from_triplets(2, 2, [(0, 0, 4.0_f32), (0, 1, 1.0), (1, 1, 2.0)]).unwrap();
    let inv = a.inverse().unwrap();
    assert!(a.matmul(&inv).unwrap().approx_eq(&SparseMatrix::identity(2), 1e-6));
}
