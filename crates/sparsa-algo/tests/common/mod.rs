//! Shared fixtures for sparsa-algo integration tests.

#![allow(dead_code)]

use sparsa_algo::SparseMatrix;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a stderr subscriber once per test binary (respects RUST_LOG).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// 4x4 matrix with entries (0,0)=1 (0,1)=2 (1,0)=3 (2,2)=3 (3,0)=1 (3,1)=2 (3,3)=4.
pub fn sample_4x4() -> SparseMatrix<f64> {
    SparseMatrix::from_triplets(
        4,
        4,
        [
            (0, 0, 1.0),
            (0, 1, 2.0),
            (1, 0, 3.0),
            (2, 2, 3.0),
            (3, 0, 1.0),
            (3, 1, 2.0),
            (3, 3, 4.0),
        ],
    )
    .unwrap()
}

/// Diagonal matrix from the given values.
pub fn diag(values: &[f64]) -> SparseMatrix<f64> {
    let n = values.len();
    SparseMatrix::from_triplets(n, n, values.iter().enumerate().map(|(i, &v)| (i, i, v)))
        .unwrap()
}
