//! Driving the algorithms from a JSON configuration document.

mod common;

use common::{diag, init_tracing};
use sparsa_algo::{SparsaConfig, SparseError, SparseMatrix};

#[test]
fn test_series_order_from_json() {
    init_tracing();
    let cfg = SparsaConfig::from_json_str(r#"{ "series": { "order": 2 } }"#).unwrap();
    let a = diag(&[1.0]);
    let e = a.exp_with(&cfg.series).unwrap();
    assert_eq!(e.get(0, 0), 2.5);
}

#[test]
fn test_pivot_tolerance_from_json() {
    init_tracing();
    let cfg = SparsaConfig::from_json_str(r#"{ "inverse": { "pivot_tolerance": 1e-9 } }"#).unwrap();
    let a = SparseMatrix::from_triplets(2, 2, [(0, 0, 1.0), (1, 1, 1e-10)]).unwrap();

    assert!(a.inverse().is_ok());
    assert_eq!(
        a.inverse_with(&cfg.inverse).unwrap_err(),
        SparseError::SingularMatrix { row: 1 }
    );
}

#[test]
fn test_malformed_json() {
    init_tracing();
    let err = SparsaConfig::from_json_str(r#"{ "series": { "order": "many" } }"#).unwrap_err();
    assert!(matches!(err, SparseError::Config(_)));
}

#[test]
fn test_default_config_matches_plain_calls() {
    init_tracing();
    let cfg = SparsaConfig::default();
    let a = diag(&[0.4, 0.3]);
    assert_eq!(a.log_with(&cfg.series).unwrap(), a.log().unwrap());
    assert_eq!(a.exp_with(&cfg.series).unwrap(), a.exp().unwrap());
}
