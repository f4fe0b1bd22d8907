//! Integration tests for reductions (sum, trace, min, max, frequency)
//!
//! Tests verify:
//! - Known values on small matrices
//! - Wraparound in sums
//! - Empty-input errors

mod common;

use common::{create_cpu_client, matrix};
use wrapmat::error::Error;
use wrapmat::matrix::Matrix;
use wrapmat::ops::{GeneratorOps, ReduceOps};

// ============================================================================
// Sum / Trace
// ============================================================================

#[test]
fn test_sum_and_trace_2x2() {
    let client = create_cpu_client(2);
    let m = client.sequence(1, 1).unwrap();
    assert_eq!(client.sum(&m).unwrap(), 10);
    assert_eq!(client.trace(&m).unwrap(), 5);
}

#[test]
fn test_sum_wraps() {
    let client = create_cpu_client(2);
    let m = client.uniform(0x8000_0000).unwrap();
    assert_eq!(client.sum(&m).unwrap(), 0);
}

#[test]
fn test_trace_identity() {
    let client = create_cpu_client(9);
    let eye = client.identity().unwrap();
    assert_eq!(client.trace(&eye).unwrap(), 9);
}

#[test]
fn test_trace_wraps() {
    let client = create_cpu_client(3);
    let m = client.uniform(u32::MAX).unwrap();
    assert_eq!(client.trace(&m).unwrap(), u32::MAX - 2);
}

#[test]
fn test_reductions_ignore_context_order() {
    // Reductions are pure queries on the matrix they are given
    let client = create_cpu_client(5);
    let m = matrix(&[1, 2, 3, 4]);
    assert_eq!(client.sum(&m).unwrap(), 10);
    assert_eq!(client.trace(&m).unwrap(), 5);
}

// ============================================================================
// Min / Max
// ============================================================================

#[test]
fn test_min_max_uniform() {
    let client = create_cpu_client(2);
    let m = matrix(&[5, 5, 5, 5]);
    assert_eq!(client.min(&m).unwrap(), 5);
    assert_eq!(client.max(&m).unwrap(), 5);
    assert_eq!(client.frequency(&m, 5).unwrap(), 4);
}

#[test]
fn test_min_max_mixed() {
    let client = create_cpu_client(3);
    let m = matrix(&[9, 3, 7, u32::MAX, 0, 12, 3, 8, 1]);
    assert_eq!(client.min(&m).unwrap(), 0);
    assert_eq!(client.max(&m).unwrap(), u32::MAX);
}

#[test]
fn test_min_max_extremes_at_ends() {
    let client = create_cpu_client(2);
    let m = matrix(&[1, 5, 6, 100]);
    assert_eq!(client.min(&m).unwrap(), 1);
    assert_eq!(client.max(&m).unwrap(), 100);
}

// ============================================================================
// Frequency
// ============================================================================

#[test]
fn test_frequency_uniform() {
    let client = create_cpu_client(4);
    let m = client.uniform(7).unwrap();
    assert_eq!(client.frequency(&m, 7).unwrap(), 16);
    assert_eq!(client.frequency(&m, 8).unwrap(), 0);
}

#[test]
fn test_frequency_identity() {
    let client = create_cpu_client(4);
    let eye = client.identity().unwrap();
    assert_eq!(client.frequency(&eye, 1).unwrap(), 4);
    assert_eq!(client.frequency(&eye, 0).unwrap(), 12);
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn test_empty_matrix_reductions() {
    let client = create_cpu_client(1);
    let empty = Matrix::from_vec(0, vec![]).unwrap();

    assert_eq!(client.sum(&empty).unwrap(), 0);
    assert_eq!(client.frequency(&empty, 0).unwrap(), 0);
    assert_eq!(
        client.trace(&empty).unwrap_err(),
        Error::EmptyInput { op: "trace" }
    );
    assert_eq!(client.min(&empty).unwrap_err(), Error::EmptyInput { op: "min" });
    assert_eq!(client.max(&empty).unwrap_err(), Error::EmptyInput { op: "max" });
}
