//! Integration tests for text rendering

mod common;

use common::create_cpu_client;
use wrapmat::error::Error;
use wrapmat::matrix::{render_column, render_element, render_row};
use wrapmat::ops::GeneratorOps;

#[test]
fn test_display_matrix() {
    let client = create_cpu_client(2);
    let m = client.sequence(1, 1).unwrap();
    assert_eq!(m.to_string(), "1 2\n3 4\n");
}

#[test]
fn test_display_order_1() {
    let client = create_cpu_client(1);
    assert_eq!(client.uniform(42).unwrap().to_string(), "42\n");
}

#[test]
fn test_render_row_column_element() {
    let client = create_cpu_client(3);
    let m = client.sequence(1, 1).unwrap();
    assert_eq!(render_row(&m, 0).unwrap(), "1 2 3\n");
    assert_eq!(render_column(&m, 1).unwrap(), "2\n5\n8\n");
    assert_eq!(render_element(&m, 2, 2).unwrap(), "9\n");
}

#[test]
fn test_render_out_of_range() {
    let client = create_cpu_client(2);
    let m = client.identity().unwrap();
    assert_eq!(
        render_column(&m, 2).unwrap_err(),
        Error::IndexOutOfBounds { index: 2, size: 2 }
    );
}
