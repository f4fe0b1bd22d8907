//! Results must be bit-identical for every worker count

mod common;

use common::{create_cpu_client, create_threaded_client};
use wrapmat::ops::{BinaryOps, GeneratorOps, MatmulOps, ScalarOps, ShapeOps};

const ORDER: usize = 48;

#[test]
fn test_random_identical_across_threads() {
    let single = create_cpu_client(ORDER).random(2024).unwrap();
    let multi = create_threaded_client(ORDER, 4).random(2024).unwrap();
    assert_eq!(single, multi);
}

#[test]
fn test_elementwise_identical_across_threads() {
    let single = create_cpu_client(ORDER);
    let multi = create_threaded_client(ORDER, 3);

    let a = single.random(1).unwrap();
    let b = single.sequence(u32::MAX - 100, 7).unwrap();

    assert_eq!(single.add(&a, &b).unwrap(), multi.add(&a, &b).unwrap());
    assert_eq!(
        single.add_scalar(&a, u32::MAX).unwrap(),
        multi.add_scalar(&a, u32::MAX).unwrap()
    );
    assert_eq!(
        single.mul_scalar(&b, 0x9E37_79B9).unwrap(),
        multi.mul_scalar(&b, 0x9E37_79B9).unwrap()
    );
    assert_eq!(single.transpose(&a).unwrap(), multi.transpose(&a).unwrap());
}

#[test]
fn test_matmul_identical_across_threads() {
    let single = create_cpu_client(ORDER);
    let multi = create_threaded_client(ORDER, 8);

    let a = single.random(5).unwrap();
    let b = single.random(6).unwrap();

    assert_eq!(single.matmul(&a, &b).unwrap(), multi.matmul(&a, &b).unwrap());
    assert_eq!(
        single.matrix_pow(&a, 5).unwrap(),
        multi.matrix_pow(&a, 5).unwrap()
    );
}

#[test]
fn test_set_threads_midstream() {
    let mut client = create_cpu_client(ORDER);
    let a = client.random(10).unwrap();
    let before = client.matmul(&a, &a).unwrap();
    client.set_threads(2).unwrap();
    assert_eq!(client.matmul(&a, &a).unwrap(), before);
}
