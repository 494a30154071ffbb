//! Test fixtures and instrumented element types for ftl development.
//!
//! Matrix builders ([`initialized_matrix`]) and assertions
//! ([`assert_matrices_equal`]) live here, alongside element types that
//! report what containers do with them: [`DropCounter`] counts drops and
//! [`PanicOnClone`] fails on a chosen clone.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{DropCounter, PanicOnClone};

use std::fmt::Debug;
use std::ops::AddAssign;

use ftl_matrix::Matrix;

/// A `rows × columns` matrix holding `start, start + 1, start + 2, ...` in
/// row-major order.
///
/// `initialized_matrix(3, 3, 1)` is the familiar 1..=9 square.
pub fn initialized_matrix<T>(rows: usize, columns: usize, start: T) -> Matrix<T>
where
    T: Clone + Default + AddAssign + From<u8>,
{
    let mut matrix = Matrix::new(rows, columns).expect("fixture shape must be allocatable");
    let mut next = start;
    for slot in matrix.iter_mut() {
        *slot = next.clone();
        next += T::from(1);
    }
    matrix
}

/// Assert two matrices have the same shape and the same elements, naming
/// the first differing `(row, column)` on failure.
pub fn assert_matrices_equal<T: PartialEq + Debug>(actual: &Matrix<T>, expected: &Matrix<T>) {
    assert_eq!(
        actual.shape(),
        expected.shape(),
        "matrix shapes differ: {} vs {}",
        actual.shape(),
        expected.shape()
    );
    for row in 0..actual.rows() {
        for column in 0..actual.columns() {
            assert_eq!(
                actual[row][column], expected[row][column],
                "matrices differ at ({row}, {column})"
            );
        }
    }
}
