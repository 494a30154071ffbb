//! Benchmark inputs and timing utilities for ftl.
//!
//! - [`Timer`]: wall-clock stopwatch reporting in a chosen [`TimeUnit`].
//! - [`random_values`] / [`random_matrix`]: deterministic inputs from a
//!   seeded ChaCha8 generator, so benchmark runs see identical data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod timer;

pub use timer::{TimeUnit, Timer};

use ftl_matrix::{Matrix, MatrixError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `len` integers in `-bound..bound`, identical for identical seeds.
///
/// A `bound` of zero yields all zeros.
pub fn random_values(seed: u64, len: usize, bound: u32) -> Vec<i64> {
    if bound == 0 {
        return vec![0; len];
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bound = i64::from(bound);
    (0..len).map(|_| rng.random_range(-bound..bound)).collect()
}

/// A `rows × columns` matrix of values uniformly drawn from `[0, 1)`.
///
/// # Errors
///
/// Propagates [`MatrixError`] from construction.
pub fn random_matrix(rows: usize, columns: usize, seed: u64) -> Result<Matrix<f64>, MatrixError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Matrix::from_row_major(rows, columns, std::iter::repeat_with(move || rng.random::<f64>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_deterministic() {
        assert_eq!(random_values(7, 100, 50), random_values(7, 100, 50));
        assert_ne!(random_values(7, 100, 50), random_values(8, 100, 50));
    }

    #[test]
    fn random_values_respect_bound() {
        let values = random_values(1, 1000, 10);
        assert!(values.iter().all(|v| (-10..10).contains(v)));
        assert_eq!(random_values(1, 5, 0), vec![0; 5]);
    }

    #[test]
    fn random_values_reach_both_signs() {
        let values = random_values(3, 1000, 1);
        assert!(values.iter().all(|v| (-1..1).contains(v)));
        assert!(values.contains(&-1));
        assert!(values.contains(&0));
    }

    #[test]
    fn random_matrix_in_unit_interval() {
        let m = random_matrix(4, 5, 42).unwrap();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.columns(), 5);
        assert!(m.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(m, random_matrix(4, 5, 42).unwrap());
    }
}
