//! Element-wise matrix arithmetic.
//!
//! The `try_*` / `checked_*` methods report a [`MatrixError::ShapeMismatch`]
//! when the operands differ in shape. The operator impls (`+=`, `-=`, `+`,
//! `-`) call them and panic on mismatch, the same way slice indexing
//! panics out of range. In both cases neither operand is modified when the
//! shapes differ.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T: Clone + AddAssign> Matrix<T> {
    /// `self[i][j] += rhs[i][j]` for every element.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        self.ensure_same_shape(rhs)?;
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += rhs.clone();
        }
        Ok(())
    }

    /// Element-wise sum as a new matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ,
    /// [`MatrixError::Allocation`] if the result cannot be allocated.
    pub fn checked_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.ensure_same_shape(rhs)?;
        let mut result = self.try_clone()?;
        result.try_add_assign(rhs)?;
        Ok(result)
    }
}

impl<T: Clone + SubAssign> Matrix<T> {
    /// `self[i][j] -= rhs[i][j]` for every element.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ.
    pub fn try_sub_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        self.ensure_same_shape(rhs)?;
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs -= rhs.clone();
        }
        Ok(())
    }

    /// Element-wise difference as a new matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if the shapes differ,
    /// [`MatrixError::Allocation`] if the result cannot be allocated.
    pub fn checked_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.ensure_same_shape(rhs)?;
        let mut result = self.try_clone()?;
        result.try_sub_assign(rhs)?;
        Ok(result)
    }
}

impl<T: Clone + AddAssign> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("matrix +=: {e}");
        }
    }
}

impl<T: Clone + SubAssign> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("matrix -=: {e}");
        }
    }
}

impl<T: Clone + AddAssign> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("matrix +: {e}"),
        }
    }
}

impl<T: Clone + AddAssign> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self += rhs;
        self
    }
}

impl<T: Clone + SubAssign> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_sub(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("matrix -: {e}"),
        }
    }
}

impl<T: Clone + SubAssign> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self -= rhs;
        self
    }
}
