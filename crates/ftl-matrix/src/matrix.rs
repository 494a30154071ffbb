//! The dense row-major [`Matrix`] value type.
//!
//! A matrix is one [`StorageBuffer`] plus a validated [`Shape`]. Element
//! `(r, c)` lives at linear offset `r * columns + c`, and the live prefix
//! of the buffer always holds exactly `rows * columns` elements between
//! public calls.

use std::fmt;
use std::ops::{Index, IndexMut};

use ftl_buffer::StorageBuffer;

use crate::cursor::{ContiguousIter, ContiguousIterMut};
use crate::error::MatrixError;
use crate::shape::Shape;

/// A dense 2D matrix stored in row-major order.
///
/// `matrix[r]` is row `r` as a slice, so `matrix[r][c]` reads a single
/// element. Out-of-range rows or columns panic, like slice indexing.
///
/// Copies are deep: [`Clone`] allocates exactly `len()` slots and clones
/// every element, and [`clone_from`](Clone::clone_from) reuses the
/// destination's storage when it is large enough. Moving out with
/// [`take`](Matrix::take) leaves a valid 0×0 matrix behind.
pub struct Matrix<T> {
    buffer: StorageBuffer<T>,
    shape: Shape,
}

impl<T> Matrix<T> {
    /// The 0×0 matrix. Allocates nothing.
    pub const fn empty() -> Self {
        Self {
            buffer: StorageBuffer::new(),
            shape: Shape::EMPTY,
        }
    }

    /// A `rows × columns` matrix with every element set to `T::default()`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Overflow`] if `rows * columns` overflows `usize`,
    /// [`MatrixError::Allocation`] if the storage cannot be reserved.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError>
    where
        T: Clone + Default,
    {
        Self::filled(rows, columns, T::default())
    }

    /// A `rows × columns` matrix with every element a clone of `value`.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    pub fn filled(rows: usize, columns: usize, value: T) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let shape = Shape::new(rows, columns)?;
        let mut buffer = StorageBuffer::with_capacity(shape.len())?;
        buffer.construct(0..shape.len(), &value);
        Ok(Self { buffer, shape })
    }

    /// A `rows × columns` matrix taking its elements from `source` in
    /// row-major order.
    ///
    /// Extra items in `source` are left unconsumed.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    ///
    /// # Panics
    ///
    /// Panics if `source` yields fewer than `rows * columns` items.
    pub fn from_row_major<I>(rows: usize, columns: usize, source: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = T>,
    {
        let shape = Shape::new(rows, columns)?;
        let mut buffer = StorageBuffer::with_capacity(shape.len())?;
        buffer.construct_from(0..shape.len(), source);
        Ok(Self { buffer, shape })
    }

    /// A matrix from a list of rows.
    ///
    /// The row count is `rows.len()` and the column count is the length of
    /// the first row; an empty list gives the 0×0 matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] if any row's length differs from the
    /// first row's. The check runs before anything is allocated.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
        T: Clone,
    {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != columns)
        {
            return Err(MatrixError::ShapeMismatch {
                detail: format!(
                    "row {index} has {} columns, expected {columns}",
                    row.as_ref().len()
                ),
            });
        }
        Self::from_row_major(
            rows.len(),
            columns,
            rows.iter().flat_map(|row| row.as_ref().iter().cloned()),
        )
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.shape.columns()
    }

    /// The validated dimensions.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of elements, `rows * columns`.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// `true` when the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Slots reserved by the backing storage. At least `len()`.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Element at `(row, column)`, or `None` if out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        let offset = self.shape.offset(row, column)?;
        self.as_slice().get(offset)
    }

    /// Element at `(row, column)` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        let offset = self.shape.offset(row, column)?;
        self.as_mut_slice().get_mut(offset)
    }

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        // A clone that panicked mid-refill can leave extra live slots
        // behind a 0x0 shape.
        &self.buffer.as_slice()[..self.shape.len()]
    }

    /// All elements in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.shape.len();
        &mut self.buffer.as_mut_slice()[..len]
    }

    /// Iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the elements in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterator over the rows as slices.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.rows()).map(move |row| &self[row])
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> ContiguousIter<'_, T> {
        ContiguousIter::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> ContiguousIter<'_, T> {
        ContiguousIter::new(self.as_slice(), self.len())
    }

    /// Mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> ContiguousIterMut<'_, T> {
        ContiguousIterMut::new(self.as_mut_slice(), 0)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> ContiguousIterMut<'_, T> {
        let len = self.len();
        ContiguousIterMut::new(self.as_mut_slice(), len)
    }

    /// Replace every element with a clone of `value`, keeping the shape.
    ///
    /// If a clone panics the matrix is left as a valid 0×0 matrix.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        let shape = std::mem::take(&mut self.shape);
        self.buffer.destruct(0..self.buffer.len());
        self.buffer.construct(0..shape.len(), &value);
        self.shape = shape;
    }

    /// Move the contents out, leaving a 0×0 matrix behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Consume the matrix, returning its elements in row-major order.
    pub fn into_vec(self) -> Vec<T> {
        let len = self.shape.len();
        let mut elements = self.buffer.into_vec();
        elements.truncate(len);
        elements
    }

    /// Deep copy with exactly `len()` slots reserved.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Allocation`] if the storage cannot be reserved.
    pub fn try_clone(&self) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let mut buffer = StorageBuffer::with_capacity(self.len())?;
        buffer.construct_from(0..self.len(), self.iter().cloned());
        Ok(Self {
            buffer,
            shape: self.shape,
        })
    }

    /// Make `self` a deep copy of `source`.
    ///
    /// When the current storage has room for `source.len()` elements it is
    /// reused in place. Otherwise a fresh copy is built first and swapped
    /// in, so a failed allocation leaves `self` untouched.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Allocation`] if fresh storage is needed and cannot be
    /// reserved.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        if self.capacity() < source.len() {
            let mut fresh = source.try_clone()?;
            std::mem::swap(self, &mut fresh);
            return Ok(());
        }
        self.shape = Shape::EMPTY;
        self.buffer.destruct(0..self.buffer.len());
        self.buffer
            .construct_from(0..source.len(), source.iter().cloned());
        self.shape = source.shape;
        Ok(())
    }

    pub(crate) fn ensure_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape == rhs.shape {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch {
                detail: format!("left operand is {}, right operand is {}", self.shape, rhs.shape),
            })
        }
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => panic!("cannot clone {} matrix: {e}", self.shape),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            panic!("cannot copy {} matrix: {e}", source.shape);
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows())
            .field("columns", &self.columns())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        &self.as_slice()[self.shape.row_range(row)]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        let range = self.shape.row_range(row);
        &mut self.as_mut_slice()[range]
    }
}

impl<T: Clone> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Self::from_rows(&rows)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Matrix<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
