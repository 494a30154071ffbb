//! Validated matrix dimensions.

use std::fmt;
use std::ops::Range;

use crate::error::MatrixError;

/// Row and column counts whose product is known to fit in `usize`.
///
/// Validated once by [`Shape::new`]; immutable afterwards. The default
/// shape is 0×0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
    len: usize,
}

impl Shape {
    /// The 0×0 shape.
    pub const EMPTY: Shape = Shape {
        rows: 0,
        columns: 0,
        len: 0,
    };

    /// Validate `rows × columns`.
    ///
    /// Returns [`MatrixError::Overflow`] if the element count does not fit
    /// in `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(columns)
            .ok_or(MatrixError::Overflow { rows, columns })?;
        Ok(Self { rows, columns, len })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total element count, `rows * columns`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the shape holds no elements (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Row-major offset of `(row, column)`, or `None` if out of range.
    pub fn offset(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Linear index range covered by `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`, including for shapes with no columns.
    pub fn row_range(&self, row: usize) -> Range<usize> {
        assert!(row < self.rows, "row {row} out of range for {self} matrix");
        let start = row * self.columns;
        start..start + self.columns
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_product() {
        let shape = Shape::new(7, 2).unwrap();
        assert_eq!(shape.rows(), 7);
        assert_eq!(shape.columns(), 2);
        assert_eq!(shape.len(), 14);
    }

    #[test]
    fn zero_dimension_is_empty() {
        assert!(Shape::new(0, 5).unwrap().is_empty());
        assert!(Shape::new(5, 0).unwrap().is_empty());
        assert_eq!(Shape::default(), Shape::EMPTY);
    }

    #[test]
    fn overflow_is_rejected() {
        let err = Shape::new(usize::MAX, 10).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Overflow {
                rows: usize::MAX,
                columns: 10
            }
        );
    }

    #[test]
    fn huge_rows_with_zero_columns_is_fine() {
        let shape = Shape::new(usize::MAX, 0).unwrap();
        assert_eq!(shape.len(), 0);
    }

    #[test]
    fn offset_is_row_major() {
        let shape = Shape::new(3, 4).unwrap();
        assert_eq!(shape.offset(0, 0), Some(0));
        assert_eq!(shape.offset(1, 2), Some(6));
        assert_eq!(shape.offset(2, 3), Some(11));
        assert_eq!(shape.offset(3, 0), None);
        assert_eq!(shape.offset(0, 4), None);
    }

    #[test]
    fn row_range_spans_columns() {
        let shape = Shape::new(3, 4).unwrap();
        assert_eq!(shape.row_range(2), 8..12);
        assert_eq!(Shape::new(4, 0).unwrap().row_range(3), 0..0);
    }

    #[test]
    #[should_panic(expected = "row 4 out of range for 4x0 matrix")]
    fn row_range_checks_rows_without_columns() {
        Shape::new(4, 0).unwrap().row_range(4);
    }

    #[test]
    fn display_is_rows_by_columns() {
        assert_eq!(Shape::new(2, 5).unwrap().to_string(), "2x5");
    }
}
