//! Two-dimensional arrays in row-major form.
//!
//! An [`Array2D`] is `num_rows` independent [`FixedArray`] rows of
//! `num_cols` slots each. Element access uses `(row, col)` pairs validated
//! against both bounds; the column check is delegated to the addressed row.

use creel_core::ArrayError;

use crate::fixed::FixedArray;

/// A fixed-size two-dimensional array of optional slots.
///
/// All rows have identical length. Both dimensions are immutable after
/// construction and at least 1.
#[derive(Clone, Debug)]
pub struct Array2D<T> {
    rows: Vec<FixedArray<T>>,
    cols: usize,
}

impl<T> Array2D<T> {
    /// Create an array with `num_rows` rows of `num_cols` empty slots.
    ///
    /// Fails with [`ArrayError::InvalidSize`] when either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self, ArrayError> {
        if num_rows == 0 {
            return Err(ArrayError::InvalidSize { requested: num_rows });
        }
        let mut rows = Vec::with_capacity(num_rows);
        for _ in 0..num_rows {
            rows.push(FixedArray::new(num_cols)?);
        }
        Ok(Self {
            rows,
            cols: num_cols,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in every row.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Read the slot at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, ArrayError> {
        self.row(row)?.get(col)
    }

    /// Overwrite the slot at `(row, col)` with `value`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ArrayError> {
        let bound = self.rows.len();
        match self.rows.get_mut(row) {
            Some(slots) => slots.set(col, value),
            None => Err(ArrayError::IndexOutOfRange { index: row, bound }),
        }
    }

    /// Overwrite every slot of every row with `value`.
    pub fn clear(&mut self, value: Option<T>)
    where
        T: Clone,
    {
        for row in &mut self.rows {
            row.clear(value.clone());
        }
    }

    fn row(&self, row: usize) -> Result<&FixedArray<T>, ArrayError> {
        self.rows.get(row).ok_or(ArrayError::IndexOutOfRange {
            index: row,
            bound: self.rows.len(),
        })
    }
}
