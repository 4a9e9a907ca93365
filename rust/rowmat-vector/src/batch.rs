//! A batch of parallel column vectors.

use rowmat_common::{Result, error::Error};

use crate::column_vector::ColumnVector;

/// A fixed-size set of column vectors, one per top-level field, each covering
/// the same `size` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBatch {
    cols: Vec<ColumnVector>,
    size: usize,
}

impl RowBatch {
    /// Creates a batch of `size` rows.
    ///
    /// # Errors
    ///
    /// Fails if any column vector cannot serve `size` rows.
    pub fn try_new(cols: Vec<ColumnVector>, size: usize) -> Result<RowBatch> {
        if let Some(pos) = cols.iter().position(|col| !col.covers(size)) {
            return Err(Error::invalid_arg(
                "cols",
                format!(
                    "column {pos} holds {} rows, batch size is {size}",
                    cols[pos].len()
                ),
            ));
        }
        Ok(RowBatch { cols, size })
    }

    /// Number of rows in the batch.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    pub fn column(&self, index: usize) -> Option<&ColumnVector> {
        self.cols.get(index)
    }

    pub fn cols(&self) -> &[ColumnVector] {
        &self.cols
    }

}
