//! Top-level row materialization over a [`RowBatch`].

use std::{ops::Deref, sync::Arc};

use rowmat_common::Result;
use rowmat_vector::batch::RowBatch;

use crate::{
    options::{Materialization, ReaderOptions},
    reader::StructReader,
    value::Row,
};

/// A row handed out by [`RowReader::read`].
#[derive(Debug)]
pub enum RowRef<'a> {
    /// A newly allocated row, owned by the caller.
    Owned(Row),
    /// The reader's reused buffer. Its fields are overwritten by the next read;
    /// the borrow ends before that can happen.
    Reused(&'a Row),
}

impl RowRef<'_> {
    pub fn is_reused(&self) -> bool {
        matches!(self, RowRef::Reused(_))
    }

    /// Takes the row out, copying it if it is the reused buffer.
    pub fn into_owned(self) -> Row {
        match self {
            RowRef::Owned(row) => row,
            RowRef::Reused(row) => row.clone(),
        }
    }
}

impl Deref for RowRef<'_> {
    type Target = Row;

    fn deref(&self) -> &Row {
        match self {
            RowRef::Owned(row) => row,
            RowRef::Reused(row) => row,
        }
    }
}

/// Reads the rows of top-level batches with a fixed [`Materialization`].
///
/// With [`Materialization::Fresh`] every read returns an independent row. With
/// [`Materialization::Reuse`] the reader owns one row buffer and overwrites all
/// of its fields on every read; the returned [`RowRef::Reused`] borrows the
/// reader, so the caller has to finish with (or copy) a row before asking for
/// the next one.
///
/// The underlying [`StructReader`] can be shared between row readers; a reuse
/// buffer cannot, so each consumer thread owns its own `RowReader`.
#[derive(Debug)]
pub struct RowReader {
    reader: Arc<StructReader>,
    materialization: Materialization,
    reused: Option<Row>,
}

impl RowReader {
    pub fn new(reader: impl Into<Arc<StructReader>>, materialization: Materialization) -> RowReader {
        let reader = reader.into();
        log::debug!(
            "row reader over {} fields with {:?} materialization",
            reader.len(),
            materialization
        );
        RowReader {
            reader,
            materialization,
            reused: None,
        }
    }

    pub fn with_options(reader: impl Into<Arc<StructReader>>, options: &ReaderOptions) -> RowReader {
        RowReader::new(reader, options.materialization)
    }

    pub fn materialization(&self) -> Materialization {
        self.materialization
    }

    /// Reads row `row` of `batch`.
    ///
    /// # Errors
    ///
    /// Fails if `row` is outside the batch or if the batch does not match the
    /// bound reader tree.
    pub fn read(&mut self, batch: &RowBatch, row: usize) -> Result<RowRef<'_>> {
        match self.materialization {
            Materialization::Fresh => self.reader.read_batch(batch, row).map(RowRef::Owned),
            Materialization::Reuse => {
                let reader = &self.reader;
                let target = self.reused.get_or_insert_with(|| reader.create_row());
                reader.read_batch_into(target, batch, row)?;
                Ok(RowRef::Reused(target))
            }
        }
    }

    /// Visits every row of `batch` in order, stopping at the first error.
    pub fn for_each_row<F>(&mut self, batch: &RowBatch, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &Row) -> Result<()>,
    {
        for row in 0..batch.size() {
            let decoded = self.read(batch, row)?;
            f(row, &decoded)?;
        }
        Ok(())
    }

    /// Reads every row of `batch` into owned rows.
    pub fn read_all(&mut self, batch: &RowBatch) -> Result<Vec<Row>> {
        (0..batch.size())
            .map(|row| self.read(batch, row).map(RowRef::into_owned))
            .collect()
    }
}
