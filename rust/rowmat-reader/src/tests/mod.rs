use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use rowmat_common::Result;
use rowmat_vector::column_vector::ColumnVector;

use crate::{
    reader::{ExtensionReader, ValueReader},
    value::Value,
};

mod constant_injection;

/// Wraps a reader and counts how many cells reach its non-null decode path.
#[derive(Debug)]
pub(crate) struct CountingReader {
    inner: ValueReader,
    reads: Arc<AtomicUsize>,
}

impl CountingReader {
    pub(crate) fn wrap(inner: ValueReader) -> (ValueReader, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let reader = ValueReader::extension(CountingReader {
            inner,
            reads: reads.clone(),
        });
        (reader, reads)
    }
}

impl ExtensionReader for CountingReader {
    fn non_null_read(&self, vector: &ColumnVector, row: usize) -> Result<Value> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.inner.non_null_read(vector, row)
    }
}

pub(crate) fn reads(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::Relaxed)
}
