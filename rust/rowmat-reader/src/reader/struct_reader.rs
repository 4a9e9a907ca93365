//! Defines `StructReader`, which assembles record rows from one child reader per
//! field and overlays constant-bound fields.

use rowmat_common::{Result, verify_arg, verify_binding};
use rowmat_vector::{
    batch::RowBatch,
    column_vector::{ColumnVector, StructColumnVector},
};

use crate::{
    constants::IdToConstant,
    reader::ValueReader,
    schema::StructType,
    value::{Row, Value},
};

/// Reader for record-shaped values.
///
/// `StructReader` holds the child readers of a struct type in field order, plus
/// the positions of fields whose value is fixed by a constant (`constants[i]`
/// belongs to `positions[i]`).
///
/// Every field is read from its column first, constant-bound fields included,
/// and the constants are written over the result afterwards. The column of a
/// constant-bound field therefore still has to be present and well-formed, and
/// side effects of its reader are preserved.
///
/// The reader itself is immutable and can be shared. Nested struct values are
/// always materialized into a fresh [`Row`]; reuse of a single top-level row
/// buffer is handled by [`RowReader`](crate::row_reader::RowReader).
#[derive(Debug)]
pub struct StructReader {
    readers: Vec<ValueReader>,
    positions: Vec<usize>,
    constants: Vec<Value>,
}

impl StructReader {
    /// Creates a struct reader without constant-bound fields.
    pub fn new(readers: Vec<ValueReader>) -> StructReader {
        StructReader {
            readers,
            positions: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Creates a struct reader, binding the fields of `struct_type` whose id
    /// appears in `id_to_constant` to the mapped constant.
    ///
    /// Ids in `id_to_constant` that do not belong to `struct_type` are ignored;
    /// the same map can be handed to every struct of a schema.
    ///
    /// # Errors
    ///
    /// Returns a binding mismatch if `readers` and `struct_type` disagree on the
    /// number of fields.
    pub fn with_constants(
        readers: Vec<ValueReader>,
        struct_type: &StructType,
        id_to_constant: &IdToConstant,
    ) -> Result<StructReader> {
        verify_binding!(readers, readers.len() == struct_type.len());

        let (positions, constants): (Vec<_>, Vec<_>) = struct_type
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(pos, field)| {
                id_to_constant
                    .get(&field.id)
                    .map(|constant| (pos, constant.clone()))
            })
            .unzip();

        log::debug!(
            "bound {} of {} struct fields to constants at positions {:?}",
            positions.len(),
            readers.len(),
            positions
        );

        Ok(StructReader {
            readers,
            positions,
            constants,
        })
    }

    /// Number of fields in the rows produced by this reader.
    #[inline]
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    pub fn reader(&self, pos: usize) -> Option<&ValueReader> {
        self.readers.get(pos)
    }

    /// Positions of the constant-bound fields, in ascending order.
    pub fn constant_positions(&self) -> &[usize] {
        &self.positions
    }

    /// Constant-bound fields as `(position, constant)` pairs.
    pub fn constants(&self) -> impl Iterator<Item = (usize, &Value)> + '_ {
        self.positions.iter().copied().zip(self.constants.iter())
    }

    /// Creates an empty row shaped for this reader.
    pub fn create_row(&self) -> Row {
        Row::with_len(self.readers.len())
    }

    /// Reads the nested struct at `row` of a struct column into a new row.
    ///
    /// Presence of the struct itself is checked by
    /// [`ValueReader::read`](crate::reader::ValueReader::read).
    pub fn non_null_read(&self, vector: &StructColumnVector, row: usize) -> Result<Row> {
        let mut target = self.create_row();
        self.read_internal(&mut target, &vector.fields, row)?;
        Ok(target)
    }

    /// Reads row `row` of a top-level batch into a new row.
    pub fn read_batch(&self, batch: &RowBatch, row: usize) -> Result<Row> {
        let mut target = self.create_row();
        self.read_batch_into(&mut target, batch, row)?;
        Ok(target)
    }

    /// Reads row `row` of a top-level batch, overwriting every field of `target`.
    ///
    /// # Errors
    ///
    /// Fails if `target` has a different field count than this reader, if `row`
    /// is outside the batch, or if the batch columns do not match the readers.
    pub fn read_batch_into(&self, target: &mut Row, batch: &RowBatch, row: usize) -> Result<()> {
        verify_arg!(target, target.len() == self.readers.len());
        verify_arg!(row, row < batch.size());
        self.read_internal(target, batch.cols(), row)
    }

    fn read_internal(&self, target: &mut Row, columns: &[ColumnVector], row: usize) -> Result<()> {
        verify_binding!(columns, columns.len() == self.readers.len());

        for (pos, (reader, column)) in self.readers.iter().zip(columns).enumerate() {
            target.set(pos, reader.read(column, row)?);
        }

        for (&pos, constant) in self.positions.iter().zip(&self.constants) {
            target.set(pos, Some(constant.clone()));
        }

        Ok(())
    }
}
