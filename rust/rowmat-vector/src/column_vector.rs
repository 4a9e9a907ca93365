//! Physical column vector representations.
//!
//! A column vector holds one field's values for a batch of rows. The layout
//! follows the vectorized row batch model of columnar readers: every integer-like
//! logical type shares a 64-bit integer array, every floating-point type shares a
//! 64-bit float array, variable-length values share one backing buffer addressed
//! by per-row `(start, length)` pairs, and struct columns nest one child vector
//! per field.
//!
//! When a vector is *repeating*, row `0` holds the value and the null flag for
//! every row of the batch.

use std::fmt;

use rowmat_common::{Result, error::Error, verify_arg};

use crate::presence::{Presence, PresenceBuilder};

/// Discriminates the physical representation of a [`ColumnVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    Long,
    Double,
    Bytes,
    Struct,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorKind::Long => "Long",
            VectorKind::Double => "Double",
            VectorKind::Bytes => "Bytes",
            VectorKind::Struct => "Struct",
        };
        f.write_str(name)
    }
}

/// A fixed-width vector of 64-bit values with a null indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveColumnVector<T> {
    pub vector: Vec<T>,
    pub presence: Presence,
    pub is_repeating: bool,
}

/// Backs boolean, byte, short, int and long columns.
pub type LongColumnVector = PrimitiveColumnVector<i64>;

/// Backs float and double columns.
pub type DoubleColumnVector = PrimitiveColumnVector<f64>;

impl<T: Copy + Default> PrimitiveColumnVector<T> {
    /// Creates a vector from raw values and presence.
    ///
    /// # Errors
    ///
    /// Fails if `presence` tracks a different number of rows than `vector`.
    pub fn new(vector: Vec<T>, presence: Presence) -> Result<Self> {
        verify_arg!(presence, presence.len() == vector.len());
        Ok(PrimitiveColumnVector {
            vector,
            presence,
            is_repeating: false,
        })
    }

    /// Creates a vector with the "no nulls" flag set.
    pub fn from_values(values: &[T]) -> Self {
        PrimitiveColumnVector {
            vector: values.to_vec(),
            presence: Presence::Trivial(values.len()),
            is_repeating: false,
        }
    }

    /// Creates a vector from optional values; null slots hold `T::default()`.
    pub fn from_options(values: &[Option<T>]) -> Self {
        let mut presence = PresenceBuilder::new();
        let vector = values
            .iter()
            .map(|value| match value {
                Some(value) => {
                    presence.add_non_null();
                    *value
                }
                None => {
                    presence.add_null();
                    T::default()
                }
            })
            .collect();
        PrimitiveColumnVector {
            vector,
            presence: presence.build(),
            is_repeating: false,
        }
    }

    /// Creates a repeating vector whose single slot stands for every row.
    pub fn repeating(value: Option<T>) -> Self {
        let mut vector = Self::from_options(&[value]);
        vector.is_repeating = true;
        vector
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}

/// Variable-length values packed into one shared backing buffer.
///
/// The value of row `i` occupies `buffer[start[i]..start[i] + length[i]]`. The
/// buffer belongs to the batch and is overwritten when the batch is refilled,
/// so decoded values must be copied out of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BytesColumnVector {
    pub buffer: Vec<u8>,
    pub start: Vec<usize>,
    pub length: Vec<usize>,
    pub presence: Presence,
    pub is_repeating: bool,
}

impl BytesColumnVector {
    /// Creates a vector from a backing buffer and per-row `(start, length)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if `start`, `length` and `presence` disagree on the row count.
    pub fn new(
        buffer: Vec<u8>,
        start: Vec<usize>,
        length: Vec<usize>,
        presence: Presence,
    ) -> Result<BytesColumnVector> {
        verify_arg!(length, length.len() == start.len());
        verify_arg!(presence, presence.len() == start.len());
        Ok(BytesColumnVector {
            buffer,
            start,
            length,
            presence,
            is_repeating: false,
        })
    }

    /// Packs non-null values into a fresh backing buffer.
    pub fn from_values<B: AsRef<[u8]>>(values: &[B]) -> BytesColumnVector {
        let mut vector = BytesColumnVector::default();
        for value in values {
            vector.push_value(value.as_ref());
        }
        vector
    }

    /// Packs optional values into a fresh backing buffer; null rows get an
    /// empty range.
    pub fn from_options<B: AsRef<[u8]>>(values: &[Option<B>]) -> BytesColumnVector {
        let mut vector = BytesColumnVector::default();
        for value in values {
            match value {
                Some(value) => vector.push_value(value.as_ref()),
                None => vector.push_null(),
            }
        }
        vector
    }

    /// Creates a repeating vector whose single slot stands for every row.
    pub fn repeating<B: AsRef<[u8]>>(value: Option<B>) -> BytesColumnVector {
        let mut vector = Self::from_options(&[value]);
        vector.is_repeating = true;
        vector
    }

    pub fn push_value(&mut self, value: &[u8]) {
        self.start.push(self.buffer.len());
        self.length.push(value.len());
        self.buffer.extend_from_slice(value);
        self.presence.push_non_null();
    }

    pub fn push_null(&mut self) {
        self.start.push(self.buffer.len());
        self.length.push(0);
        self.presence.push_null();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.start.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    /// Returns the borrowed byte range of the value at `row`.
    ///
    /// # Errors
    ///
    /// Fails if `row` is out of range, or its `(start, length)` pair does not
    /// fit into the backing buffer.
    pub fn value_at(&self, row: usize) -> Result<&[u8]> {
        let (Some(&start), Some(&length)) = (self.start.get(row), self.length.get(row)) else {
            return Err(Error::invalid_arg(
                "row",
                format!(
                    "row {row} is out of range for {} starts and {} lengths",
                    self.start.len(),
                    self.length.len()
                ),
            ));
        };
        start
            .checked_add(length)
            .and_then(|end| self.buffer.get(start..end))
            .ok_or_else(|| {
                Error::invalid_arg(
                    "row",
                    format!(
                        "range {start}+{length} exceeds the backing buffer of {} bytes",
                        self.buffer.len()
                    ),
                )
            })
    }
}

/// A struct column: one child vector per nested field, row-aligned with the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct StructColumnVector {
    pub fields: Vec<ColumnVector>,
    pub presence: Presence,
    pub is_repeating: bool,
}

impl StructColumnVector {
    /// Creates a struct vector from its child vectors.
    ///
    /// # Errors
    ///
    /// Fails if any child covers fewer rows than `presence`.
    pub fn new(fields: Vec<ColumnVector>, presence: Presence) -> Result<StructColumnVector> {
        let rows = presence.len();
        verify_arg!(fields, fields.iter().all(|field| field.covers(rows)));
        Ok(StructColumnVector {
            fields,
            presence,
            is_repeating: false,
        })
    }

    /// Creates a struct vector of `rows` rows with the "no nulls" flag set.
    pub fn non_null(fields: Vec<ColumnVector>, rows: usize) -> Result<StructColumnVector> {
        Self::new(fields, Presence::Trivial(rows))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.presence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.presence.is_empty()
    }
}

/// One field's columnar storage for a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnVector {
    Long(LongColumnVector),
    Double(DoubleColumnVector),
    Bytes(BytesColumnVector),
    Struct(StructColumnVector),
}

impl ColumnVector {
    pub fn kind(&self) -> VectorKind {
        match self {
            ColumnVector::Long(_) => VectorKind::Long,
            ColumnVector::Double(_) => VectorKind::Double,
            ColumnVector::Bytes(_) => VectorKind::Bytes,
            ColumnVector::Struct(_) => VectorKind::Struct,
        }
    }

    /// Number of row slots physically present in the vector.
    pub fn len(&self) -> usize {
        match self {
            ColumnVector::Long(v) => v.len(),
            ColumnVector::Double(v) => v.len(),
            ColumnVector::Bytes(v) => v.len(),
            ColumnVector::Struct(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn presence(&self) -> &Presence {
        match self {
            ColumnVector::Long(v) => &v.presence,
            ColumnVector::Double(v) => &v.presence,
            ColumnVector::Bytes(v) => &v.presence,
            ColumnVector::Struct(v) => &v.presence,
        }
    }

    pub fn is_repeating(&self) -> bool {
        match self {
            ColumnVector::Long(v) => v.is_repeating,
            ColumnVector::Double(v) => v.is_repeating,
            ColumnVector::Bytes(v) => v.is_repeating,
            ColumnVector::Struct(v) => v.is_repeating,
        }
    }

    /// Maps a logical row to the physical slot holding its value.
    #[inline]
    pub fn slot(&self, row: usize) -> usize {
        if self.is_repeating() { 0 } else { row }
    }

    /// Returns `true` if the vector can serve `rows` logical rows.
    pub fn covers(&self, rows: usize) -> bool {
        if self.is_repeating() {
            rows == 0 || !self.is_empty()
        } else {
            self.len() >= rows
        }
    }
}

impl From<LongColumnVector> for ColumnVector {
    fn from(vector: LongColumnVector) -> Self {
        ColumnVector::Long(vector)
    }
}

impl From<DoubleColumnVector> for ColumnVector {
    fn from(vector: DoubleColumnVector) -> Self {
        ColumnVector::Double(vector)
    }
}

impl From<BytesColumnVector> for ColumnVector {
    fn from(vector: BytesColumnVector) -> Self {
        ColumnVector::Bytes(vector)
    }
}

impl From<StructColumnVector> for ColumnVector {
    fn from(vector: StructColumnVector) -> Self {
        ColumnVector::Struct(vector)
    }
}
