//! Value readers and the null-aware read contract.

use std::{fmt, sync::Arc};

use rowmat_common::{Result, error::Error, verify_arg};
use rowmat_vector::column_vector::{ColumnVector, VectorKind};

use crate::value::Value;

pub mod bytes;
pub mod primitive;
pub mod struct_reader;

pub use struct_reader::StructReader;

/// Reader for one field of a column vector.
///
/// The reader kind is chosen once, when a schema is bound, and every row of that
/// field dispatches through the same variant. Primitive variants are stateless;
/// readers are cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub enum ValueReader {
    /// `i64 != 0` over a Long vector.
    Boolean,
    /// Two's-complement narrowing of a Long vector to `i8`.
    Byte,
    /// Two's-complement narrowing of a Long vector to `i16`.
    Short,
    /// Two's-complement narrowing of a Long vector to `i32`.
    Int,
    Long,
    /// Round-to-nearest narrowing of a Double vector to `f32`.
    Float,
    Double,
    /// Owned copy of a Bytes vector value.
    Binary,
    /// Owned, UTF-8 validated copy of a Bytes vector value.
    String,
    /// Always yields the bound value, without looking at the column.
    Constant(Value),
    /// Nested record over a Struct vector.
    Struct(Arc<StructReader>),
    /// Reader for a logical type supplied by the schema-mapping layer.
    Extension(Arc<dyn ExtensionReader>),
}

/// Decoder for a value kind outside the built-in set (e.g. decimals or
/// timestamps derived from Long or Bytes vectors).
///
/// Extension readers only decode present cells; the null check happens in
/// [`ValueReader::read`].
pub trait ExtensionReader: Send + Sync + fmt::Debug + 'static {
    /// Decodes the non-null cell at `row`.
    ///
    /// `row` is already resolved against a repeating vector.
    fn non_null_read(&self, vector: &ColumnVector, row: usize) -> Result<Value>;
}

impl ValueReader {
    pub fn booleans() -> ValueReader {
        ValueReader::Boolean
    }

    pub fn tinyints() -> ValueReader {
        ValueReader::Byte
    }

    pub fn shorts() -> ValueReader {
        ValueReader::Short
    }

    pub fn ints() -> ValueReader {
        ValueReader::Int
    }

    pub fn longs() -> ValueReader {
        ValueReader::Long
    }

    pub fn floats() -> ValueReader {
        ValueReader::Float
    }

    pub fn doubles() -> ValueReader {
        ValueReader::Double
    }

    pub fn binary() -> ValueReader {
        ValueReader::Binary
    }

    pub fn strings() -> ValueReader {
        ValueReader::String
    }

    pub fn constant(value: impl Into<Value>) -> ValueReader {
        ValueReader::Constant(value.into())
    }

    pub fn structs(reader: impl Into<Arc<StructReader>>) -> ValueReader {
        ValueReader::Struct(reader.into())
    }

    pub fn extension(reader: impl ExtensionReader) -> ValueReader {
        ValueReader::Extension(Arc::new(reader))
    }

    /// Reads the cell at `row`, returning `None` for a null cell.
    ///
    /// A repeating vector resolves every `row` to slot `0`. If the vector has no
    /// nulls, or the slot is present, the type-specific decode runs; otherwise
    /// it is skipped entirely.
    ///
    /// [`ValueReader::Constant`] is the exception: it yields its value for every
    /// row, null cells included, without inspecting the vector.
    ///
    /// # Errors
    ///
    /// - Binding mismatch, when the vector representation does not match this
    ///   reader.
    /// - Invalid argument, when `row` is outside the vector.
    pub fn read(&self, vector: &ColumnVector, row: usize) -> Result<Option<Value>> {
        if let ValueReader::Constant(value) = self {
            return Ok(Some(value.clone()));
        }

        let slot = vector.slot(row);
        let presence = vector.presence();
        verify_arg!(row, slot < vector.len() && slot < presence.len());
        if presence.is_null(slot) {
            return Ok(None);
        }
        self.non_null_read(vector, slot).map(Some)
    }

    /// Decodes the cell at `row`, assuming it is present.
    pub fn non_null_read(&self, vector: &ColumnVector, row: usize) -> Result<Value> {
        match (self, vector) {
            (ValueReader::Boolean, ColumnVector::Long(v)) => primitive::read_boolean(v, row),
            (ValueReader::Byte, ColumnVector::Long(v)) => primitive::read_byte(v, row),
            (ValueReader::Short, ColumnVector::Long(v)) => primitive::read_short(v, row),
            (ValueReader::Int, ColumnVector::Long(v)) => primitive::read_int(v, row),
            (ValueReader::Long, ColumnVector::Long(v)) => primitive::read_long(v, row),
            (ValueReader::Float, ColumnVector::Double(v)) => primitive::read_float(v, row),
            (ValueReader::Double, ColumnVector::Double(v)) => primitive::read_double(v, row),
            (ValueReader::Binary, ColumnVector::Bytes(v)) => bytes::read_binary(v, row),
            (ValueReader::String, ColumnVector::Bytes(v)) => bytes::read_string(v, row),
            (ValueReader::Constant(value), _) => Ok(value.clone()),
            (ValueReader::Struct(reader), ColumnVector::Struct(v)) => {
                reader.non_null_read(v, row).map(Value::Struct)
            }
            (ValueReader::Extension(reader), _) => reader.non_null_read(vector, row),
            _ => Err(self.mismatch(vector)),
        }
    }

    /// Name of the reader kind, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueReader::Boolean => "booleans",
            ValueReader::Byte => "tinyints",
            ValueReader::Short => "shorts",
            ValueReader::Int => "ints",
            ValueReader::Long => "longs",
            ValueReader::Float => "floats",
            ValueReader::Double => "doubles",
            ValueReader::Binary => "binary",
            ValueReader::String => "strings",
            ValueReader::Constant(_) => "constant",
            ValueReader::Struct(_) => "struct",
            ValueReader::Extension(_) => "extension",
        }
    }

    /// The vector representation this reader decodes, if it is fixed.
    pub fn expected_kind(&self) -> Option<VectorKind> {
        match self {
            ValueReader::Boolean
            | ValueReader::Byte
            | ValueReader::Short
            | ValueReader::Int
            | ValueReader::Long => Some(VectorKind::Long),
            ValueReader::Float | ValueReader::Double => Some(VectorKind::Double),
            ValueReader::Binary | ValueReader::String => Some(VectorKind::Bytes),
            ValueReader::Struct(_) => Some(VectorKind::Struct),
            ValueReader::Constant(_) | ValueReader::Extension(_) => None,
        }
    }

    #[cold]
    fn mismatch(&self, vector: &ColumnVector) -> Error {
        let expected = self
            .expected_kind()
            .map_or_else(|| "any".to_string(), |kind| kind.to_string());
        Error::binding_mismatch(
            self.name(),
            format!("expected {expected} vector, found {}", vector.kind()),
        )
    }
}

impl From<StructReader> for ValueReader {
    fn from(reader: StructReader) -> Self {
        ValueReader::structs(reader)
    }
}
