//! Decoded values and record rows.

use serde::{Deserialize, Serialize};

/// A single decoded, non-null value.
///
/// Nulls are represented as `None` wherever a value may be absent
/// (see [`Row`] and [`ValueReader::read`](crate::reader::ValueReader::read)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Binary(Vec<u8>),
    String(String),
    Struct(Row),
}

impl Value {
    pub fn as_struct(&self) -> Option<&Row> {
        match self {
            Value::Struct(row) => Some(row),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<u8> => Binary,
    String => String,
    Row => Struct,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

/// A decoded record: one optional value per field, in schema order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: Vec<Option<Value>>,
}

impl Row {
    /// Creates a row of `len` null fields.
    pub fn with_len(len: usize) -> Row {
        Row {
            values: vec![None; len],
        }
    }

    pub fn from_values(values: Vec<Option<Value>>) -> Row {
        Row { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `pos`, or `None` if the field is null or out of range.
    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos).and_then(Option::as_ref)
    }

    pub fn is_null(&self, pos: usize) -> bool {
        self.get(pos).is_none()
    }

    /// Overwrites the field at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of range.
    #[inline]
    pub fn set(&mut self, pos: usize, value: Option<Value>) {
        self.values[pos] = value;
    }

    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }
}

impl FromIterator<Option<Value>> for Row {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Row {
            values: iter.into_iter().collect(),
        }
    }
}
