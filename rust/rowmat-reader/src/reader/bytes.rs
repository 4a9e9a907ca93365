//! Decoders for variable-length values.
//!
//! The backing buffer of a [`BytesColumnVector`] is shared by every row of the
//! batch and is refilled with the next batch, so each decoded value is copied
//! into its own allocation.

use rowmat_common::{Result, error::Error};
use rowmat_vector::column_vector::BytesColumnVector;

use crate::value::Value;

pub fn read_binary(vector: &BytesColumnVector, row: usize) -> Result<Value> {
    vector.value_at(row).map(|bytes| Value::Binary(bytes.to_vec()))
}

pub fn read_string(vector: &BytesColumnVector, row: usize) -> Result<Value> {
    let bytes = vector.value_at(row)?;
    std::str::from_utf8(bytes)
        .map(|s| Value::String(s.to_owned()))
        .map_err(|e| Error::binding_mismatch("strings", format!("row {row}: {e}")))
}
