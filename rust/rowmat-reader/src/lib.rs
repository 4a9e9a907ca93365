//! Columnar-to-row value materialization.
//!
//! This crate turns the column vectors of a [`rowmat_vector::batch::RowBatch`]
//! into per-row typed values. A reader tree is bound once per schema and then
//! applied to every row of every batch:
//!
//! - [`reader::ValueReader`] decodes one field. Primitive kinds (boolean, byte,
//!   short, int, long, float, double, binary, string) map one physical vector
//!   representation to one value kind; null cells short-circuit to `None`
//!   before any decoding happens.
//! - [`reader::StructReader`] assembles a [`value::Row`] from one child reader
//!   per field, recursing into nested struct columns, and overwrites
//!   constant-bound fields (e.g. partition values) with their constants once
//!   all fields have been read.
//! - [`row_reader::RowReader`] reads top-level rows either into fresh rows or
//!   into a single reused row buffer, per [`options::Materialization`].
//!
//! Decoding is synchronous and does no I/O. A reader tree that disagrees with
//! the vectors it is applied to fails with a binding mismatch error instead of
//! coercing values.

pub mod constants;
pub mod options;
pub mod reader;
pub mod row_reader;
pub mod schema;
pub mod value;

#[cfg(test)]
mod tests;
