//! In-memory column vector model consumed by the rowmat readers.
//!
//! This crate models the vectorized row batch that a columnar file reader hands
//! out: one [`column_vector::ColumnVector`] per top-level field, each with a
//! [`presence::Presence`] null indicator and a physical payload. It does no file
//! format decoding of its own.
//!
//! # Physical representations
//!
//! - [`column_vector::LongColumnVector`]: shared 64-bit integer array, backing
//!   boolean, byte, short, int and long columns
//! - [`column_vector::DoubleColumnVector`]: shared 64-bit float array, backing
//!   float and double columns
//! - [`column_vector::BytesColumnVector`]: shared byte buffer with per-row
//!   `(start, length)` pairs, backing binary and string columns
//! - [`column_vector::StructColumnVector`]: one child vector per nested field
//!
//! A [`batch::RowBatch`] groups the top-level vectors of one batch.

pub mod batch;
pub mod column_vector;
pub mod presence;
